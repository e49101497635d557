use super::machinery::MachineryEditor;
use super::view_model::BusinessDetailsViewModel;
use crate::domain::a001_business::api::BusinessApi;
use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::navigation::Navigator;
use contracts::domain::a001_business::{BusinessField, BusinessFlag};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn BusinessDetails(
    api: Rc<dyn BusinessApi>,
    navigator: Rc<dyn Navigator>,
) -> impl IntoView {
    let vm = BusinessDetailsViewModel::new();

    let text_input = move |field: BusinessField,
                           label: &'static str,
                           input_type: &'static str,
                           placeholder: &'static str| {
        view! {
            <Input
                id=field.wire_name()
                label=label
                input_type=input_type
                placeholder=placeholder
                required={field == BusinessField::Name}
                value=vm.field(field)
                on_input=Callback::new(move |v: String| vm.set_field(field, v))
            />
        }
    };

    let flag_input = move |flag: BusinessFlag, label: &'static str| {
        view! {
            <Checkbox
                id=flag.wire_name()
                label=label
                checked=vm.flag(flag)
                on_change=Callback::new(move |checked: bool| vm.set_flag(flag, checked))
            />
        }
    };

    let is_form_valid = vm.is_form_valid();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(api.clone(), navigator.clone());
    };

    view! {
        <div class="details-container business-details">
            <div class="details-header">
                <h3>{icon("business")}" New business"</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form class="details-form" on:submit=on_submit>
                {text_input(BusinessField::Name, "Name", "text", "")}
                {text_input(BusinessField::CorporateId, "Corporate ID", "text", "")}
                {text_input(BusinessField::BusinessType, "Business type", "text", "Manufacturing, retail, ...")}
                {text_input(BusinessField::Phone, "Phone", "tel", "")}
                {text_input(BusinessField::Email, "Email", "email", "info@example.com")}
                {text_input(BusinessField::Website, "Website", "url", "https://")}
                {text_input(BusinessField::Location, "Location", "text", "City, address")}

                <Textarea
                    id="description"
                    label="Description"
                    placeholder="What the business does"
                    rows=4
                    value=vm.field(BusinessField::Description)
                    on_input=Callback::new(move |v: String| vm.set_field(BusinessField::Description, v))
                />

                <div class="details-flags">
                    {flag_input(BusinessFlag::IsOpen, "Currently open")}
                    {flag_input(BusinessFlag::OpenToNewBusiness, "Open to new business")}
                </div>

                <MachineryEditor vm=vm />

                <div class="details-actions">
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || vm.is_saving.get() || !is_form_valid.get())
                    >
                        {icon("save")}
                        {move || if vm.is_saving.get() { " Saving..." } else { " Create business" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
