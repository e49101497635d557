use super::view_model::BusinessDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_business::MachineField;
use leptos::prelude::*;

/// Список оборудования предприятия. Строки адресуются только позицией.
#[component]
pub fn MachineryEditor(vm: BusinessDetailsViewModel) -> impl IntoView {
    let machine_count = vm.machine_count();

    view! {
        <fieldset class="details-section machinery">
            <legend class="details-section__title">
                {icon("machine")}
                " Machinery"
            </legend>

            {move || {
                let count = machine_count.get();
                if count == 0 {
                    view! { <p class="machinery__empty">"No machinery added yet."</p> }.into_any()
                } else {
                    (0..count)
                        .map(|index| view! { <MachineRow vm=vm index=index /> })
                        .collect_view()
                        .into_any()
                }
            }}

            <Button
                variant="secondary"
                size="sm"
                on_click=Callback::new(move |_| vm.add_machine())
            >
                {icon("plus")}
                " Add machine"
            </Button>
        </fieldset>
    }
}

#[component]
fn MachineRow(vm: BusinessDetailsViewModel, index: usize) -> impl IntoView {
    let input_for = move |field: MachineField, label: &'static str| {
        view! {
            <Input
                id=format!("machine-{}-{}", index, field.wire_name())
                label=label
                value=vm.machine_field(index, field)
                on_input=Callback::new(move |v: String| vm.set_machine_field(index, field, v))
            />
        }
    };

    view! {
        <div class="machinery__row">
            <div class="machinery__row-header">
                <span class="machinery__row-title">{format!("Machine #{}", index + 1)}</span>
                <Button
                    variant="danger"
                    size="sm"
                    title="Remove machine"
                    on_click=Callback::new(move |_| vm.remove_machine(index))
                >
                    {icon("trash")}
                </Button>
            </div>
            <div class="machinery__grid">
                {input_for(MachineField::Name, "Name")}
                {input_for(MachineField::Manufacturer, "Manufacturer")}
                {input_for(MachineField::YearOfManufacture, "Year of manufacture")}
                {input_for(MachineField::Description, "Description")}
            </div>
            <Textarea
                id=format!("machine-{}-specifications", index)
                label="Specifications"
                rows=2
                value=vm.machine_field(index, MachineField::Specifications)
                on_input=Callback::new(move |v: String| {
                    vm.set_machine_field(index, MachineField::Specifications, v)
                })
            />
        </div>
    }
}
