use leptos::prelude::*;

/// Button component with variants (primary, secondary, danger) and sizes (sm, md)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary" or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Button type attribute ("button" by default, "submit" for form submit)
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Accessible label for icon-only buttons
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), size_class())
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
