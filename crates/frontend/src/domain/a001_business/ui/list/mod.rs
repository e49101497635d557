use crate::domain::a001_business::BUSINESS_NEW_ROUTE;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Целевая страница после сохранения/импорта
#[component]
#[allow(non_snake_case)]
pub fn BusinessList() -> impl IntoView {
    view! {
        <div class="content">
            <div class="header">
                <h2>{icon("business")}" Businesses"</h2>
                <div class="header__actions">
                    <A href=BUSINESS_NEW_ROUTE attr:class="button button--primary">
                        {icon("plus")}
                        " New business"
                    </A>
                </div>
            </div>
            <p class="list__hint">"Registered businesses are stored by the registry service."</p>
        </div>
    }
}
