use super::{BusinessDetails, BusinessImport};
use crate::domain::a001_business::api::{BusinessApi, HttpBusinessApi};
use crate::shared::navigation::{Navigator, RouterNavigator};
use leptos::prelude::*;
use std::rc::Rc;

/// Страница новой записи: импорт из Excel и ручная форма.
/// Обе части пользуются одним API клиентом и одним навигатором.
#[component]
pub fn BusinessNewPage() -> impl IntoView {
    let api: Rc<dyn BusinessApi> = Rc::new(HttpBusinessApi);
    let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator::new());

    view! {
        <div class="content business-page">
            <div class="header">
                <h2>"Register a business"</h2>
            </div>
            <BusinessImport api=api.clone() navigator=navigator.clone() />
            <BusinessDetails api=api navigator=navigator />
        </div>
    }
}
