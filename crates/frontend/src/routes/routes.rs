use crate::domain::a001_business::ui::{BusinessList, BusinessNewPage};
use crate::domain::a001_business::BUSINESS_NEW_ROUTE;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="content">
            <h2>"Page not found"</h2>
            <a href=BUSINESS_NEW_ROUTE>"Register a business"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=BUSINESS_NEW_ROUTE /> } />
                    <Route path=path!("/businesses") view=BusinessList />
                    <Route path=path!("/businesses/new") view=BusinessNewPage />
                </Routes>
            </main>
        </Router>
    }
}
