use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::SuperAdminDashboardPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sekolah Admin"/>
        <Router>
            <Routes>
                <Route path="/" view=SuperAdminDashboardPage/>
                <Route path="/super-admin" view=SuperAdminDashboardPage/>
            </Routes>
        </Router>
    }
}
