use crate::{
    components::notification::NotificationPopup,
    pages::super_admin::{
        components::{
            management_table::ManagementTable, news_form::NewsForm, quotes_table::QuotesTable,
            sidebar::SidebarSuperAdmin,
        },
        layout::SuperAdminFrame,
        types::DashboardMenu,
        view_model::use_super_admin_view_model,
    },
    state::notification::use_notifications,
};
use leptos::*;

#[component]
pub fn SuperAdminDashboardPage() -> impl IntoView {
    let vm = use_super_admin_view_model();
    let notifications = use_notifications();

    view! {
        <SuperAdminFrame sidebar_open=vm.sidebar_open>
            <SidebarSuperAdmin
                is_open=vm.sidebar_open
                active_menu=vm.active_menu
                set_active_menu=vm.select_menu
            />
            <main class="flex-1 min-w-0 px-4 py-6 sm:px-6 lg:px-8">
                <ActivePanel menu=vm.active_menu />
            </main>
        </SuperAdminFrame>
        <NotificationPopup state=notifications />
    }
}

/// Exactly one panel per selection; no selection renders nothing.
#[component]
pub fn ActivePanel(#[prop(into)] menu: Signal<Option<DashboardMenu>>) -> impl IntoView {
    move || match menu.get() {
        Some(DashboardMenu::Content) => view! { <NewsForm /> }.into_view(),
        Some(DashboardMenu::Management) => view! { <ManagementTable /> }.into_view(),
        Some(DashboardMenu::Quotes) => view! { <QuotesTable /> }.into_view(),
        None => ().into_view(),
    }
}
