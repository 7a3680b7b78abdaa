use crate::pages::super_admin::types::DashboardMenu;
use leptos::*;

#[component]
pub fn SidebarSuperAdmin(
    is_open: RwSignal<bool>,
    #[prop(into)] active_menu: Signal<Option<DashboardMenu>>,
    set_active_menu: Callback<String>,
) -> impl IntoView {
    let close = move |_| is_open.set(false);

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-30 bg-black bg-opacity-40 md:hidden"
                on:click=close
            ></div>
        </Show>
        <aside
            class=move || format!(
                "fixed md:sticky top-16 md:top-28 z-30 h-[calc(100vh-4rem)] w-64 shrink-0 bg-white border-r border-gray-200 transition-transform duration-200 md:translate-x-0 {}",
                if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
            )
            aria-label="Menu super admin"
        >
            <nav class="px-3 py-6 space-y-1">
                {DashboardMenu::ALL
                    .into_iter()
                    .map(|menu| {
                        let is_active = move || active_menu.get() == Some(menu);
                        view! {
                            <button
                                type="button"
                                data-menu=menu.key()
                                aria-current=move || if is_active() { "page" } else { "false" }
                                class=move || format!(
                                    "w-full flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium {}",
                                    if is_active() {
                                        "bg-blue-50 text-blue-700"
                                    } else {
                                        "text-gray-600 hover:bg-gray-100 hover:text-gray-900"
                                    }
                                )
                                on:click=move |_| {
                                    set_active_menu.call(menu.key().to_string());
                                    is_open.set(false);
                                }
                            >
                                <i class=format!("fas {}", menu.icon())></i>
                                <span>{menu.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
