use crate::components::layout::Navbar;
use leptos::*;

#[component]
pub fn SuperAdminFrame(sidebar_open: RwSignal<bool>, children: Children) -> impl IntoView {
    let toggle = Callback::new(move |_: ()| sidebar_open.update(|open| *open = !*open));
    view! {
        <div class="min-h-screen bg-gray-50">
            <Navbar on_toggle_sidebar=toggle />
            <div class="flex pt-16 md:pt-20">
                {children()}
            </div>
        </div>
    }
}
