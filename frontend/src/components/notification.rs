use crate::state::notification::{Notification, NotificationKind, NotificationState};
use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
pub fn NotificationPopup(state: NotificationState) -> impl IntoView {
    let current = state.current();
    let dismiss_on_button = move |_| state.dismiss();
    let dismiss_on_esc = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" || ev.key() == "Enter" {
            ev.prevent_default();
            state.dismiss();
        }
    };

    view! {
        <Show when=move || current.get().is_some()>
            {move || current.get().map(|notification| {
                let Notification { kind, title, text } = notification;
                let (badge_class, glyph) = match kind {
                    NotificationKind::Success => ("bg-green-100 text-green-600", "✓"),
                    NotificationKind::Error => ("bg-red-100 text-red-600", "!"),
                };
                view! {
                    <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                        <div class="absolute inset-0 bg-black bg-opacity-50"></div>
                        <div
                            class="relative z-[71] w-full max-w-sm rounded-lg bg-white shadow-xl p-6 text-center space-y-4"
                            role="alertdialog"
                            aria-modal="true"
                            data-icon=kind.icon()
                            tabindex="-1"
                            on:keydown=dismiss_on_esc
                        >
                            <div class=format!("mx-auto flex h-14 w-14 items-center justify-center rounded-full text-2xl font-bold {}", badge_class)>
                                {glyph}
                            </div>
                            <h2 class="text-xl font-semibold text-gray-900">{title}</h2>
                            <p class="text-sm text-gray-600">{text}</p>
                            <button
                                type="button"
                                class="inline-flex items-center justify-center rounded-md px-6 py-2 text-sm font-semibold text-white"
                                style=format!("background-color: {}", kind.confirm_button_color())
                                on:click=dismiss_on_button
                            >
                                "OK"
                            </button>
                        </div>
                    </div>
                }
            })}
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn popup_renders_nothing_without_notification() {
        let html = render_to_string(move || {
            let state = NotificationState::new();
            view! { <NotificationPopup state=state /> }
        });
        assert!(!html.contains("alertdialog"));
    }

    #[test]
    fn popup_renders_error_with_red_confirm_button() {
        let html = render_to_string(move || {
            let state = NotificationState::new();
            state.show(Notification::error("Gagal menambahkan data siswa"));
            view! { <NotificationPopup state=state /> }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("data-icon=\"error\""));
        assert!(html.contains("Gagal!"));
        assert!(html.contains("Gagal menambahkan data siswa"));
        assert!(html.contains("#EF4444"));
    }

    #[test]
    fn popup_renders_success_with_blue_confirm_button() {
        let html = render_to_string(move || {
            let state = NotificationState::new();
            state.show(Notification::success("Data siswa berhasil ditambahkan"));
            view! { <NotificationPopup state=state /> }
        });
        assert!(html.contains("data-icon=\"success\""));
        assert!(html.contains("Berhasil!"));
        assert!(html.contains("#3B82F6"));
    }
}
