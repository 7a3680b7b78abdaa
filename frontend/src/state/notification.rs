use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn confirm_button_color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#3B82F6",
            NotificationKind::Error => "#EF4444",
        }
    }

    fn default_title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Berhasil!",
            NotificationKind::Error => "Gagal!",
        }
    }
}

/// Outcome of a user action, rendered by `NotificationPopup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, text)
    }

    fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.default_title().to_string(),
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

#[derive(Clone, Copy)]
pub struct NotificationState {
    current: RwSignal<Option<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
        }
    }

    /// Replaces whatever is on screen; popups do not queue.
    pub fn show(&self, notification: Notification) {
        self.current.set(Some(notification));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Signal<Option<Notification>> {
        self.current.into()
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationState {
    match use_context::<NotificationState>() {
        Some(state) => state,
        None => {
            let state = NotificationState::new();
            provide_context(state);
            state
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn constructors_pick_title_icon_and_color() {
        let ok = Notification::success("Tersimpan");
        assert_eq!(ok.title, "Berhasil!");
        assert_eq!(ok.kind.icon(), "success");
        assert_eq!(ok.kind.confirm_button_color(), "#3B82F6");
        assert!(ok.is_success());

        let failed = Notification::error("Gagal menyimpan");
        assert_eq!(failed.title, "Gagal!");
        assert_eq!(failed.kind.icon(), "error");
        assert_eq!(failed.kind.confirm_button_color(), "#EF4444");
        assert!(!failed.is_success());
    }

    #[test]
    fn show_replaces_current_and_dismiss_clears() {
        with_runtime(|| {
            let state = NotificationState::new();
            assert!(state.current().get_untracked().is_none());

            state.show(Notification::success("A"));
            state.show(Notification::error("B"));
            assert_eq!(
                state.current().get_untracked().map(|n| n.text),
                Some("B".to_string())
            );

            state.dismiss();
            assert!(state.current().get_untracked().is_none());
        });
    }
}
