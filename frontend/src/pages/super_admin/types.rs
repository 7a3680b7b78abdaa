/// Panels the super-admin sidebar can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardMenu {
    #[default]
    Content,
    Management,
    Quotes,
}

impl DashboardMenu {
    pub const ALL: [DashboardMenu; 3] = [
        DashboardMenu::Content,
        DashboardMenu::Management,
        DashboardMenu::Quotes,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DashboardMenu::Content => "konten",
            DashboardMenu::Management => "manajemen",
            DashboardMenu::Quotes => "quotes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardMenu::Content => "Konten",
            DashboardMenu::Management => "Manajemen",
            DashboardMenu::Quotes => "Quotes",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardMenu::Content => "fa-newspaper",
            DashboardMenu::Management => "fa-users",
            DashboardMenu::Quotes => "fa-quote-left",
        }
    }

    /// Exact, case-sensitive match on the menu key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|menu| menu.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_content_panel() {
        assert_eq!(DashboardMenu::default(), DashboardMenu::Content);
    }

    #[test]
    fn keys_round_trip_and_unknown_keys_are_rejected() {
        for menu in DashboardMenu::ALL {
            assert_eq!(DashboardMenu::from_key(menu.key()), Some(menu));
        }
        assert_eq!(DashboardMenu::from_key("Konten"), None);
        assert_eq!(DashboardMenu::from_key(""), None);
        assert_eq!(DashboardMenu::from_key("laporan"), None);
    }
}
