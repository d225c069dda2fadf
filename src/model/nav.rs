//! Sections of the dashboard menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    UserIcon,
    Calendar,
    Users2,
    GitBranch,
    Images,
    Settings2,
}

impl NavIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::Home => "Home",
            NavIcon::UserIcon => "UserIcon",
            NavIcon::Calendar => "Calendar",
            NavIcon::Users2 => "Users2",
            NavIcon::GitBranch => "GitBranch",
            NavIcon::Images => "Images",
            NavIcon::Settings2 => "Settings2",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::UserIcon => "👤",
            NavIcon::Calendar => "📅",
            NavIcon::Users2 => "👥",
            NavIcon::GitBranch => "🔀",
            NavIcon::Images => "🖼",
            NavIcon::Settings2 => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardNav {
    pub name: &'static str,
    pub icon: NavIcon,
    /// Route fragment below the dashboard root, empty for the root itself.
    pub link: &'static str,
}

impl DashboardNav {
    const fn new(name: &'static str, icon: NavIcon, link: &'static str) -> Self {
        Self { name, icon, link }
    }

    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub static DASHBOARD_NAVS: [DashboardNav; 7] = [
    DashboardNav::new("dashboard", NavIcon::Home, ""),
    DashboardNav::new("profile", NavIcon::UserIcon, "profile"),
    DashboardNav::new("calendar", NavIcon::Calendar, "calendar"),
    DashboardNav::new("collaborators", NavIcon::Users2, "collaborators"),
    DashboardNav::new("groups", NavIcon::GitBranch, "groups"),
    DashboardNav::new("images", NavIcon::Images, "images"),
    DashboardNav::new("settings", NavIcon::Settings2, "settings"),
];

pub fn find(link: &str) -> Option<&'static DashboardNav> {
    DASHBOARD_NAVS.iter().find(|nav| nav.link == link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_order() {
        let names = DASHBOARD_NAVS.iter().map(|nav| nav.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "dashboard",
                "profile",
                "calendar",
                "collaborators",
                "groups",
                "images",
                "settings"
            ]
        );
    }

    #[test]
    fn test_find_by_link() {
        let groups = find("groups").unwrap();
        assert_eq!(groups.icon, NavIcon::GitBranch);
        assert_eq!(groups.icon.as_str(), "GitBranch");
        assert_eq!(find("").unwrap().name, "dashboard");
        assert!(find("billing").is_none());
    }

    #[test]
    fn test_title() {
        assert_eq!(DASHBOARD_NAVS[3].title(), "Collaborators");
    }
}
