use super::icons::NavIcon;

/// One entry in the fixed navigation list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub to: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
    pub badge: Option<&'static str>,
}

impl NavItem {
    /// An entry counts as active only on an exact path match.
    pub fn is_active(&self, path: &str) -> bool {
        self.to == path
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        to: "/",
        icon: NavIcon::Home,
        label: "Home",
        badge: None,
    },
    NavItem {
        to: "/rules",
        icon: NavIcon::Rules,
        label: "Rules",
        badge: None,
    },
    NavItem {
        to: "/staff",
        icon: NavIcon::Staff,
        label: "Staff",
        badge: None,
    },
    // the store isn't built yet, so this lands on the 404 page
    NavItem {
        to: "/notfound",
        icon: NavIcon::Store,
        label: "Store",
        badge: Some("Coming Soon"),
    },
    NavItem {
        to: "/vote",
        icon: NavIcon::Vote,
        label: "Vote",
        badge: None,
    },
];

pub const DISCORD_URL: &str = "https://discord.visantara.com/";

/// Class set for an entry given whether its route is the current one.
/// Active entries are struck through and tinted; the rest stay white.
pub fn decoration_classes(active: bool) -> &'static str {
    if active {
        "line-through text-[lightblue]"
    } else {
        "no-underline text-white"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_entries_in_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Home", "Rules", "Staff", "Store", "Vote"]);
    }

    #[test]
    fn only_the_store_entry_is_badged() {
        let badged: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.badge.is_some())
            .map(|item| item.label)
            .collect();
        assert_eq!(badged, ["Store"]);
        assert_eq!(NAV_ITEMS[3].badge, Some("Coming Soon"));
    }

    #[test]
    fn store_points_at_an_unbuilt_destination() {
        assert_eq!(NAV_ITEMS[3].to, "/notfound");
    }

    #[test]
    fn active_needs_an_exact_match() {
        let rules = NAV_ITEMS[1];
        assert!(rules.is_active("/rules"));
        assert!(!rules.is_active("/rules/"));
        assert!(!rules.is_active("/rules/old"));
        assert!(!rules.is_active("/"));
    }

    #[test]
    fn home_is_active_only_at_the_root() {
        let home = NAV_ITEMS[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/rules"));
        assert!(!home.is_active(""));
    }

    #[test]
    fn rules_path_marks_exactly_one_entry_active() {
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active("/rules"))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, ["Rules"]);
    }

    #[test]
    fn active_entries_are_struck_through() {
        assert!(decoration_classes(true).contains("line-through"));
        assert!(decoration_classes(true).contains("text-[lightblue]"));
    }

    #[test]
    fn inactive_entries_stay_white_and_undecorated() {
        let classes = decoration_classes(false);
        assert!(classes.contains("no-underline"));
        assert!(classes.contains("text-white"));
        assert!(!classes.contains("line-through"));
    }
}
