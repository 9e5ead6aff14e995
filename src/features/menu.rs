//! Floating action menu entries. The menu is rebuilt from the current theme
//! and session flags whenever either changes.

use crate::app_lib::theme::ThemeMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuContext {
    pub theme: ThemeMode,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    ToggleTheme,
    ScrollToTop,
    SignOutUser,
    SignOutAdmin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Link {
        label: &'static str,
        href: &'static str,
        icon: &'static str,
    },
    Action {
        label: &'static str,
        icon: &'static str,
        action: MenuAction,
    },
    Divider,
}

pub fn build_menu(context: MenuContext) -> Vec<MenuEntry> {
    let mut entries = vec![
        MenuEntry::Link {
            label: "Contact us",
            href: "/contact",
            icon: "mail",
        },
        MenuEntry::Action {
            label: "Back to top",
            icon: "arrow_upward",
            action: MenuAction::ScrollToTop,
        },
        match context.theme {
            ThemeMode::Light => MenuEntry::Action {
                label: "Dark mode",
                icon: "dark_mode",
                action: MenuAction::ToggleTheme,
            },
            ThemeMode::Dark => MenuEntry::Action {
                label: "Light mode",
                icon: "light_mode",
                action: MenuAction::ToggleTheme,
            },
        },
        MenuEntry::Divider,
    ];

    if context.is_authenticated {
        entries.push(MenuEntry::Action {
            label: "Sign out",
            icon: "logout",
            action: MenuAction::SignOutUser,
        });
    } else {
        entries.push(MenuEntry::Link {
            label: "Sign in",
            href: "/login",
            icon: "login",
        });
    }

    if context.is_admin {
        entries.extend([
            MenuEntry::Divider,
            MenuEntry::Link {
                label: "Dashboard",
                href: "/admin",
                icon: "dashboard",
            },
            MenuEntry::Link {
                label: "Blog posts",
                href: "/admin/blogs",
                icon: "article",
            },
            MenuEntry::Link {
                label: "Products",
                href: "/admin/products",
                icon: "inventory_2",
            },
            MenuEntry::Link {
                label: "Settings",
                href: "/admin/settings",
                icon: "settings",
            },
            MenuEntry::Action {
                label: "Leave admin",
                icon: "admin_panel_settings",
                action: MenuAction::SignOutAdmin,
            },
        ]);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::{MenuAction, MenuContext, MenuEntry, build_menu};
    use crate::app_lib::theme::ThemeMode;

    fn has_action(entries: &[MenuEntry], wanted: MenuAction) -> bool {
        entries
            .iter()
            .any(|entry| matches!(entry, MenuEntry::Action { action, .. } if *action == wanted))
    }

    fn has_link(entries: &[MenuEntry], wanted: &str) -> bool {
        entries
            .iter()
            .any(|entry| matches!(entry, MenuEntry::Link { href, .. } if *href == wanted))
    }

    #[test]
    fn theme_entry_offers_the_other_mode() {
        let light = build_menu(MenuContext::default());
        assert!(light.iter().any(|e| matches!(e, MenuEntry::Action { label: "Dark mode", .. })));

        let dark = build_menu(MenuContext {
            theme: ThemeMode::Dark,
            ..MenuContext::default()
        });
        assert!(dark.iter().any(|e| matches!(e, MenuEntry::Action { label: "Light mode", .. })));
    }

    #[test]
    fn visitors_get_sign_in_and_no_admin_links() {
        let entries = build_menu(MenuContext::default());
        assert!(has_link(&entries, "/login"));
        assert!(!has_action(&entries, MenuAction::SignOutUser));
        assert!(!has_link(&entries, "/admin"));
    }

    #[test]
    fn admins_see_back_office_links() {
        let entries = build_menu(MenuContext {
            is_admin: true,
            is_authenticated: true,
            ..MenuContext::default()
        });
        assert!(has_link(&entries, "/admin/products"));
        assert!(has_action(&entries, MenuAction::SignOutAdmin));
        assert!(has_action(&entries, MenuAction::SignOutUser));
        assert!(!has_link(&entries, "/login"));
    }
}
