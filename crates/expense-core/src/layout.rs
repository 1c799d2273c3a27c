//! Layout shell helpers: breadcrumbs, avatar initials, navigation, sidebar

use shared::{CONFIG, NavEntry};

use crate::model::{Role, User};

/// Where the "Home" crumb and the post-login redirect point
pub const HOME_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub href: String,
}

fn segment_label(segment: &str) -> String {
    match segment {
        "dashboard" => "Dashboard".to_string(),
        _ => {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// "Home" followed by one crumb per path segment
///
/// `/dashboard/reports` gives Home (/dashboard), Dashboard (/dashboard),
/// Reports (/dashboard/reports).
pub fn breadcrumbs(pathname: &str) -> Vec<Breadcrumb> {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

    let mut crumbs = vec![Breadcrumb {
        name: "Home".to_string(),
        href: HOME_PATH.to_string(),
    }];
    crumbs.extend(segments.iter().enumerate().map(|(i, segment)| Breadcrumb {
        name: segment_label(segment),
        href: format!("/{}", segments[..=i].join("/")),
    }));
    crumbs
}

/// Avatar text: initials of the full name, else the first two letters of
/// the email, else "U"
pub fn initials(user: Option<&User>) -> String {
    let Some(user) = user else {
        return "U".to_string();
    };

    let from_name: String = user
        .full_name
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    if !from_name.is_empty() {
        return from_name.to_uppercase();
    }

    let from_email: String = user.email.chars().take(2).collect();
    if !from_email.is_empty() {
        return from_email.to_uppercase();
    }

    "U".to_string()
}

pub fn display_name(user: Option<&User>) -> &str {
    user.and_then(|u| u.full_name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("User")
}

/// First word of the full name, for "Welcome back, ...!"
pub fn greeting_name(user: Option<&User>) -> &str {
    display_name(user).split_whitespace().next().unwrap_or("User")
}

/// Navigation entries the role may see, in configured order
pub fn nav_items_for(role: Role) -> Vec<&'static NavEntry> {
    CONFIG
        .navigation
        .iter()
        .filter(|item| item.roles.contains(&role.as_str()))
        .collect()
}

/// Title of the pending-expenses card
pub fn pending_card_title(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Employee) => "My Pending Expenses",
        _ => "Pending Approvals",
    }
}

/// Collapsible sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
}

impl SidebarState {
    pub const EXPANDED_WIDTH: u32 = 256;
    pub const COLLAPSED_WIDTH: u32 = 80;

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn width_px(&self) -> u32 {
        if self.collapsed {
            Self::COLLAPSED_WIDTH
        } else {
            Self::EXPANDED_WIDTH
        }
    }
}
