// ============================================================================
// APP ROUTING - pathname -> page, with session and role guards
// ============================================================================
// No router crate: every navigation is a full page load, so the root
// component resolves `location.pathname` once per mount.
// ============================================================================

use crate::models::session::{Role, Session};
use crate::utils::ROUTE_LOGIN;
use crate::viewmodels::navigation_viewmodel::dashboard_route;

/// Section under a role prefix, e.g. `timetable` for `/student/timetable`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    Student(String),
    Faculty(String),
    NotFound,
}

const DEFAULT_SECTION: &str = "dashboard";

impl Page {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed == ROUTE_LOGIN {
            return Page::Login;
        }
        let mut segments = trimmed.trim_start_matches('/').splitn(2, '/');
        let prefix = segments.next().unwrap_or_default();
        let section = segments
            .next()
            .map(|rest| rest.split('/').next().unwrap_or_default())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SECTION)
            .to_string();
        match prefix {
            "student" => Page::Student(section),
            "faculty" => Page::Faculty(section),
            _ => Page::NotFound,
        }
    }

    /// Role allowed to see the page; `None` for public pages
    fn required_role(&self) -> Option<Role> {
        match self {
            Page::Student(_) => Some(Role::Student),
            Page::Faculty(_) => Some(Role::Faculty),
            Page::Login | Page::NotFound => None,
        }
    }

    pub fn section(&self) -> Option<&str> {
        match self {
            Page::Student(section) | Page::Faculty(section) => Some(section.as_str()),
            Page::Login | Page::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(&'static str),
}

fn role_can_view(role: Role, required: Role) -> bool {
    match required {
        Role::Student => role == Role::Student,
        Role::Faculty | Role::Admin => matches!(role, Role::Faculty | Role::Admin),
    }
}

/// Decides what the root renders for `path` given the stored session
pub fn resolve(path: &str, session: Option<&Session>) -> Resolution {
    let page = Page::from_path(path);
    match (session, &page) {
        (None, Page::Login) => Resolution::Render(page),
        (None, _) => Resolution::Redirect(ROUTE_LOGIN),
        (Some(session), Page::Login) | (Some(session), Page::NotFound) => {
            Resolution::Redirect(dashboard_route(session.role()))
        }
        (Some(session), _) => match page.required_role() {
            Some(required) if !role_can_view(session.role(), required) => {
                Resolution::Redirect(dashboard_route(session.role()))
            }
            _ => Resolution::Render(page),
        },
    }
}

/// Current `location.pathname`, `/` when unavailable
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full page navigation
pub fn navigate(route: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(route) {
        log::error!("❌ Navigation to {} failed: {:?}", route, e);
    }
}
