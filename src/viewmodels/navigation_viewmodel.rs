// ============================================================================
// NAVIGATION VIEWMODEL - per-role route lists, active entry, logout
// ============================================================================

use crate::models::notification::NotificationKind;
use crate::models::session::Role;
use crate::services::realtime::ConnectionManager;
use crate::state::NotificationCenter;
use crate::stores::SessionStore;
use crate::utils::{ROUTE_FACULTY_DASHBOARD, ROUTE_LOGIN, ROUTE_STUDENT_DASHBOARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: &'static str,
    pub label: &'static str,
    /// Icon name, resolved by the stylesheet
    pub icon: &'static str,
    /// Only highlight on an exact path match
    pub exact: bool,
}

const fn item(route: &'static str, label: &'static str, icon: &'static str, exact: bool) -> NavItem {
    NavItem { route, label, icon, exact }
}

pub const STUDENT_NAV: &[NavItem] = &[
    item(ROUTE_STUDENT_DASHBOARD, "Dashboard", "layout-dashboard", true),
    item("/student/courses", "My Courses", "book-open", false),
    item("/student/assignments", "Assignments", "clipboard-list", false),
    item("/student/timetable", "Timetable", "calendar", false),
    item("/student/grades", "Grades", "award", false),
    item("/student/coding-zone", "Coding Zone", "code", false),
    item("/student/quiz-generator", "AI Quiz", "sparkles", false),
];

pub const FACULTY_NAV: &[NavItem] = &[
    item(ROUTE_FACULTY_DASHBOARD, "Dashboard", "layout-dashboard", true),
    item("/faculty/courses", "Courses", "book-open", false),
    item("/faculty/assignments", "Assignments", "clipboard-list", false),
    item("/faculty/students", "Students", "users", false),
    item("/faculty/timetable", "Timetable", "calendar", false),
    item("/faculty/quiz-generator", "AI Quiz", "sparkles", false),
];

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => STUDENT_NAV,
        Role::Faculty | Role::Admin => FACULTY_NAV,
    }
}

pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Student => ROUTE_STUDENT_DASHBOARD,
        Role::Faculty | Role::Admin => ROUTE_FACULTY_DASHBOARD,
    }
}

impl NavItem {
    /// Exact entries need the full path; the rest match the route and
    /// anything below it (`/student/courses/42`), never a sibling prefix
    /// like `/student/courses-archive`.
    pub fn is_active(&self, path: &str) -> bool {
        let path = normalize(path);
        let route = normalize(self.route);
        if self.exact {
            return path == route;
        }
        path == route || path.strip_prefix(route).map_or(false, |rest| rest.starts_with('/'))
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Index of the highlighted entry; the first match wins
pub fn active_index(items: &[NavItem], path: &str) -> Option<usize> {
    items.iter().position(|item| item.is_active(path))
}

pub const LOGOUT_MESSAGE: &str = "Logged out successfully";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired, please sign in again";

fn end_session(session: &SessionStore, realtime: &ConnectionManager) {
    session.remove();
    realtime.close();
}

/// Clears the session, drops the realtime connection and queues the
/// confirmation for the login page. Returns the route to redirect to.
pub fn logout(
    session: &SessionStore,
    realtime: &ConnectionManager,
    notifications: &NotificationCenter,
) -> &'static str {
    end_session(session, realtime);
    notifications.defer(session.backend().as_ref(), NotificationKind::Success, LOGOUT_MESSAGE);
    log::info!("👋 Logout");
    ROUTE_LOGIN
}

/// Same teardown as [`logout`] after the backend rejected the token
pub fn expire_session(
    session: &SessionStore,
    realtime: &ConnectionManager,
    notifications: &NotificationCenter,
) -> &'static str {
    end_session(session, realtime);
    notifications.defer(
        session.backend().as_ref(),
        NotificationKind::Error,
        SESSION_EXPIRED_MESSAGE,
    );
    log::warn!("🔒 Session rejected by the server, signing out");
    ROUTE_LOGIN
}
