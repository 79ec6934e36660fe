// ============================================================================
// CONSTANTS - Storage keys and fixed routes
// ============================================================================

/// Persisted session (token + user profile)
pub const STORAGE_KEY_SESSION: &str = "learnify_user";

/// Last timetable fetched from the backend
pub const STORAGE_KEY_TIMETABLE: &str = "learnify_timetable";

/// Toasts queued right before a full page load, shown on the next page
pub const STORAGE_KEY_PENDING_TOASTS: &str = "learnify_pending_toasts";

/// Unauthenticated landing route
pub const ROUTE_LOGIN: &str = "/login";

pub const ROUTE_STUDENT_DASHBOARD: &str = "/student/dashboard";
pub const ROUTE_FACULTY_DASHBOARD: &str = "/faculty/dashboard";
