pub mod academic;
pub mod auth;
pub mod notification;
pub mod proxy;
pub mod session;
pub mod timetable;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use notification::{Notification, NotificationKind};
pub use session::{Role, Session, UserProfile};
pub use timetable::{ClassType, TimetableEntry, Weekday};
