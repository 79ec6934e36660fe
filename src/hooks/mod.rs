pub mod app_context;
pub mod use_session;
pub mod use_timetable;

pub use app_context::{use_app_context, AppContext, AppContextProvider};
pub use use_session::{use_session, UseSessionHandle};
pub use use_timetable::{use_timetable, UseTimetableHandle};
