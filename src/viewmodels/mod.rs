pub mod navigation_viewmodel;
pub mod timetable_viewmodel;

pub use navigation_viewmodel::NavItem;
pub use timetable_viewmodel::{TimetableFilters, TimetableGroup};
