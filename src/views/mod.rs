pub mod placeholder_view;
pub mod timetable_view;

pub use placeholder_view::PlaceholderView;
pub use timetable_view::TimetableView;
