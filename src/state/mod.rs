// ============================================================================
// STATE MODULE - UI state machines and shared Rc<RefCell> state
// ============================================================================

pub mod notification_center;
pub mod select_state;
pub mod tabs_state;

pub use notification_center::NotificationCenter;
pub use select_state::{SelectOption, SelectOutcome, SelectState};
