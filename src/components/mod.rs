pub mod app;
pub mod login_screen;
pub mod role_shell;
pub mod sidebar;
pub mod toaster;
pub mod ui;

pub use app::App;
pub use login_screen::LoginScreen;
pub use role_shell::RoleShell;
pub use sidebar::Sidebar;
pub use toaster::Toaster;
