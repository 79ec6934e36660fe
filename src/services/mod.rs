pub mod api_client;
pub mod api_error;
pub mod realtime;

pub use api_client::ApiClient;
pub use api_error::ApiError;
