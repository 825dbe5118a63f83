//! Login portal: the login form controller and the development server that
//! forwards `/api` traffic to the remote origin.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod login;
pub mod observability;
pub mod routing;

pub use config::schema::PortalConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use login::LoginController;
