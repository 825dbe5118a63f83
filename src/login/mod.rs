//! Login form subsystem.
//!
//! # Data Flow
//! ```text
//! keystrokes → controller.rs (set_email / set_password)
//! submit     → state.rs (clear error, validate)
//!            → Error ("enter both")                      [no collaborator call]
//!            → collaborators.rs Authenticator::login     [single await point]
//!                → Ok  → Navigator::navigate("/dashboard")
//!                → Err → generic failure message, inputs kept
//! ```
//!
//! # Design Decisions
//! - One controller per mounted view; state is never shared
//! - The authenticator returns `Result`; no failure kind is surfaced to the user
//! - No timeout or cancellation: a submit runs until the authenticator answers

pub mod collaborators;
pub mod controller;
pub mod http_auth;
pub mod links;
pub mod state;

pub use collaborators::{AuthError, Authenticator, Navigator};
pub use controller::{LoginController, SubmitOutcome};
pub use http_auth::HttpAuthenticator;
pub use links::{FederatedProvider, Link, DASHBOARD_PATH, LINKS};
pub use state::{FormState, LoginPhase, LOGIN_FAILED_MESSAGE, MISSING_FIELDS_MESSAGE};
