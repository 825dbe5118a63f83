//! Login form controller.
//!
//! Owns one view's [`FormState`] and mediates submission to the
//! [`Authenticator`]. Submitting takes `&mut self`, so a second submit on the
//! same instance cannot start while one is awaiting the authenticator.

use crate::login::collaborators::{Authenticator, Navigator};
use crate::login::links::{FederatedProvider, Link, DASHBOARD_PATH, LINKS};
use crate::login::state::{FormState, LoginPhase};

/// Result of one [`LoginController::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the authenticator was not contacted.
    Rejected,
    /// Credentials accepted and the view navigated away.
    Authenticated,
    /// The authenticator reported an error.
    Failed,
}

pub struct LoginController<A, N> {
    state: FormState,
    phase: LoginPhase,
    authenticator: A,
    navigator: N,
}

impl<A, N> LoginController<A, N>
where
    A: Authenticator,
    N: Navigator,
{
    /// Mount a fresh view.
    pub fn new(authenticator: A, navigator: N) -> Self {
        Self {
            state: FormState::default(),
            phase: LoginPhase::Idle,
            authenticator,
            navigator,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.state.set_email(value.into());
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.state.set_password(value.into());
    }

    /// Validate and, if complete, send the credentials.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.begin_attempt();
        self.phase = LoginPhase::Validating;

        if !self.state.is_complete() {
            self.state.reject();
            self.phase = LoginPhase::Error;
            tracing::debug!("Login rejected: missing email or password");
            return SubmitOutcome::Rejected;
        }

        self.state.start_submitting();
        self.phase = LoginPhase::Submitting;
        tracing::debug!(email = %self.state.email(), "Submitting credentials");

        let result = self
            .authenticator
            .login(self.state.email(), self.state.password())
            .await;

        match result {
            Ok(()) => {
                self.navigator.navigate(DASHBOARD_PATH);
                self.state.succeed();
                self.phase = LoginPhase::Success;
                tracing::info!("Login succeeded");
                SubmitOutcome::Authenticated
            }
            Err(e) => {
                self.state.fail();
                self.phase = LoginPhase::Error;
                tracing::warn!(error = %e, "Login failed");
                SubmitOutcome::Failed
            }
        }
    }

    /// Label for the primary button.
    pub fn submit_label(&self) -> &'static str {
        if self.state.submitting() {
            "Signing In..."
        } else {
            "Sign In"
        }
    }

    pub fn federated_providers(&self) -> &'static [FederatedProvider] {
        &FederatedProvider::ALL
    }

    /// Federated buttons are disabled while a submit is in flight.
    pub fn is_federated_enabled(&self) -> bool {
        !self.state.submitting()
    }

    /// Press a federated sign-in button. There is no handshake behind it, so
    /// this never authenticates and always returns `false`.
    pub fn trigger_federated(&self, provider: FederatedProvider) -> bool {
        tracing::debug!(
            provider = %provider,
            enabled = self.is_federated_enabled(),
            "Federated sign-in is not available"
        );
        false
    }

    pub fn links(&self) -> &'static [Link] {
        &LINKS
    }
}
