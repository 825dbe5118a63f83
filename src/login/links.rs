//! Fixed destinations and inert controls rendered by the login view.

/// Post-login landing page.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const REGISTER_PATH: &str = "/register";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const TERMS_PATH: &str = "/terms";
pub const PRIVACY_PATH: &str = "/privacy";

/// A declarative hyperlink. Following it is the navigator's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub path: &'static str,
}

/// Every link the view exposes, in page order.
pub const LINKS: [Link; 4] = [
    Link {
        label: "Forgot password?",
        path: FORGOT_PASSWORD_PATH,
    },
    Link {
        label: "Sign up",
        path: REGISTER_PATH,
    },
    Link {
        label: "Terms of Service",
        path: TERMS_PATH,
    },
    Link {
        label: "Privacy Policy",
        path: PRIVACY_PATH,
    },
];

/// Alternate sign-in buttons. They are rendered and disabled while a submit is
/// in flight, but no handshake exists behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederatedProvider {
    Google,
    MetaMask,
}

impl FederatedProvider {
    pub const ALL: [FederatedProvider; 2] = [FederatedProvider::Google, FederatedProvider::MetaMask];

    pub fn label(self) -> &'static str {
        match self {
            FederatedProvider::Google => "Google",
            FederatedProvider::MetaMask => "MetaMask",
        }
    }
}

impl std::fmt::Display for FederatedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
