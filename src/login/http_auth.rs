//! [`Authenticator`] backed by an HTTP login endpoint.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::config::AuthConfig;
use crate::login::collaborators::{AuthError, Authenticator};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// POSTs `{"email", "password"}` as JSON and treats any 2xx as success.
#[derive(Debug, Clone)]
pub struct HttpAuthenticator {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpAuthenticator {
    pub fn new(config: &AuthConfig) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(&config.base_url)?.join(&config.login_path)?;
        Ok(Self::with_client(reqwest::Client::new(), endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected(status.as_u16()))
        }
    }
}
