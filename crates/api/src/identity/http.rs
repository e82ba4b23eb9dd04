//! HTTP client for the external identity service.

use async_trait::async_trait;
use ccrp_core::identity::{IdentityError, IdentityProvider, SignInOutcome};
use reqwest::StatusCode;
use serde::Serialize;

/// Identity provider backed by the hosted identity service's REST API.
///
/// One call per operation: no retry, no explicit timeout beyond the
/// client's defaults, no cancellation. A transport failure maps to
/// [`IdentityError::Unavailable`] and surfaces as a user-visible notice.
pub struct HttpIdentity {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    identifier: &'a str,
    secret: &'a str,
}

#[derive(Serialize)]
struct ProvisionBody<'a> {
    identifier: &'a str,
    secret: &'a str,
    redirect_to: &'a str,
}

impl HttpIdentity {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Extract an error message from a non-success response body, falling
    /// back to the HTTP status.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("identity service returned {status}")),
            Err(_) => format!("identity service returned {status}"),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentity {
    async fn sign_in(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<SignInOutcome, IdentityError> {
        let response = self
            .client
            .post(self.endpoint("sign-in"))
            .json(&SignInBody { identifier, secret })
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(SignInOutcome::Success),
            StatusCode::NOT_FOUND => Ok(SignInOutcome::NotFound),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(IdentityError::Rejected(Self::error_message(response).await))
            }
            _ => Err(IdentityError::Unavailable(
                Self::error_message(response).await,
            )),
        }
    }

    async fn provision(
        &self,
        identifier: &str,
        secret: &str,
        redirect_target: &str,
    ) -> Result<(), IdentityError> {
        let response = self
            .client
            .post(self.endpoint("sign-up"))
            .json(&ProvisionBody {
                identifier,
                secret,
                redirect_to: redirect_target,
            })
            .send()
            .await
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => {
                Err(IdentityError::Rejected(Self::error_message(response).await))
            }
            _ => Err(IdentityError::Unavailable(
                Self::error_message(response).await,
            )),
        }
    }
}
