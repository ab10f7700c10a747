//! HTTP client for the sign-up endpoint.
//!
//! Browser (`csr`): real `POST` via `gloo-net`.
//! Native builds: `SubmitError::Unavailable`, so pure state code and tests
//! compile and run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a typed `SubmitError`; callers decide how to surface it.
//! There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SignUpRequest, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("sign up failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl SubmitError {
    /// Message shown next to the submit button.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Request(_) | SubmitError::Unavailable => {
                "Could not reach the sign-up service. Please try again.".to_owned()
            }
            SubmitError::Status(status) => format!("Sign up was rejected (status {status}). Please try again."),
            SubmitError::Decode(_) => "The sign-up service sent an unexpected response.".to_owned(),
        }
    }
}

/// Something that can create a user from form values.
#[allow(async_fn_in_trait)]
pub trait SignUpEndpoint {
    /// Submit `request` and return the created record.
    ///
    /// # Errors
    ///
    /// Returns a `SubmitError` for transport failures, non-2xx statuses, or bodies
    /// that are not a `UserRecord`.
    async fn submit(&self, request: &SignUpRequest) -> Result<UserRecord, SubmitError>;
}

/// JSON-over-HTTP endpoint at a fixed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSignUpEndpoint {
    pub url: String,
}

impl HttpSignUpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl SignUpEndpoint for HttpSignUpEndpoint {
    async fn submit(&self, request: &SignUpRequest) -> Result<UserRecord, SubmitError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url)
                .json(request)
                .map_err(|e| SubmitError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Request(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<UserRecord>()
                .await
                .map_err(|e| SubmitError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(SubmitError::Unavailable)
        }
    }
}

/// Accept 2xx, reject everything else.
#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}
