//! GraphQL gateway client: one configured connection for every query and
//! mutation the app sends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway is constructed once at startup and handed to operations via
//! context, never reached through ambient globals. Every call attaches the
//! bearer credential read fresh from the persistence seam, so a login that
//! lands between two calls is picked up without re-wiring anything.
//!
//! ERROR HANDLING
//! ==============
//! Server-reported errors, transport failures, and authorization failures
//! are observed centrally here. An HTTP 401 clears the persisted session
//! and redirects to the login view exactly once per failing call; every
//! other failure is logged and re-thrown unchanged. No retries.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::GatewayConfig;
use crate::util::persistence::SessionPersistence;

/// Failure surfaced by a gateway call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend processed the request and reported a business failure;
    /// carries the backend's own message.
    #[error("{0}")]
    Backend(String),
    /// The request never produced a usable response.
    #[error("gateway transport error: {0}")]
    Transport(String),
    /// The credential was rejected. The persisted session has already been
    /// cleared and the login redirect issued by the time this surfaces.
    #[error("unauthorized")]
    Unauthorized,
}

/// Shared gateway connection.
#[derive(Clone)]
pub struct Gateway {
    config: GatewayConfig,
    store: Arc<dyn SessionPersistence>,
}

impl Gateway {
    pub fn new(config: GatewayConfig, store: Arc<dyn SessionPersistence>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The persistence seam backing this gateway's credential reads.
    pub fn persistence(&self) -> &dyn SessionPersistence {
        self.store.as_ref()
    }

    /// Current bearer token, read fresh from persistence.
    pub fn bearer_token(&self) -> Option<String> {
        self.store.load_token()
    }

    /// POST a GraphQL document and decode the `data` member into `T`.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Backend`] when the gateway reports errors,
    /// [`GatewayError::Unauthorized`] on a 401 (after session expiry), and
    /// [`GatewayError::Transport`] for everything else.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let body = request_body(document, variables);
            let mut request = gloo_net::http::Request::post(&self.config.graphql_endpoint);
            if let Some(token) = self.store.load_token() {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            if let Some(secret) = &self.config.admin_secret {
                request = request.header("x-hasura-admin-secret", secret);
            }
            let response = request
                .json(&body)
                .map_err(|e| GatewayError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| {
                    log::error!("gateway transport error: {e}");
                    GatewayError::Transport(e.to_string())
                })?;
            if response.status() == 401 {
                return Err(self.expire_session());
            }
            if !response.ok() {
                let err = GatewayError::Transport(status_failed_message(response.status()));
                log::error!("{err}");
                return Err(err);
            }
            let raw = response
                .text()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            decode_envelope(&raw).map_err(|err| {
                log::error!("gateway error: {err}");
                err
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (document, variables);
            Err(GatewayError::Transport("not available on server".to_owned()))
        }
    }

    /// Authorization failed: drop the persisted session and bounce to the
    /// login view. Called at most once per failing request.
    #[cfg(any(test, feature = "hydrate"))]
    fn expire_session(&self) -> GatewayError {
        self.store.clear();
        crate::util::nav::redirect_to_login();
        GatewayError::Unauthorized
    }
}

/// GraphQL request envelope.
#[cfg(any(test, feature = "hydrate"))]
fn request_body(document: &str, variables: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "query": document, "variables": variables })
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("gateway returned status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<WireError>>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct WireError {
    message: String,
}

/// Decode a GraphQL response envelope, surfacing server-reported errors
/// as [`GatewayError::Backend`] with the first error's message.
#[cfg(any(test, feature = "hydrate"))]
fn decode_envelope<T: DeserializeOwned>(raw: &str) -> Result<T, GatewayError> {
    let envelope: Envelope<T> = serde_json::from_str(raw)
        .map_err(|e| GatewayError::Transport(format!("invalid gateway response: {e}")))?;
    if let Some(first) = envelope.errors.as_ref().and_then(|errors| errors.first()) {
        return Err(GatewayError::Backend(first.message.clone()));
    }
    envelope
        .data
        .ok_or_else(|| GatewayError::Transport("gateway response missing data".to_owned()))
}
