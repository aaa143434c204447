//! Login and signup calls against the gateway's action mutations.
//!
//! These return raw payloads; applying a successful login to the session
//! and storage is `state::session`'s concern.

use serde::Deserialize;
use thiserror::Error;

use super::gateway::{Gateway, GatewayError};
use super::queries;
use super::types::{AuthPayload, Credentials, SignupInput, SignupPayload};

/// Failure of a login attempt.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend processed the attempt and said no; carries its message.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Deserialize)]
struct LoginData {
    login: AuthPayload,
}

#[derive(Deserialize)]
struct SignupData {
    signup: SignupPayload,
}

/// Run the login mutation.
///
/// # Errors
///
/// Propagates gateway failures unchanged. A payload with `success=false`
/// is NOT an error at this layer; `state::session::complete_login` turns
/// it into [`AuthError::Rejected`].
pub async fn login(
    gateway: &Gateway,
    credentials: &Credentials,
) -> Result<AuthPayload, GatewayError> {
    let data: LoginData = gateway
        .execute(queries::LOGIN_MUTATION, queries::login_variables(credentials))
        .await?;
    Ok(data.login)
}

/// Run the signup mutation. Signing up does not authenticate; the caller
/// inspects the payload's success flag and message.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn signup(gateway: &Gateway, input: &SignupInput) -> Result<SignupPayload, GatewayError> {
    let data: SignupData = gateway
        .execute(queries::SIGNUP_MUTATION, queries::signup_variables(input))
        .await?;
    Ok(data.signup)
}
