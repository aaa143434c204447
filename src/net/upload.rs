//! Image upload against the REST endpoint.
//!
//! A single multipart POST with the bearer credential attached. No
//! chunking, no resumability, no retry; the caller gets the absolute URL
//! of the stored image or a typed failure.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use thiserror::Error;

#[cfg(feature = "hydrate")]
use super::gateway::Gateway;
#[cfg(feature = "hydrate")]
use super::types::UploadResponse;

/// Server-side folder uploads land in when no category is given.
pub const DEFAULT_CATEGORY: &str = "recipe";

/// Failure of an upload attempt.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The endpoint answered with a non-success status.
    #[error("upload failed: status {0}")]
    Rejected(u16),
    /// The request never produced a usable response.
    #[error("upload transport error: {0}")]
    Transport(String),
}

/// Upload `file` under `category` ("recipe", "avatar", anything else
/// lands in the shared images folder) and resolve the returned relative
/// URL against the API base.
///
/// # Errors
///
/// [`UploadError::Rejected`] for a non-success HTTP status,
/// [`UploadError::Transport`] for anything that kept a response from
/// arriving or decoding.
#[cfg(feature = "hydrate")]
pub async fn upload(
    gateway: &Gateway,
    file: &web_sys::File,
    category: &str,
) -> Result<String, UploadError> {
    let form = web_sys::FormData::new()
        .map_err(|_| UploadError::Transport("multipart form construction failed".to_owned()))?;
    form.append_with_blob("file", file)
        .map_err(|_| UploadError::Transport("multipart form construction failed".to_owned()))?;
    form.append_with_str("category", category)
        .map_err(|_| UploadError::Transport("multipart form construction failed".to_owned()))?;

    let mut request = gloo_net::http::Request::post(&gateway.config().upload_endpoint());
    if let Some(token) = gateway.bearer_token() {
        request = request.header("Authorization", &format!("Bearer {token}"));
    }
    let response = request
        .body(form)
        .map_err(|e| UploadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::error!("upload transport error: {e}");
            UploadError::Transport(e.to_string())
        })?;
    if !response.ok() {
        let err = UploadError::Rejected(response.status());
        log::error!("{err}");
        return Err(err);
    }
    let body: UploadResponse = response
        .json()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;
    Ok(gateway.config().resolve_api_url(&body.url))
}
