//! Endpoint configuration for the remote gateway and upload API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The data backend is third-party: a GraphQL gateway for queries and
//! mutations plus a small REST API for uploads and payment callbacks. This
//! module is the single place that knows where both live.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Connection settings for the remote gateway and REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// GraphQL endpoint queries and mutations are POSTed to.
    pub graphql_endpoint: String,
    /// Base URL of the REST API (uploads, payment callbacks). Relative
    /// upload URLs are resolved against this.
    pub api_base: String,
    /// Optional gateway admin secret. The upstream deployments disagree on
    /// whether this header is sent, so it is off unless configured.
    pub admin_secret: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: "http://localhost:8080/v1/graphql".to_owned(),
            api_base: "http://localhost:8000".to_owned(),
            admin_secret: None,
        }
    }
}

impl GatewayConfig {
    /// Full URL of the image upload endpoint.
    pub fn upload_endpoint(&self) -> String {
        format!("{}/upload/image", self.api_base.trim_end_matches('/'))
    }

    /// Resolve a relative path returned by the REST API into an absolute URL.
    pub fn resolve_api_url(&self, relative: &str) -> String {
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return relative.to_owned();
        }
        let base = self.api_base.trim_end_matches('/');
        if relative.starts_with('/') {
            format!("{base}{relative}")
        } else {
            format!("{base}/{relative}")
        }
    }
}
