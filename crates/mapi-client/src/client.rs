//! The high-level client facade.

use std::sync::Arc;

use bytes::Bytes;
use mapi_auth::{AuthStrategy, OpenAuth, RsaSha256Auth, SecretAuth};
use mapi_core::{AuthMethod, ConfigError, Headers, MapiConfig, MapiRequest, MapiResponse};
use mapi_model::{MapiOperation, validate};
use serde_json::Value;
use tracing::debug;
use typed_builder::TypedBuilder;
use url::Url;

use crate::attachment;
use crate::dispatch::dispatch;
use crate::error::{MapiError, MapiResult};
use crate::transport::Transport;

/// Media type the merchant API speaks.
pub const MAPI_MEDIA_TYPE: &str = "application/vnd.mcash.api.merchant.v1+json";

/// Sends authenticated requests to one merchant API deployment.
///
/// ```rust
/// use std::sync::Arc;
///
/// use mapi_client::{MapiClient, ReqwestTransport};
/// use url::Url;
///
/// let client = MapiClient::builder()
///     .base_url(Url::parse("https://api.example.com/merchant/v1").unwrap())
///     .transport(Arc::new(ReqwestTransport::new()))
///     .merchant_id("m-1")
///     .build();
///
/// assert_eq!(
///     client.endpoint("/pos/till-1/").unwrap().as_str(),
///     "https://api.example.com/merchant/v1/pos/till-1/"
/// );
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct MapiClient {
    /// API root; a trailing `/` is added when missing.
    #[builder(setter(transform = |url: Url| with_trailing_slash(url)))]
    base_url: Url,
    /// Sent as `X-Mcash-Merchant`.
    #[builder(default, setter(into))]
    merchant_id: String,
    /// Sent as `X-Mcash-User`.
    #[builder(default, setter(into))]
    user_id: String,
    /// Strategy applied to every request except attachment uploads.
    #[builder(default, setter(into))]
    auth: AuthStrategy,
    transport: Arc<dyn Transport>,
}

impl MapiClient {
    /// Build a client from configuration, loading key material as needed.
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not parse, the secret or key path is
    /// missing, the key file cannot be read or the key is not a valid RSA
    /// private key.
    pub fn from_config(config: &MapiConfig, transport: Arc<dyn Transport>) -> MapiResult<Self> {
        let auth: AuthStrategy = match config.auth {
            AuthMethod::Open => OpenAuth.into(),
            AuthMethod::Secret => {
                let secret = config
                    .secret
                    .clone()
                    .ok_or(ConfigError::Missing("MAPI_SECRET"))?;
                SecretAuth::new(secret)?.into()
            }
            AuthMethod::Rsa => {
                let path = config
                    .private_key_path
                    .as_deref()
                    .ok_or(ConfigError::Missing("MAPI_PRIVATE_KEY_PATH"))?;
                let key = std::fs::read(path).map_err(|source| MapiError::KeyFile {
                    path: path.to_owned(),
                    source,
                })?;
                RsaSha256Auth::new(key)?.into()
            }
        };

        Ok(Self::builder()
            .base_url(Url::parse(&config.base_url)?)
            .merchant_id(config.merchant_id.as_str())
            .user_id(config.user_id.as_str())
            .auth(auth)
            .transport(transport)
            .build())
    }

    /// The API root every path is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured auth strategy.
    #[must_use]
    pub fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    /// Resolve `path` against the base URL. A leading `/` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MapiError::InvalidUrl`] if the result is not a valid URL.
    pub fn endpoint(&self, path: &str) -> MapiResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Headers attached to every authenticated request.
    #[must_use]
    pub fn default_headers(&self) -> Headers {
        Headers::new()
            .with("Accept", MAPI_MEDIA_TYPE)
            .with("Content-Type", mime::APPLICATION_JSON.as_ref())
            .with("X-Mcash-Merchant", self.merchant_id.as_str())
            .with("X-Mcash-User", self.user_id.as_str())
    }

    /// Send `method` to `path` with an optional raw body.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](crate::dispatch()).
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Bytes>,
    ) -> MapiResult<MapiResponse> {
        let url = self.endpoint(path)?;
        let mut request = MapiRequest::new(method, url.as_str()).with_headers(self.default_headers());
        if let Some(body) = body {
            request = request.with_body(body);
        }
        dispatch(self.transport.as_ref(), &self.auth, request).await
    }

    /// Validate `payload` for `operation` and send it as JSON.
    ///
    /// Top-level `null` fields are dropped before serialization. An invalid
    /// payload is rejected without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`MapiError::Validation`] for schema violations, otherwise see
    /// [`MapiClient::request`].
    pub async fn call(
        &self,
        operation: MapiOperation,
        path: &str,
        payload: &Value,
    ) -> MapiResult<MapiResponse> {
        validate(operation, payload)?;
        let body = serde_json::to_vec(&without_nulls(payload))?;
        debug!(%operation, path, "calling operation");
        self.request(operation.method(), path, Some(body.into())).await
    }

    /// Upload a file to a pre-authorized attachment URL.
    ///
    /// # Errors
    ///
    /// See [`upload_attachment`](crate::upload_attachment).
    pub async fn upload_attachment(
        &self,
        url: &str,
        mime_type: &str,
        data: impl Into<Bytes>,
    ) -> MapiResult<MapiResponse> {
        attachment::upload_attachment(self.transport.as_ref(), url, mime_type, data).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn without_nulls(payload: &Value) -> Value {
    match payload {
        Value::Object(object) => Value::Object(
            object
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}
