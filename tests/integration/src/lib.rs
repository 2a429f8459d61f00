//! End-to-end tests for the merchant API client.
//!
//! Each test starts a [`MockMerchantServer`] on an ephemeral local port. The
//! server checks `RSA-SHA256` signatures with [`RsaSha256Verifier`], records
//! every request it receives and answers according to the request path:
//!
//! | Path suffix | Response |
//! |-------------|----------|
//! | `/status/404` | `404` with a JSON error body |
//! | `/binary` | `200` with a body that is not UTF-8 |
//! | anything else | `200` echoing method, path and auth scheme as JSON |
//!
//! Signature failures are answered with `401`.
//!
//! Run them with:
//! ```text
//! cargo test -p mapi-integration
//! ```

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use mapi_auth::{AuthStrategy, RsaSha256Verifier};
use mapi_client::{MapiClient, ReqwestTransport};
use mapi_core::{Headers, MapiRequest};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

/// PKCS#1 PEM private key of the test merchant.
pub const MERCHANT_KEY: &str =
    include_str!("../../../crates/mapi-auth/testdata/merchant_key_pkcs1.pem");

/// Public half of [`MERCHANT_KEY`].
pub const MERCHANT_PUBLIC_KEY: &str =
    include_str!("../../../crates/mapi-auth/testdata/merchant_pub.pem");

/// A public key that does not match [`MERCHANT_KEY`].
pub const OTHER_PUBLIC_KEY: &str =
    include_str!("../../../crates/mapi-auth/testdata/other_pub.pem");

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// The request rebuilt with canonical header spelling.
    pub request: MapiRequest,
    /// The verified signature timestamp, for `RSA-SHA256` requests.
    pub signed_at: Option<String>,
}

#[derive(Debug)]
struct ServerState {
    verifier: Option<RsaSha256Verifier>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A local HTTP/1 server standing in for the merchant API.
#[derive(Debug)]
pub struct MockMerchantServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
    handle: JoinHandle<()>,
}

impl MockMerchantServer {
    /// Start a server that verifies signatures with `public_key_pem`.
    pub async fn start(public_key_pem: &str) -> Self {
        let verifier = RsaSha256Verifier::from_public_key_pem(public_key_pem)
            .unwrap_or_else(|e| panic!("invalid test public key: {e}"));
        Self::spawn(Some(verifier)).await
    }

    /// Start a server that rejects every signed request.
    pub async fn start_without_verifier() -> Self {
        Self::spawn(None).await
    }

    async fn spawn(verifier: Option<RsaSha256Verifier>) -> Self {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|e| panic!("failed to bind mock server: {e}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| panic!("mock server has no address: {e}"));
        let state = Arc::new(ServerState {
            verifier,
            requests: Mutex::new(Vec::new()),
        });

        let accept_state = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let state = Arc::clone(&accept_state);
                tokio::spawn(async move {
                    let service = service_fn(move |req| serve(Arc::clone(&state), req));
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        warn!(error = %e, "mock server connection failed");
                    }
                });
            }
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL of the mock API, e.g. `http://127.0.0.1:5123/merchant/v1/`.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/merchant/v1/", self.addr))
            .unwrap_or_else(|e| panic!("invalid mock server URL: {e}"))
    }

    /// A client for this server using `auth`.
    #[must_use]
    pub fn client(&self, auth: impl Into<AuthStrategy>) -> MapiClient {
        MapiClient::builder()
            .base_url(self.base_url())
            .merchant_id("merchant-1")
            .user_id("user-1")
            .auth(auth)
            .transport(Arc::new(ReqwestTransport::new()))
            .build()
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Drop for MockMerchantServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spell a header name the way servers conventionally canonicalize it,
/// e.g. `x-mcash-content-digest` becomes `X-Mcash-Content-Digest`.
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

async fn serve(
    state: Arc<ServerState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!(error = %e, "failed to read request body");
            return Ok(respond(StatusCode::BAD_REQUEST, r#"{"error":"bad body"}"#));
        }
    };

    let host = parts
        .headers
        .get(hyper::header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let path = parts
        .uri
        .path_and_query()
        .map_or("/", |pq| pq.as_str());
    let headers: Headers = parts
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (canonical_header_name(name.as_str()), value.to_owned()))
        })
        .collect();

    let mut request = MapiRequest::new(parts.method.as_str(), format!("http://{host}{path}"))
        .with_headers(headers);
    if !body.is_empty() {
        request = request.with_body(body);
    }

    let scheme = request
        .headers
        .get("Authorization")
        .and_then(|v| v.split_whitespace().next())
        .unwrap_or("none")
        .to_owned();

    let signed_at = if scheme == "RSA-SHA256" {
        let Some(verifier) = state.verifier.as_ref() else {
            return Ok(respond(StatusCode::UNAUTHORIZED, r#"{"error":"no key"}"#));
        };
        match verifier.verify(&request) {
            Ok(verification) => Some(verification.timestamp),
            Err(e) => {
                debug!(error = %e, "rejecting request");
                return Ok(respond(
                    StatusCode::UNAUTHORIZED,
                    r#"{"error":"invalid signature"}"#,
                ));
            }
        }
    } else {
        None
    };

    state
        .requests
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .push(RecordedRequest {
            request,
            signed_at,
        });

    if path.ends_with("/status/404") {
        return Ok(respond(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#));
    }
    if path.ends_with("/binary") {
        return Ok(respond(StatusCode::OK, &b"\xff\xfe\xfd"[..]));
    }

    let echo = serde_json::json!({
        "method": parts.method.as_str(),
        "path": path,
        "auth": scheme,
    });
    Ok(respond(StatusCode::OK, echo.to_string()))
}

fn respond(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("application/json"),
    );
    response
}

mod test_attachment;
mod test_errors;
mod test_signing;
