// ABOUTME: Basic authentication middleware for the grocerd API.
// ABOUTME: Compares SHA-256 digests of submitted and expected credentials in constant time.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use grocerd_core::Credentials;
use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};
use tower::{Layer, Service};

const CHALLENGE: &str = r#"Basic realm="restricted", charset="UTF-8""#;

/// A tower Layer that applies Basic authentication to all routes except
/// the health endpoint.
#[derive(Clone)]
pub struct BasicAuthLayer {
    expected: Arc<Credentials>,
}

impl BasicAuthLayer {
    /// Create a new BasicAuthLayer with the expected credentials.
    pub fn new(expected: Credentials) -> Self {
        Self {
            expected: Arc::new(expected),
        }
    }
}

impl<S> Layer<S> for BasicAuthLayer {
    type Service = BasicAuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BasicAuthMiddleware {
            inner,
            expected: Arc::clone(&self.expected),
        }
    }
}

/// The middleware service that checks Basic credentials on each request.
/// Stateless per request: no sessions, no lockout on repeated failure.
#[derive(Clone)]
pub struct BasicAuthMiddleware<S> {
    inner: S,
    expected: Arc<Credentials>,
}

impl<S> Service<Request<Body>> for BasicAuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        // Health probes stay reachable without credentials.
        if req.uri().path() == "/health" {
            let mut inner = self.inner.clone();
            return Box::pin(async move { inner.call(req).await });
        }

        let authorized = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_basic)
            .map(|(username, password)| credentials_match(&self.expected, &username, &password))
            .unwrap_or(false);

        if authorized {
            let mut inner = self.inner.clone();
            Box::pin(async move { inner.call(req).await })
        } else {
            Box::pin(async move {
                let body = serde_json::json!({ "error": "unauthorized" });
                let resp = Response::builder()
                    .status(StatusCode::UNAUTHORIZED)
                    .header(header::WWW_AUTHENTICATE, CHALLENGE)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap();
                Ok(resp)
            })
        }
    }
}

/// Extract the username and password from a `Basic <base64(user:pass)>`
/// header value. Returns None for any other scheme or malformed payload.
fn parse_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?.trim();
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Compare submitted credentials against the expected pair. Both the
/// username and the password check always run; there is no short-circuit
/// on a username mismatch.
fn credentials_match(expected: &Credentials, username: &str, password: &str) -> bool {
    let username_ok = digests_match(username, &expected.username);
    let password_ok = digests_match(password, &expected.password);
    (username_ok & password_ok).into()
}

/// Hash both values to fixed-size SHA-256 digests and compare the digests
/// in constant time. Hashing first means inputs of different lengths still
/// go through the same comparison.
fn digests_match(submitted: &str, expected: &str) -> Choice {
    let submitted = Sha256::digest(submitted.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    submitted.as_slice().ct_eq(expected.as_slice())
}
