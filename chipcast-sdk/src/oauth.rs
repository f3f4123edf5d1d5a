//! OAuth 1.0a request signing (RFC 5849) for the X API.
//!
//! The X API authenticates user-context writes with HMAC-SHA1 signed
//! requests. The header sent on the wire looks like:
//!
//! ```text
//! Authorization: OAuth oauth_consumer_key="...", oauth_nonce="...",
//!     oauth_signature="...", oauth_signature_method="HMAC-SHA1",
//!     oauth_timestamp="...", oauth_token="...", oauth_version="1.0"
//! ```
//!
//! The signature covers the HTTP method, the base URL (no query string) and
//! every query/form parameter plus the `oauth_*` parameters. JSON bodies are
//! not part of the signature.

use rand::Rng;
use std::fmt;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 32;

/// Consumer and access-token credentials of one X account.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

// Secrets stay out of logs.
impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

impl OAuthCredentials {
    /// Build the `Authorization` header value for a request, with a fresh
    /// nonce and the current time.
    ///
    /// `params` are the query or form parameters of the request.
    pub fn authorization_header(&self, method: &str, url: &str, params: &[(&str, &str)]) -> String {
        let timestamp = time::OffsetDateTime::now_utc().unix_timestamp();
        self.authorization_header_with(method, url, params, &generate_nonce(), timestamp)
    }

    /// Same as [`authorization_header`](Self::authorization_header) with a
    /// caller-provided nonce and timestamp.
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        nonce: &str,
        timestamp: i64,
    ) -> String {
        let timestamp = timestamp.to_string();
        let mut oauth_params = vec![
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.access_token.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let mut all_params = oauth_params.clone();
        all_params.extend_from_slice(params);
        let base = signature_base_string(method, url, &all_params);
        let signature = sign(&base, &self.consumer_secret, &self.access_token_secret);

        oauth_params.push(("oauth_signature", signature.as_str()));
        oauth_params.sort();
        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {fields}")
    }
}

/// RFC 3986 percent-encoding: everything but `A-Z a-z 0-9 - . _ ~`.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Build the signature base string:
/// `METHOD&enc(url)&enc(k1=v1&k2=v2...)` with parameters encoded then sorted.
pub fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>();
    encoded.sort();
    let parameter_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(url),
        percent_encode(&parameter_string)
    )
}

/// `base64(HMAC-SHA1(base, enc(consumer_secret)&enc(token_secret)))`.
pub fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let signing_key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let tag = ring::hmac::sign(
        &ring::hmac::Key::new(
            ring::hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            signing_key.as_bytes(),
        ),
        base.as_bytes(),
    );
    fast32::base64::RFC4648.encode(tag.as_ref())
}

/// A random alphanumeric nonce.
pub fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
