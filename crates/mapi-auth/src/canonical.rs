//! Canonical signing input for RSA-SHA256 request authentication.
//!
//! The signing input is a single byte string:
//!
//! ```text
//! UPPER(method) | url | UPPER(name1)=value1 & UPPER(name2)=value2 ...
//! ```
//!
//! (without the spaces), where the name/value pairs are every header whose
//! name starts with `X-Mcash-` (case-sensitive), taken in byte-wise ascending
//! order of the header name as the caller spelled it.

use mapi_core::Headers;

/// Prefix of the headers covered by the signature. Matching is case-sensitive:
/// `x-mcash-foo` is not signed.
pub const SIGNED_HEADER_PREFIX: &str = "X-Mcash-";

/// Iterate over the headers that take part in the signature, in signing order.
pub fn signed_headers(headers: &Headers) -> impl Iterator<Item = (&str, &str)> {
    headers
        .iter()
        .filter(|(name, _)| name.starts_with(SIGNED_HEADER_PREFIX))
}

/// Build the canonical signing input from the request method, URL and headers.
///
/// The header map is sorted by key first and then filtered to the
/// `X-Mcash-` prefix, so the caller's spelling decides both inclusion and
/// position.
///
/// # Examples
///
/// ```
/// use mapi_auth::canonical::build_signing_input;
/// use mapi_core::Headers;
///
/// let headers = Headers::new()
///     .with("X-Mcash-Timestamp", "2026-03-01 12:30:45")
///     .with("Accept", "application/json")
///     .with("X-Mcash-Content-Digest", "SHA256=abc=");
///
/// let input = build_signing_input("post", "https://api.example.com/v1/pos/", &headers);
/// assert_eq!(
///     input,
///     b"POST|https://api.example.com/v1/pos/|X-MCASH-CONTENT-DIGEST=SHA256=abc=&X-MCASH-TIMESTAMP=2026-03-01 12:30:45"
/// );
/// ```
#[must_use]
pub fn build_signing_input(method: &str, url: &str, headers: &Headers) -> Vec<u8> {
    let mut input = Vec::with_capacity(method.len() + url.len() + 128);
    input.extend_from_slice(method.to_uppercase().as_bytes());
    input.push(b'|');
    input.extend_from_slice(url.as_bytes());
    input.push(b'|');

    for (i, (name, value)) in signed_headers(headers).enumerate() {
        if i > 0 {
            input.push(b'&');
        }
        input.extend_from_slice(name.to_uppercase().as_bytes());
        input.push(b'=');
        input.extend_from_slice(value.as_bytes());
    }

    input
}
