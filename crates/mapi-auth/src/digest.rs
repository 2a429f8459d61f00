//! Timestamp and content digest header values.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::NaiveDateTime;
use sha2::{Digest, Sha256};

/// Header carrying the request timestamp.
pub const TIMESTAMP_HEADER: &str = "X-Mcash-Timestamp";

/// Header carrying the body digest.
pub const CONTENT_DIGEST_HEADER: &str = "X-Mcash-Content-Digest";

/// `strftime` pattern of the timestamp header: no timezone, no fractions.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a time the way the merchant API expects in `X-Mcash-Timestamp`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mapi_auth::digest::format_timestamp;
///
/// let t = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_milli_opt(9, 5, 7, 999).unwrap();
/// assert_eq!(format_timestamp(&t), "2026-03-01 09:05:07");
/// ```
#[must_use]
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Compute the `X-Mcash-Content-Digest` value: `SHA256=` followed by the
/// base64 of the raw SHA-256 digest of `body`.
///
/// # Examples
///
/// ```
/// use mapi_auth::digest::content_digest;
///
/// assert_eq!(content_digest(b""), "SHA256=47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
/// ```
#[must_use]
pub fn content_digest(body: &[u8]) -> String {
    format!("SHA256={}", BASE64.encode(Sha256::digest(body)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_should_digest_known_body() {
        assert_eq!(
            content_digest(br#"{"name":"x"}"#),
            "SHA256=AinTfjParhSb9AVDpc4dtEWdEPgw1ROSeaor/V9khaE="
        );
    }

    #[test]
    fn test_should_zero_pad_timestamp_fields() {
        let t = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(format_timestamp(&t), "2026-01-02 03:04:05");
    }
}
