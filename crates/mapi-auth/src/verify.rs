//! Verification of RSA-SHA256 signed requests.
//!
//! This is the server side of [`RsaSha256Auth`](crate::RsaSha256Auth):
//!
//! 1. Parse the `Authorization` header (`RSA-SHA256 <base64 signature>`).
//! 2. Check `X-Mcash-Content-Digest` against the body using constant-time
//!    comparison.
//! 3. Rebuild the canonical signing input from the received request.
//! 4. Verify the PKCS#1 v1.5 signature with the merchant's public key.
//!
//! Timestamp freshness is left to the caller, which receives the raw
//! timestamp in [`Verification`].

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use mapi_core::MapiRequest;
use rsa::RsaPublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::{build_signing_input, signed_headers};
use crate::digest::{CONTENT_DIGEST_HEADER, TIMESTAMP_HEADER, content_digest};
use crate::error::AuthError;
use crate::rsa_sha256::RSA_SHA256_SCHEME;
use crate::strategy::AUTHORIZATION_HEADER;

/// The result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// The `X-Mcash-Timestamp` value the client signed.
    pub timestamp: String,
    /// Names of the headers covered by the signature, in signing order.
    pub signed_headers: Vec<String>,
}

/// Verifies requests signed by [`RsaSha256Auth`](crate::RsaSha256Auth).
pub struct RsaSha256Verifier {
    verifying_key: VerifyingKey<Sha256>,
}

impl RsaSha256Verifier {
    /// Create a verifier for the given public key.
    #[must_use]
    pub fn new(public_key: RsaPublicKey) -> Self {
        Self {
            verifying_key: VerifyingKey::<Sha256>::new(public_key),
        }
    }

    /// Create a verifier from a PEM public key (`PUBLIC KEY` or
    /// `RSA PUBLIC KEY`).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::KeyFormat`] if the PEM cannot be parsed.
    pub fn from_public_key_pem(pem: &str) -> Result<Self, AuthError> {
        let pem = pem.trim();
        let public_key = if pem.starts_with("-----BEGIN RSA PUBLIC KEY-----") {
            RsaPublicKey::from_pkcs1_pem(pem).map_err(|e| AuthError::KeyFormat(e.to_string()))?
        } else {
            RsaPublicKey::from_public_key_pem(pem)
                .map_err(|e| AuthError::KeyFormat(e.to_string()))?
        };
        Ok(Self::new(public_key))
    }

    /// Verify a signed request.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if:
    /// - `Authorization`, `X-Mcash-Content-Digest` or `X-Mcash-Timestamp` is missing
    /// - the authorization scheme is not `RSA-SHA256` or the signature is not base64
    /// - the content digest does not match the body
    /// - the signature does not verify
    pub fn verify(&self, request: &MapiRequest) -> Result<Verification, AuthError> {
        let headers = &request.headers;

        let authorization = headers
            .get(AUTHORIZATION_HEADER)
            .ok_or_else(|| AuthError::MissingHeader(AUTHORIZATION_HEADER.to_owned()))?;
        let (scheme, encoded) = authorization
            .split_once(' ')
            .ok_or(AuthError::InvalidAuthHeader)?;
        if scheme != RSA_SHA256_SCHEME {
            return Err(AuthError::UnsupportedScheme(scheme.to_owned()));
        }

        let provided_digest = headers
            .get(CONTENT_DIGEST_HEADER)
            .ok_or_else(|| AuthError::MissingHeader(CONTENT_DIGEST_HEADER.to_owned()))?;
        let timestamp = headers
            .get(TIMESTAMP_HEADER)
            .ok_or_else(|| AuthError::MissingHeader(TIMESTAMP_HEADER.to_owned()))?;

        let expected_digest = content_digest(request.body_bytes());
        if !bool::from(
            provided_digest
                .as_bytes()
                .ct_eq(expected_digest.as_bytes()),
        ) {
            debug!(
                expected = %expected_digest,
                provided = %provided_digest,
                "content digest mismatch"
            );
            return Err(AuthError::DigestMismatch);
        }

        let raw_signature = BASE64
            .decode(encoded.trim())
            .map_err(|_| AuthError::InvalidAuthHeader)?;
        let signature =
            Signature::try_from(raw_signature.as_slice()).map_err(|_| AuthError::InvalidAuthHeader)?;

        let signing_input = build_signing_input(&request.method, &request.url, headers);
        self.verifying_key
            .verify(&signing_input, &signature)
            .map_err(|_| AuthError::SignatureDoesNotMatch)?;

        debug!(timestamp = %timestamp, "RSA-SHA256 verification succeeded");

        Ok(Verification {
            timestamp: timestamp.to_owned(),
            signed_headers: signed_headers(headers)
                .map(|(name, _)| name.to_owned())
                .collect(),
        })
    }
}

impl fmt::Debug for RsaSha256Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSha256Verifier").finish_non_exhaustive()
    }
}
