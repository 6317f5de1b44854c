//! Signed token construction, parsing and verification
//!
//! A token is `base64url(header) "." base64url(payload) "." base64url(mac)`
//! where `mac` is HMAC-SHA256 over the first two segments joined by a dot.
//! Verification order is structure, header, signature, then expiry, so the
//! expiry status of a forged token is never revealed.

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::base64url;
use crate::domain::token::{
    Claims, Expiry, Header, InvalidReason, TokenError, ALGORITHM, TOKEN_TYPE,
};

type HmacSha256 = Hmac<Sha256>;

/// Header as found on the wire, before `alg`/`typ` are checked
#[derive(Debug, Deserialize)]
struct RawHeader {
    alg: Option<String>,
    typ: Option<String>,
}

/// Issue a token for `uid` expiring at `expiry`
pub fn issue(expiry: impl Into<Expiry>, uid: i64, secret: &[u8]) -> String {
    let header_b64 = base64url::encode(canonical_json(&Header::hs256()));
    let payload_b64 = base64url::encode(canonical_json(&Claims::new(expiry, uid)));

    let signature = sign(secret, &header_b64, &payload_b64);
    let signature_b64 = base64url::encode(signature);

    format!("{}.{}.{}", header_b64, payload_b64, signature_b64)
}

/// Verify a token against the current time
pub fn decode(token: &str, secret: &[u8]) -> Result<(Header, Claims), TokenError> {
    decode_at(token, secret, unix_now())
}

/// Verify a token against `now` (unix seconds)
pub fn decode_at(token: &str, secret: &[u8], now: f64) -> Result<(Header, Claims), TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header_b64, payload_b64, signature_b64] = segments.as_slice() else {
        return Err(InvalidReason::Structure.into());
    };

    let header_json = decode_segment(header_b64)?;
    let payload_json = decode_segment(payload_b64)?;

    let raw_header: RawHeader =
        serde_json::from_slice(&header_json).map_err(|_| InvalidReason::MalformedHeader)?;
    let claims: Claims =
        serde_json::from_slice(&payload_json).map_err(|_| InvalidReason::MalformedPayload)?;

    let header = validate_header(raw_header)?;

    let signature = decode_segment(signature_b64)?;
    verify(secret, header_b64, payload_b64, &signature)?;

    if claims.is_expired_at(now) {
        return Err(TokenError::Expired);
    }

    Ok((header, claims))
}

/// Absolute expiry `seconds` from now
pub fn expiry_from_now(seconds: u64) -> Expiry {
    Expiry::Fractional(unix_now() + seconds as f64)
}

/// Current unix time with microsecond precision
pub fn unix_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Segments are issued unpadded, so a padded one never verifies
fn decode_segment(segment: &str) -> Result<Vec<u8>, InvalidReason> {
    if segment.contains('=') {
        return Err(InvalidReason::Encoding);
    }

    base64url::decode(segment).map_err(|_| InvalidReason::Encoding)
}

fn validate_header(raw: RawHeader) -> Result<Header, InvalidReason> {
    let (Some(alg), Some(typ)) = (raw.alg, raw.typ) else {
        return Err(InvalidReason::MissingHeaderField);
    };

    if alg != ALGORITHM {
        return Err(InvalidReason::UnsupportedAlgorithm);
    }

    if typ != TOKEN_TYPE {
        return Err(InvalidReason::UnsupportedType);
    }

    Ok(Header { alg, typ })
}

fn mac(secret: &[u8], header_b64: &str, payload_b64: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts keys of any length");
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(payload_b64.as_bytes());
    mac
}

fn sign(secret: &[u8], header_b64: &str, payload_b64: &str) -> Vec<u8> {
    mac(secret, header_b64, payload_b64)
        .finalize()
        .into_bytes()
        .to_vec()
}

/// Constant-time signature check
fn verify(
    secret: &[u8],
    header_b64: &str,
    payload_b64: &str,
    signature: &[u8],
) -> Result<(), InvalidReason> {
    mac(secret, header_b64, payload_b64)
        .verify_slice(signature)
        .map_err(|_| InvalidReason::SignatureMismatch)
}

fn canonical_json<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("token records always serialize to JSON")
}
