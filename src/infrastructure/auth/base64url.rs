//! Unpadded base64url encoding

use base64::{engine::general_purpose::URL_SAFE, Engine};
use thiserror::Error;

/// Input is not valid base64url after re-padding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid base64url input: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Encode bytes with the URL-safe alphabet, stripping trailing padding
pub fn encode(input: impl AsRef<[u8]>) -> String {
    let mut encoded = URL_SAFE.encode(input);
    let unpadded = encoded.trim_end_matches('=').len();
    encoded.truncate(unpadded);
    encoded
}

/// Decode URL-safe base64, restoring the padding `encode` stripped
///
/// Input whose length is already a multiple of four gets no extra padding.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();
    let missing = (4 - input.len() % 4) % 4;

    let mut padded = Vec::with_capacity(input.len() + missing);
    padded.extend_from_slice(input);
    padded.resize(input.len() + missing, b'=');

    Ok(URL_SAFE.decode(padded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore};

    #[test]
    fn test_encode_strips_padding() {
        assert_eq!(encode(b"test"), "dGVzdA");
        assert_eq!(encode(b"test2=="), "dGVzdDI9PQ");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_decode_restores_padding() {
        assert_eq!(decode("dGVzdA").unwrap(), b"test");
        assert_eq!(decode("dGVzdDI9PQ").unwrap(), b"test2==");
        assert_eq!(decode("").unwrap(), b"");
    }

    #[test]
    fn test_decode_aligned_input() {
        assert_eq!(decode("dGVz").unwrap(), b"tes");
        assert_eq!(decode("dGVzdA==").unwrap(), b"test");
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet() {
        let encoded = encode([0xfb, 0xff, 0xbf]);
        assert_eq!(encoded, "-_-_");
        assert_eq!(decode(&encoded).unwrap(), vec![0xfb, 0xff, 0xbf]);
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        assert!(decode("+/+/").is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("a").is_err());
        assert!(decode("ab$d").is_err());
        assert!(decode("not base64!").is_err());
    }

    #[test]
    fn test_round_trip_random_bytes() {
        let mut rng = rand::thread_rng();

        for _ in 0..256 {
            let len = rng.gen_range(0..128);
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);

            let encoded = encode(&bytes);
            assert!(!encoded.contains('='));
            assert_eq!(decode(&encoded).unwrap(), bytes);
        }
    }
}
