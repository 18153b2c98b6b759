//! API token formatting, parsing and digesting.
//!
//! Tokens look like `vt_<token uuid, simple form>.<64 hex chars of secret>`.
//! Only a SHA-256 digest of the secret, bound to the token and its profile, is
//! ever stored.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::profiles::records::ProfileUuid;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "vt";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

const API_TOKEN_SECRET_HEX_CHARS: usize = API_TOKEN_SECRET_BYTES * 2;

#[derive(Clone)]
pub struct ApiTokenSecret {
    bytes: [u8; API_TOKEN_SECRET_BYTES],
}

impl ApiTokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; API_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; API_TOKEN_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Clone)]
pub struct ParsedApiToken {
    pub token_uuid: Uuid,
    pub secret: ApiTokenSecret,
}

#[derive(Debug, Error)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[must_use]
pub fn generate_api_token_secret() -> ApiTokenSecret {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    ApiTokenSecret::from_bytes(secret)
}

#[must_use]
pub fn format_api_token(token_uuid: Uuid, secret: &ApiTokenSecret) -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}.{}",
        token_uuid.simple(),
        hex::encode(secret.as_bytes())
    )
}

pub fn parse_api_token(token: &str) -> Result<ParsedApiToken, ApiTokenError> {
    let (prefix_and_id, secret_hex) = token.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

    let (prefix, token_uuid_segment) = prefix_and_id
        .split_once('_')
        .ok_or(ApiTokenError::InvalidFormat)?;

    if prefix != API_TOKEN_PREFIX {
        return Err(ApiTokenError::InvalidFormat);
    }

    let token_uuid =
        Uuid::try_parse(token_uuid_segment).map_err(|_ignored| ApiTokenError::InvalidFormat)?;

    let secret = decode_secret_hex(secret_hex).ok_or(ApiTokenError::InvalidSecretEncoding)?;

    Ok(ParsedApiToken {
        token_uuid,
        secret: ApiTokenSecret::from_bytes(secret),
    })
}

/// Hex SHA-256 digest of `{token_uuid}:{profile_uuid}:{secret_hex}`.
#[must_use]
pub fn token_digest(token_uuid: &Uuid, profile_uuid: &ProfileUuid, secret: &ApiTokenSecret) -> String {
    let mut secret_hex = hex::encode(secret.as_bytes());

    let mut hasher = Sha256::new();
    hasher.update(token_uuid.simple().to_string());
    hasher.update(b":");
    hasher.update(profile_uuid.into_uuid().simple().to_string());
    hasher.update(b":");
    hasher.update(secret_hex.as_bytes());

    secret_hex.zeroize();

    hex::encode(hasher.finalize())
}

/// Compare two digests in constant time.
#[must_use]
pub fn digests_match(expected: &str, actual: &str) -> bool {
    expected.as_bytes().ct_eq(actual.as_bytes()).into()
}

fn decode_secret_hex(secret_hex: &str) -> Option<[u8; API_TOKEN_SECRET_BYTES]> {
    if secret_hex.len() != API_TOKEN_SECRET_HEX_CHARS {
        return None;
    }

    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    hex::decode_to_slice(secret_hex, &mut secret).ok()?;

    Some(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        let token_uuid = Uuid::nil();
        let secret = ApiTokenSecret::from_bytes([0xAB; API_TOKEN_SECRET_BYTES]);
        let token = format_api_token(token_uuid, &secret);
        let parsed = parse_api_token(&token).expect("token should parse");

        assert!(token.starts_with("vt_00000000000000000000000000000000."));
        assert_eq!(parsed.token_uuid, token_uuid);
        assert_eq!(parsed.secret.as_bytes(), secret.as_bytes());
    }

    #[test]
    fn parse_rejects_invalid_prefix() {
        assert!(parse_api_token("nope_00000000000000000000000000000000.aa").is_err());
    }

    #[test]
    fn parse_rejects_short_secret() {
        assert!(matches!(
            parse_api_token("vt_00000000000000000000000000000000.abcd"),
            Err(ApiTokenError::InvalidSecretEncoding)
        ));
    }

    #[test]
    fn parse_rejects_non_hex_secret() {
        let token = format!("vt_{}.{}", Uuid::nil().simple(), "zz".repeat(32));

        assert!(matches!(
            parse_api_token(&token),
            Err(ApiTokenError::InvalidSecretEncoding)
        ));
    }

    #[test]
    fn token_digest_is_deterministic_and_profile_bound() {
        let token_uuid = Uuid::nil();
        let secret = ApiTokenSecret::from_bytes([0xCD; API_TOKEN_SECRET_BYTES]);
        let owner = ProfileUuid::from_uuid(Uuid::nil());
        let other = ProfileUuid::from_uuid(Uuid::from_u128(1));

        let first = token_digest(&token_uuid, &owner, &secret);
        let second = token_digest(&token_uuid, &owner, &secret);

        assert_eq!(first.len(), 64);
        assert!(digests_match(&first, &second));
        assert!(!digests_match(&first, &token_digest(&token_uuid, &other, &secret)));
    }

    #[test]
    fn token_digest_hashes_token_profile_and_secret_hex() {
        let secret = ApiTokenSecret::from_bytes([0x01; API_TOKEN_SECRET_BYTES]);
        let owner = ProfileUuid::from_uuid(Uuid::from_u128(2));
        let input = format!(
            "{}:{}:{}",
            Uuid::nil().simple(),
            Uuid::from_u128(2).simple(),
            "01".repeat(API_TOKEN_SECRET_BYTES)
        );

        assert_eq!(
            token_digest(&Uuid::nil(), &owner, &secret),
            hex::encode(Sha256::digest(input.as_bytes()))
        );
    }

    #[test]
    fn digests_of_different_length_do_not_match() {
        assert!(!digests_match("abcd", "abc"));
        assert!(!digests_match("", "a"));
        assert!(digests_match("", ""));
    }

    #[test]
    fn secret_is_encoded_as_lowercase_hex_and_accepts_uppercase() {
        let secret = ApiTokenSecret::from_bytes([0xAB; API_TOKEN_SECRET_BYTES]);
        let token = format_api_token(Uuid::nil(), &secret);

        assert!(token.ends_with(&"ab".repeat(API_TOKEN_SECRET_BYTES)));

        let upper = format!("vt_{}.{}", Uuid::nil().simple(), "AB".repeat(API_TOKEN_SECRET_BYTES));
        let parsed = parse_api_token(&upper).expect("uppercase secret should parse");

        assert_eq!(parsed.secret.as_bytes(), secret.as_bytes());
    }
}
