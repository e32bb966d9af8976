use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs session tokens. One trusted issuer, symmetric key.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
}

impl SessionIssuer {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    #[track_caller]
    pub fn issue(&self, claims: &SessionClaims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
