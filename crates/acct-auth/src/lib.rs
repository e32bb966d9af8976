pub mod claims;
pub mod error;
pub mod external_identity;
pub mod session_issuer;
pub mod session_validator;

pub use claims::SessionClaims;
pub use error::{AuthError, Result};
pub use external_identity::ExternalIdentity;
pub use session_issuer::SessionIssuer;
pub use session_validator::SessionValidator;

#[cfg(test)]
mod tests;
