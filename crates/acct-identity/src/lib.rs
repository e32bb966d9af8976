pub mod error;
pub mod issuer;
pub mod reconciler;

pub use error::{IdentityError, Result};
pub use issuer::{AnonymousIssuer, EnsureOutcome};
pub use reconciler::IdentityReconciler;
