pub mod anonymous;
pub mod callback;
pub mod cookie;
pub mod error;
pub mod session;
