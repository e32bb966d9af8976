pub mod models;
pub mod username;

pub use models::account::Account;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
