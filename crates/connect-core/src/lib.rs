pub mod env_keys;
pub mod error;
pub mod observability;
pub mod types;
