pub mod auth_initiation;

pub use auth_initiation::*;
