pub mod health;
pub mod twitter;
