// src/infrastructure/security/mod.rs
pub mod claims;
pub mod password;
pub mod token;
