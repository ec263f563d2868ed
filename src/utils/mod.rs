//! Shared utilities used throughout the application:
//!
//! - [`email`]: SMTP notification sending
//! - [`errors`]: application error type and response mapping
//! - [`ids`]: verification code, student ID and staff ID generators
//! - [`jwt`]: per-role token creation and verification
//! - [`password`]: bcrypt hashing and verification

pub mod email;
pub mod errors;
pub mod ids;
pub mod jwt;
pub mod password;
