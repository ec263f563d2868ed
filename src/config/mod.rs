//! Configuration modules for the Registra API.
//!
//! Each submodule owns one configuration concern, loaded from environment
//! variables into an immutable struct at startup. The loaded snapshots live
//! in [`crate::state::AppState`] for the lifetime of the process.
//!
//! # Modules
//!
//! - [`admins`]: the admin allow-list (`email:bcrypt-hash` pairs)
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`email`]: Email/SMTP configuration for sending notifications
//! - [`jwt`]: JWT signing secret and per-role token lifetimes
//! - [`rate_limit`]: API rate limiting configuration

pub mod admins;
pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
pub mod rate_limit;
