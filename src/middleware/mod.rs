//! Middleware modules for request processing.
//!
//! This module contains the extractors and layers that handle
//! authentication and authorization before handlers run.
//!
//! # Modules
//!
//! - [`auth`]: bearer-token extraction and claims validation
//! - [`role`]: role gates and per-role extractors
//!
//! # Request flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the JWT and decodes claims
//! 3. A role gate or typed extractor checks the role (403 on mismatch)
//! 4. The handler runs with the fields its role guarantees
//!
//! ```ignore
//! use crate::middleware::role::{AdminUser, StudentUser};
//!
//! // Admin route with access to the acting admin's email
//! async fn clock_in(admin: AdminUser) -> impl IntoResponse {
//!     // admin.email is the identity the gate accepted
//! }
//!
//! // Student route; the claims carry the student's own ids
//! async fn update_password(StudentUser(claims): StudentUser) -> impl IntoResponse {
//!     // claims.sub / claims.student_id
//! }
//! ```

pub mod auth;
pub mod role;
