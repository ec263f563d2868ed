//! Feature modules. Each module follows the same layout: `model.rs` for
//! domain structs and DTOs, `service.rs` for business logic, and
//! `controller.rs`/`router.rs` for the HTTP surface.

pub mod admin;
pub mod auth;
pub mod parents;
pub mod staff;
pub mod students;
