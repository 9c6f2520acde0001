//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod category;
pub mod event;
pub mod history;
pub mod location;
pub mod participation;
pub mod photo;
pub mod session;
pub mod tag;
pub mod user;
