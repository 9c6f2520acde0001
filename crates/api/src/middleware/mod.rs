//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::OptionalAuthUser`] -- Like `AuthUser` but yields `None` instead of 401.
//! - [`auth::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
