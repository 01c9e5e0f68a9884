//! Request extractors shared by handlers.
//!
//! - [`auth::Session`] -- the (optional) acting user, read from a Bearer token.

pub mod auth;
