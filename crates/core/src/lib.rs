//! Domain types shared by the chatbot customization service.
//!
//! - [`error`] -- domain error taxonomy.
//! - [`customization`] -- customization payload schema and validation issues.
//! - [`subscription`] -- plan catalog and per-user plan resolution.

pub mod customization;
pub mod error;
pub mod subscription;
pub mod types;
