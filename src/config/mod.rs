//! The configuration document describing a node package.
//!
//! A [`NodeConfig`] is created once with defaults, edited through
//! [`ConfigEdit`]s and read by the generators in [`crate::codegen`].

pub mod auth;
pub mod document;
pub mod edit;
pub mod model;
pub mod validation;

pub use auth::*;
pub use edit::*;
pub use model::*;
pub use validation::*;
