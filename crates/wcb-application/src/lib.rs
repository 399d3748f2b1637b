//! Application Layer - Weaviate Client Bridge
//!
//! Turns a `weaviate` configuration block into Weaviate clients.
//!
//! ## Architecture
//!
//! The application layer:
//! - Resolves a named client to its configuration (registry or legacy block)
//! - Applies the auth and connection fallback chains
//! - Dispatches to the local, cloud or custom construction strategy
//! - Declares the connector registry that providers submit to
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `wcb-domain`: settings value objects, errors and the connector port
//! - `linkme` for compile-time connector registration

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
