//! Domain Port Interfaces
//!
//! Interfaces implemented outside the domain layer.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`providers::ClientConnector`] | Builds Weaviate clients from resolved requests |

pub mod providers;
