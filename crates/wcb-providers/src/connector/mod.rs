//! Client connector implementations
//!
//! Both connectors are registered in `CLIENT_CONNECTORS` and can be
//! selected with a client's `client_connector` key.

pub mod null;
pub mod standard;

pub use null::NullConnector;
pub use standard::StandardConnector;
