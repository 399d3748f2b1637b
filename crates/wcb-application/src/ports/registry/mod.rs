//! Connector Registry System
//!
//! Compile-time registration of client connectors with the `linkme` crate.
//! Connectors are discovered at runtime and selected by name, either through
//! a client's `client_connector` key or when the container is built.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Connector Registration Flow                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(CLIENT_...)] │
//! │                        static ENTRY: ClientConnectorEntry = ... │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static CLIENT_CONNECTORS: [..] = [..]│
//! │                              ↓                                  │
//! │  3. Resolver queries:  CLIENT_CONNECTORS.iter()                 │
//! │                              ↓                                  │
//! │  4. Config selects:    client_connector = "null" → Null         │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Connector (in wcb-providers)
//!
//! ```ignore
//! use wcb_application::ports::registry::{ClientConnectorEntry, CLIENT_CONNECTORS};
//!
//! #[linkme::distributed_slice(CLIENT_CONNECTORS)]
//! static NULL_CONNECTOR: ClientConnectorEntry = ClientConnectorEntry {
//!     name: "null",
//!     description: "Null connector for testing",
//!     factory: || Arc::new(NullConnector),
//! };
//! ```

pub mod connector;

pub use connector::{
    CLIENT_CONNECTORS, ClientConnectorEntry, list_client_connectors, resolve_client_connector,
};
