//! Provider ports

pub mod client_connector;

pub use client_connector::ClientConnector;
