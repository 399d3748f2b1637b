//! Dependency Injection - dill Catalog
//!
//! ```text
//! linkme (compile-time)     dill Catalog (runtime)
//! ─────────────────────     ─────────────────────
//! CLIENT_CONNECTORS    →    default connector / client_connector key
//!                                  ↓
//!                           CatalogBuilder::add_value(ClientFactory)
//!                                  ↓
//!                           ClientServiceFactory::create("weaviate.client.rag")
//! ```
//!
//! Service names follow `weaviate.client.{name}`; `weaviate.client` and
//! `WeaviateClient` alias the default client.

pub mod catalog;
pub mod client_service;
pub mod services;

pub use catalog::build_catalog;
pub use client_service::ClientServiceFactory;
pub use services::{
    ConfigProvider, ServiceRegistrations, client_name_for_service, client_service_name,
    resolve_alias,
};
