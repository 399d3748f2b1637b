//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`client_resolution`] | Named-client lookup and the auth/connection fallback chains |
//! | [`construction`] | Resolved connection requests for each construction strategy |
//! | [`client_factory`] | Builds clients by dispatching to a connector |

pub mod client_factory;
pub mod client_resolution;
pub mod construction;

pub use client_factory::ClientFactory;
pub use client_resolution::{
    AuthFactory, ConnectionFactory, configured_client_names, has_client, resolve_client_config,
    resolve_client_settings,
};
pub use construction::{client_options, cloud_request, custom_request, local_request};
