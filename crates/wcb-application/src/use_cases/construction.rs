//! Construction strategies
//!
//! Each function turns validated [`ClientSettings`] into the request handed
//! to a connector. Host, port and URL values are derived here.

use wcb_domain::constants::DEFAULT_LOCAL_HOST;
use wcb_domain::error::{Error, Result};
use wcb_domain::value_objects::resolution::host_with_port;
use wcb_domain::value_objects::{
    AuthSettings, ClientOptions, ClientSettings, CloudConnection, ConnectionMethod, Credentials,
    CustomConnection, LocalConnection,
};

/// Transport options shared by all strategies
pub fn client_options(settings: &ClientSettings) -> ClientOptions {
    let connection = settings.connection();
    ClientOptions {
        timeout: connection.timeout(),
        retry: settings.retry(),
        transport_headers: connection.headers().clone(),
    }
}

fn credentials(auth: Option<&AuthSettings>) -> Result<Option<Credentials>> {
    auth.map(Credentials::from_auth).transpose()
}

/// Request for a local instance
///
/// The host defaults to `localhost` and is paired with the effective port:
/// a numeric port embedded in the host wins, otherwise the `port` field is
/// used. The port is left implicit only when it is the scheme's own (80 for
/// `http`, 443 for `https`).
pub fn local_request(settings: &ClientSettings) -> Result<LocalConnection> {
    let connection = settings.connection();
    let host = connection
        .host_only()
        .filter(|host| !host.trim().is_empty())
        .unwrap_or(DEFAULT_LOCAL_HOST);
    let secure = connection.secure();

    Ok(LocalConnection {
        host: host_with_port(host, connection.effective_port(), secure),
        secure,
        credentials: credentials(settings.auth())?,
        options: client_options(settings),
    })
}

/// Request for a hosted cluster
///
/// Cluster URL and credential are checked again here, with the same errors
/// settings validation raises.
pub fn cloud_request(settings: &ClientSettings) -> Result<CloudConnection> {
    let context = ConnectionMethod::Cloud.context();
    let connection = settings.connection();

    let cluster_url = connection
        .cluster_url()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| Error::missing("cluster_url", context))?;
    let auth = settings
        .auth()
        .ok_or_else(|| Error::missing("auth", context))?;

    Ok(CloudConnection {
        cluster_url: cluster_url.to_string(),
        url: connection.url()?,
        credentials: Credentials::from_auth(auth)?,
        options: client_options(settings),
    })
}

/// Request for an arbitrary host
///
/// Passes the host without its embedded port and the effective port, along
/// with `additional_headers`.
pub fn custom_request(settings: &ClientSettings) -> Result<CustomConnection> {
    let connection = settings.connection();
    let host = connection
        .host_only()
        .filter(|host| !host.trim().is_empty())
        .ok_or_else(|| Error::missing("host", ConnectionMethod::Custom.context()))?;

    Ok(CustomConnection {
        host: host.to_string(),
        port: connection.effective_port(),
        secure: connection.secure(),
        credentials: credentials(settings.auth())?,
        headers: settings.additional_headers().clone(),
        options: client_options(settings),
    })
}
