//! Connector Constants

/// Name of the default connector
pub const STANDARD_CONNECTOR_NAME: &str = "standard";

/// Name of the null connector
pub const NULL_CONNECTOR_NAME: &str = "null";
