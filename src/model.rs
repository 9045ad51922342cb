//! The model module defines the payloads exchanged with the governance API.
//!
//! The `properties` and `visibility` modules consume and produce these types,
//! so everything crossing the wire is type-checked.

use serde::{Deserialize, Serialize};

///// Governance properties

/// A single governance configuration property as the server reports it: a
/// dotted hierarchical name and a raw string value.  Boolean settings use the
/// literal strings "true"/"false"; numeric settings are also carried as
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigProperty {
    pub name: String,
    pub value: String,
}

/// Operation discriminator for configuration updates.  The governance API
/// currently only supports wholesale UPDATE of the supplied properties.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Update,
}

/// Body of a configuration PATCH.  Produced by
/// `properties::to_update_request`; the server's response is not interpreted
/// beyond success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRequest {
    pub operation: Operation,
    pub properties: Vec<ConfigProperty>,
}

///// Connector listings

// Note: the governance API uses camelCase field names in connector listings,
// so these structs carry rename_all attributes to match.

/// A named, independently toggleable governance feature, with the names of
/// the properties it exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Connector {
    pub id: String,
    pub name: String,
    pub friendly_name: String,
    pub properties: Vec<String>,
}

/// A grouping of connectors shown together in the administration UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ConnectorCategory {
    pub id: String,
    pub name: String,
    pub connectors: Vec<Connector>,
}
