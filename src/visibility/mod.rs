//! The visibility module restricts connector listings to what a
//! sub-organization administrator may see.
//!
//! The allow-list comes from visibility.toml, compiled into the library and
//! parsed once at first use.  Filtering never widens: the result is always a
//! subset of the server-reported listing, both by connector and by property.
//! Connectors and properties the allow-list doesn't declare are dropped
//! entirely and noted at debug level; whether to surface that to a user is
//! the embedding application's policy.

pub mod error;

pub use error::{Error, Result};

use lazy_static::lazy_static;
use serde::Deserialize;
use snafu::OptionExt;

use crate::model::Connector;
use crate::properties::{NameKind, PropertyName};

/// Raw shape of the embedded visibility.toml document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AllowListDocument {
    #[serde(rename = "category")]
    categories: Vec<CategoryDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryDocument {
    id: String,
    #[serde(rename = "connector")]
    connectors: Vec<ConnectorDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConnectorDocument {
    id: String,
    properties: Vec<String>,
}

/// One category's worth of allow-listed connectors.
#[derive(Debug)]
struct CategoryVisibility {
    id: PropertyName,
    connectors: Vec<ConnectorVisibility>,
}

/// The properties of one connector that remain visible.
#[derive(Debug)]
struct ConnectorVisibility {
    id: PropertyName,
    properties: Vec<PropertyName>,
}

lazy_static! {
    /// The process-wide allow-list table.  visibility.toml is a compile-time
    /// constant, so parse or validation failures here are build defects, not
    /// runtime conditions; first use would panic during development, never
    /// against caller input.
    static ref ALLOW_LIST: Vec<CategoryVisibility> = {
        let document: AllowListDocument = toml::from_str(include_str!("../../visibility.toml"))
            .expect("embedded visibility.toml is not valid TOML");

        document
            .categories
            .into_iter()
            .map(|category| CategoryVisibility {
                id: PropertyName::new(NameKind::Identifier, &category.id)
                    .expect("embedded category id is not a valid identifier"),
                connectors: category
                    .connectors
                    .into_iter()
                    .map(|connector| ConnectorVisibility {
                        id: PropertyName::new(NameKind::Property, &connector.id)
                            .expect("embedded connector id is not a valid name"),
                        properties: connector
                            .properties
                            .iter()
                            .map(|name| {
                                PropertyName::new(NameKind::Property, name)
                                    .expect("embedded property name is not valid")
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    };
}

/// The category ids the allow-list declares, in declaration order.
pub fn category_ids() -> Vec<&'static str> {
    ALLOW_LIST.iter().map(|c| c.id.as_ref()).collect()
}

/// The connector ids the allow-list declares for a category.
pub fn allowed_connectors(category_id: &str) -> Result<Vec<&'static str>> {
    let category = find_category(category_id)?;
    Ok(category.connectors.iter().map(|c| c.id.as_ref()).collect())
}

/// Restrict a server-reported connector listing for one category to the
/// allow-listed subset for sub-organizations.
///
/// Asking about a category the allow-list doesn't declare fails with
/// `Error::UnknownCategory`; an empty result would be indistinguishable from
/// a fully filtered one.  Surviving connectors keep their reported property
/// order, filtered to the declared names.  The input is never mutated.
pub fn filter_for_sub_org(category_id: &str, connectors: &[Connector]) -> Result<Vec<Connector>> {
    let category = find_category(category_id)?;

    let mut result = Vec::new();
    for connector in connectors {
        let entry = match category
            .connectors
            .iter()
            .find(|c| c.id.as_ref() == connector.id)
        {
            Some(entry) => entry,
            None => {
                debug!(
                    "Dropping connector '{}' not visible to sub-organizations",
                    connector.id
                );
                continue;
            }
        };

        let properties: Vec<String> = connector
            .properties
            .iter()
            .filter(|name| {
                let keep = entry.properties.iter().any(|p| p.as_ref() == name.as_str());
                if !keep {
                    debug!(
                        "Dropping property '{}' of connector '{}' not visible to sub-organizations",
                        name, connector.id
                    );
                }
                keep
            })
            .cloned()
            .collect();

        result.push(Connector {
            id: connector.id.clone(),
            name: connector.name.clone(),
            friendly_name: connector.friendly_name.clone(),
            properties,
        });
    }

    Ok(result)
}

fn find_category(category_id: &str) -> Result<&'static CategoryVisibility> {
    ALLOW_LIST
        .iter()
        .find(|c| c.id.as_ref() == category_id)
        .context(error::UnknownCategory { id: category_id })
}
