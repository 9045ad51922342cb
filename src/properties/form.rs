//! The goal of this module is to be able to turn the flat property list the
//! server reports for a governance connector into the shape a settings form
//! edits, and to turn the edited form back into an update payload, key by
//! key.  A form declares up front which property names it uses, so the
//! update payload always covers the same names in the same order no matter
//! which subset the user touched.

use snafu::OptionExt;
use std::collections::{HashMap, HashSet};

use super::name::{NameKind, PropertyName};
use super::{error, Result, FALSE_LITERAL, TRUE_LITERAL};
use crate::model::{ConfigProperty, Operation, UpdateRequest};

/// A FormSchema declares the properties one settings form edits: the names
/// rendered as checkboxes and the names rendered as scalar fields, each in a
/// fixed declaration order.  Update payloads follow that order, checkboxes
/// first, so payloads are stable and easy to diff.
#[derive(Debug, Clone)]
pub struct FormSchema {
    connector_id: PropertyName,
    checkboxes: Vec<PropertyName>,
    scalars: Vec<PropertyName>,
}

impl FormSchema {
    /// Validates the given names and builds a schema from them.  Checkbox and
    /// scalar names keep the order they were given in.
    pub fn new(connector_id: &str, checkboxes: &[&str], scalars: &[&str]) -> Result<FormSchema> {
        let connector_id = PropertyName::new(NameKind::Property, connector_id)?;

        let checkboxes = checkboxes
            .iter()
            .map(|name| PropertyName::new(NameKind::Property, name))
            .collect::<Result<Vec<_>>>()?;
        let scalars = scalars
            .iter()
            .map(|name| PropertyName::new(NameKind::Property, name))
            .collect::<Result<Vec<_>>>()?;

        Ok(FormSchema {
            connector_id,
            checkboxes,
            scalars,
        })
    }

    /// The connector this form configures.
    pub fn connector_id(&self) -> &str {
        &self.connector_id
    }

    /// Names rendered as checkboxes, in declaration order.
    pub fn checkboxes(&self) -> &[PropertyName] {
        &self.checkboxes
    }

    /// Names rendered as scalar fields, in declaration order.
    pub fn scalars(&self) -> &[PropertyName] {
        &self.scalars
    }
}

/// A ViewModel is the request-scoped shape a settings form edits: the set of
/// selected checkbox names plus the scalar field values.  It's built from a
/// server response on load and discarded on navigation; it is never
/// persisted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewModel {
    /// Names of the checkboxes that are currently selected.
    pub checkbox_values: HashSet<String>,
    /// Scalar field values, keyed by property name, carried verbatim.
    pub scalar_values: HashMap<String, String>,
}

impl ViewModel {
    pub fn is_checked<S: AsRef<str>>(&self, name: S) -> bool {
        self.checkbox_values.contains(name.as_ref())
    }

    pub fn set_checked<S: AsRef<str>>(&mut self, name: S, checked: bool) {
        if checked {
            self.checkbox_values.insert(name.as_ref().to_string());
        } else {
            self.checkbox_values.remove(name.as_ref());
        }
    }

    pub fn scalar<S: AsRef<str>>(&self, name: S) -> Option<&str> {
        self.scalar_values.get(name.as_ref()).map(String::as_str)
    }

    pub fn set_scalar<S1, S2>(&mut self, name: S1, value: S2)
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        self.scalar_values
            .insert(name.as_ref().to_string(), value.as_ref().to_string());
    }
}

/// Build a ViewModel for the given form from a server-reported property
/// sequence.
///
/// A declared checkbox is selected iff a property with that name exists and
/// its value is exactly the "true" literal; an absent checkbox property is
/// simply unselected.  A declared scalar must be present in the input -- the
/// server always reports every scalar a connector owns, so a missing one
/// means the response can't populate the form, and we fail with
/// `Error::MissingProperty` naming it.
pub fn to_view_model(schema: &FormSchema, properties: &[ConfigProperty]) -> Result<ViewModel> {
    let mut view = ViewModel::default();

    for name in schema.checkboxes() {
        // Names are treated as unique; we take the first match.
        let selected = properties
            .iter()
            .find(|p| p.name == name.as_ref())
            .map_or(false, |p| p.value == TRUE_LITERAL);
        trace!("Checkbox '{}' selected: {}", name, selected);
        if selected {
            view.checkbox_values.insert(name.to_string());
        }
    }

    for name in schema.scalars() {
        let property = properties
            .iter()
            .find(|p| p.name == name.as_ref())
            .context(error::MissingProperty {
                name: name.as_ref(),
            })?;
        trace!("Scalar '{}' = '{}'", name, property.value);
        view.scalar_values
            .insert(name.to_string(), property.value.clone());
    }

    Ok(view)
}

/// Build the update payload for the given form from an edited ViewModel.
///
/// Emits exactly one property per declared name, in declaration order with
/// checkboxes first: checkboxes as "true"/"false" depending on selection,
/// scalars verbatim with no range validation.  A ViewModel missing a
/// declared scalar fails with `Error::MissingProperty` -- a successful
/// return always covers the full declaration.
pub fn to_update_request(schema: &FormSchema, view: &ViewModel) -> Result<UpdateRequest> {
    let mut properties = Vec::with_capacity(schema.checkboxes().len() + schema.scalars().len());

    for name in schema.checkboxes() {
        let value = if view.is_checked(name) {
            TRUE_LITERAL
        } else {
            FALSE_LITERAL
        };
        properties.push(ConfigProperty {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    for name in schema.scalars() {
        let value = view.scalar(name).context(error::MissingProperty {
            name: name.as_ref(),
        })?;
        properties.push(ConfigProperty {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    trace!(
        "Built update request for '{}' with {} properties",
        schema.connector_id(),
        properties.len()
    );
    Ok(UpdateRequest {
        operation: Operation::Update,
        properties,
    })
}

#[cfg(test)]
mod test {
    use super::super::Error;
    use super::{to_update_request, to_view_model, FormSchema, ViewModel};
    use crate::model::{ConfigProperty, Operation};
    use maplit::{hashmap, hashset};

    fn prop(name: &str, value: &str) -> ConfigProperty {
        ConfigProperty {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn schema() -> FormSchema {
        FormSchema::new(
            "demo-connector",
            &["Demo.Enable", "Demo.ReCaptcha"],
            &["Demo.ExpiryTime", "Demo.CallbackRegex"],
        )
        .unwrap()
    }

    #[test]
    fn schema_rejects_bad_names() {
        FormSchema::new("demo connector", &[], &[]).unwrap_err();
        FormSchema::new("demo", &["Demo..Enable"], &[]).unwrap_err();
        FormSchema::new("demo", &[], &["Demo.Expiry!"]).unwrap_err();
    }

    #[test]
    fn view_model_from_properties() {
        let properties = vec![
            prop("Demo.Enable", "true"),
            prop("Demo.ReCaptcha", "false"),
            prop("Demo.ExpiryTime", "1440"),
            prop("Demo.CallbackRegex", ".*"),
        ];
        let view = to_view_model(&schema(), &properties).unwrap();
        assert_eq!(view.checkbox_values, hashset!("Demo.Enable".to_string()));
        assert_eq!(
            view.scalar_values,
            hashmap!(
                "Demo.ExpiryTime".to_string() => "1440".to_string(),
                "Demo.CallbackRegex".to_string() => ".*".to_string(),
            )
        );
    }

    #[test]
    fn absent_checkbox_is_unselected() {
        let properties = vec![prop("Demo.ExpiryTime", "1"), prop("Demo.CallbackRegex", ".*")];
        let view = to_view_model(&schema(), &properties).unwrap();
        assert!(!view.is_checked("Demo.Enable"));
        assert!(!view.is_checked("Demo.ReCaptcha"));
    }

    #[test]
    fn only_the_true_literal_selects() {
        for value in &["TRUE", "True", "1", "yes", ""] {
            let properties = vec![
                prop("Demo.Enable", value),
                prop("Demo.ExpiryTime", "1"),
                prop("Demo.CallbackRegex", ".*"),
            ];
            let view = to_view_model(&schema(), &properties).unwrap();
            assert!(!view.is_checked("Demo.Enable"), "'{}' selected", value);
        }
    }

    #[test]
    fn undeclared_properties_are_ignored() {
        let properties = vec![
            prop("Demo.Enable", "true"),
            prop("Other.Enable", "true"),
            prop("Demo.ExpiryTime", "1"),
            prop("Demo.CallbackRegex", ".*"),
        ];
        let view = to_view_model(&schema(), &properties).unwrap();
        assert!(!view.is_checked("Other.Enable"));
        assert_eq!(view.scalar("Other.Enable"), None);
    }

    #[test]
    fn missing_scalar_names_the_property() {
        let properties = vec![prop("Demo.Enable", "true"), prop("Demo.ExpiryTime", "1")];
        match to_view_model(&schema(), &properties) {
            Err(Error::MissingProperty { name }) => assert_eq!(name, "Demo.CallbackRegex"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn update_request_covers_every_declared_name() {
        let mut view = ViewModel::default();
        view.set_scalar("Demo.ExpiryTime", "90");
        view.set_scalar("Demo.CallbackRegex", "https://.*");

        // No checkboxes selected at all; the payload still carries them.
        let request = to_update_request(&schema(), &view).unwrap();
        assert_eq!(request.operation, Operation::Update);
        assert_eq!(
            request.properties,
            vec![
                prop("Demo.Enable", "false"),
                prop("Demo.ReCaptcha", "false"),
                prop("Demo.ExpiryTime", "90"),
                prop("Demo.CallbackRegex", "https://.*"),
            ]
        );
    }

    #[test]
    fn update_request_order_is_input_independent() {
        // Same form state built in two different edit orders.
        let mut first = ViewModel::default();
        first.set_scalar("Demo.CallbackRegex", ".*");
        first.set_scalar("Demo.ExpiryTime", "5");
        first.set_checked("Demo.ReCaptcha", true);

        let mut second = ViewModel::default();
        second.set_checked("Demo.ReCaptcha", true);
        second.set_scalar("Demo.ExpiryTime", "5");
        second.set_scalar("Demo.CallbackRegex", ".*");

        let a = to_update_request(&schema(), &first).unwrap();
        let b = to_update_request(&schema(), &second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn update_request_missing_scalar_fails() {
        let view = ViewModel::default();
        match to_update_request(&schema(), &view) {
            Err(Error::MissingProperty { name }) => assert_eq!(name, "Demo.ExpiryTime"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn round_trip_preserves_flags_and_scalars() {
        let properties = vec![
            prop("Demo.Enable", "true"),
            prop("Demo.ReCaptcha", "false"),
            prop("Demo.ExpiryTime", "1440"),
            prop("Demo.CallbackRegex", ".*"),
        ];
        let view = to_view_model(&schema(), &properties).unwrap();
        let request = to_update_request(&schema(), &view).unwrap();
        assert_eq!(request.properties, properties);
    }
}
