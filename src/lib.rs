/*!
# Background

This library provides the data-shaping core used to administer identity
governance features -- self-registration, account recovery, and login-attempt
security -- on an identity server.

It is intended to sit between a management UI and the server's governance API.
The UI fetches flat lists of `{name, value}` configuration properties and
nested connector/category listings from the server; this library turns those
into form view-models and visibility-filtered listings, and turns edited
view-models back into update payloads.  All transport belongs to the embedding
application; this library only shapes data.

# Design

## Model

Wire payloads exchanged with the governance API are defined in Rust in the
`model` module, so all input is deserialized into known types and all output
is serialized from them.

## Property mapping

Governance settings arrive as a flat sequence of properties with dotted names
like `SelfRegistration.VerificationCode.ExpiryTime`.  The `properties` module
declares which names each settings form uses (as checkboxes or scalar fields),
builds a `ViewModel` from a property sequence, and builds the corresponding
`UPDATE` request from an edited `ViewModel`.  Update payloads always contain
exactly one entry per declared name, in declaration order, so payloads are
stable across runs and easy to diff.

## Visibility filtering

Sub-organization administrators only see an allow-listed subset of connectors
and properties.  The allow-list is compiled in from `visibility.toml` and
parsed once, at first use, into an immutable table.  The `visibility` module
filters a server-reported connector listing down to that subset.

## Translation

Connector property labels and hints are looked up from an external translation
catalog under deterministic camel-cased keys, falling back to the
server-reported display name when no entry exists.  The `translation` module
owns key construction and the provider trait; loading catalog resources is the
embedding application's concern.

# Current limitations

* The allow-list is compiled in; there is no runtime extension point.
* Scalar property values are passed through as strings, with no numeric range
  validation.
* Only one restricted scope (sub-organization) is modeled.
*/

#[macro_use]
extern crate log;

pub mod model;
pub mod properties;
pub mod translation;
pub mod visibility;
