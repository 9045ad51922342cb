//! The properties module maps between the flat property lists returned by the
//! governance API and the view-models that settings forms edit.
//!
//! Each settings form declares, in a fixed order, which property names it
//! treats as checkboxes and which as scalar fields; see the `schema` module
//! for the shipped declarations.  Mapping is bidirectional: `to_view_model`
//! shapes a server response for display, and `to_update_request` produces the
//! PATCH payload for an edited form.

pub mod error;
pub mod form;
pub mod name;
pub mod schema;

pub use error::{Error, Result};
pub use form::{to_update_request, to_view_model, FormSchema, ViewModel};
pub use name::{NameKind, PropertyName, NAME_SEPARATOR};

/// Literal the governance API uses for an enabled boolean property.  Casing
/// matters: "TRUE" or "1" do not mark a checkbox as selected.
pub const TRUE_LITERAL: &str = "true";

/// Literal the governance API uses for a disabled boolean property.
pub const FALSE_LITERAL: &str = "false";
