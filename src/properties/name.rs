use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use super::{error, Result};

pub const NAME_SEPARATOR: &str = ".";

/// String that can be used in a regex to validate segments of property names.
/// The character set matches what the governance API accepts between dots.
pub const NAME_SEGMENT_STR: &str = "[a-zA-Z0-9_-]+";

/// Maximum name length matches the width of the server's property name
/// column, so anything longer could never round-trip through an update.
const MAX_NAME_LENGTH: usize = 255;

lazy_static! {
    /// Pattern to validate a single name segment, e.g. between separators.
    pub(crate) static ref NAME_SEGMENT: Regex = Regex::new(
        &format!(r"^{segment}$", segment=NAME_SEGMENT_STR)
    ).unwrap();

    /// Pattern to validate a governance property name.
    // Optional dot-separated prefix segments, with at least one final segment.
    pub(crate) static ref PROPERTY_NAME: Regex = Regex::new(
        &format!(r"^(?P<prefix>({segment}\.)*)(?P<final>{segment})$", segment=NAME_SEGMENT_STR)
    ).unwrap();

    /// Pattern to validate an identifier, e.g. a category id.
    // No prefixes, just one name segment, so we reuse the regex.
    pub(crate) static ref IDENTIFIER: Regex = NAME_SEGMENT.clone();
}

/// NameKind represents whether we want to check a PropertyName as a dotted
/// governance property name or as a single-segment identifier.
///
/// Connector ids count as property names: the server uses both plain ids
/// like "self-sign-up" and handler-style dotted ids like
/// "account.lock.handler".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NameKind {
    Property,
    Identifier,
}

/// A PropertyName identifies one governance setting.  Names are dotted
/// strings ("a.b.c") with the dots implying hierarchy, so
/// "SelfRegistration.Enable" and "SelfRegistration.ReCaptcha" are related
/// settings of the same feature.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PropertyName {
    name: String,
}

impl PropertyName {
    pub fn new<S: AsRef<str>>(kind: NameKind, name: S) -> Result<PropertyName> {
        let name = name.as_ref();
        if name.len() > MAX_NAME_LENGTH {
            return error::NameTooLong {
                name,
                max: MAX_NAME_LENGTH,
            }
            .fail();
        }

        let name_pattern = match kind {
            NameKind::Property => &*PROPERTY_NAME,
            NameKind::Identifier => &*IDENTIFIER,
        };

        if !name_pattern.is_match(name) {
            return error::InvalidName { name, kind }.fail();
        }

        let copy = name.to_string();
        Ok(PropertyName { name: copy })
    }
}

// These trait implementations let you treat a PropertyName like a string most
// of the time.

impl Deref for PropertyName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.name
    }
}

impl Borrow<String> for PropertyName {
    fn borrow(&self) -> &String {
        &self.name
    }
}

impl Borrow<str> for PropertyName {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for PropertyName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
