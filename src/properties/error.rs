use snafu::Snafu;

use super::name::NameKind;

/// Possible errors from property mapping operations.
#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
    #[snafu(display("Required property '{}' not present", name))]
    MissingProperty { name: String },

    // Showing the full regex in an error is ugly because of the regex's
    // formatting; see properties::name::{PROPERTY_NAME,IDENTIFIER}
    #[snafu(display(
        "Name '{}' has invalid format for {:?} use, should be 1 or more dot-separated [a-zA-Z0-9_-]+ segments",
        name,
        kind
    ))]
    InvalidName { name: String, kind: NameKind },

    #[snafu(display("Name '{}' beyond maximum length {}", name, max))]
    NameTooLong { name: String, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
