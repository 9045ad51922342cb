use snafu::Snafu;

/// Possible errors from visibility filtering.
#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
    #[snafu(display("No sub-organization visibility entry for category '{}'", id))]
    UnknownCategory { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
