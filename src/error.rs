/// Errors from constructing version values with invalid fields.
///
/// These signal caller programming errors, not parse failures. Negative
/// `major`/`minor`/`patch`/`distance` values are unrepresentable (the fields
/// are unsigned), so only the remaining invariants can be violated.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// A pre-release must be at least one commit past its release.
    #[error("distance must be greater than zero for a pre-release")]
    ZeroDistance,

    /// Abbreviated commit hashes are at least 7 characters, per the git
    /// recommendation.
    #[error("commit hash should be at least 7 characters: `{commit}`")]
    ShortCommit {
        /// The offending commit text.
        commit: String,
    },
}

/// Errors from parsing version strings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input matched neither the release nor the pre-release pattern of
    /// the selected dialect.
    #[error("unable to parse version string `{0}` into one of the supported version formats")]
    IllegalVersionString(String),

    /// The input was grammatically valid but described an unconstructible
    /// value, such as a pre-release at distance zero.
    #[error(transparent)]
    InvalidVersion(#[from] VersionError),
}
