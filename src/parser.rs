use crate::error::ParseError;
use crate::version::{PreRelease, Release, Version};
use regex::{Captures, Regex};

/// Suffix a dialect appends to (and accepts after) pre-release text when the
/// working tree had uncommitted modifications.
pub(crate) const DIRTY_SUFFIX: &str = ".dirty";

/// Version string parser over two patterns: one matching release text and one
/// matching pre-release text.
///
/// Both patterns must be fully anchored (`^…$`). A release pattern that
/// merely prefix-matched could accidentally claim the leading components of a
/// pre-release string, so the release attempt always runs first against the
/// whole input.
///
/// Required named capture groups: `major`, `minor`, and `patch` in both
/// patterns, plus `distance` and `commit` in the pre-release pattern. The
/// numeric groups must only admit base-10 text without leading zeros, so that
/// no post-parse validation is needed.
#[derive(Debug)]
pub struct RegexParser {
    release: Regex,
    pre_release: Regex,
}

impl RegexParser {
    /// Returns a new parser over the given patterns.
    pub fn new(release: Regex, pre_release: Regex) -> Self {
        Self {
            release,
            pre_release,
        }
    }

    /// Parses `input` into a [`Version`].
    ///
    /// The release pattern is tried first, then the pre-release pattern. A
    /// pre-release match ending in `.dirty` is wrapped in
    /// [`Version::Dirty`].
    ///
    /// # Errors
    ///
    /// - [`ParseError::IllegalVersionString`] if neither pattern matches the
    ///   whole input, or a numeric group overflows.
    /// - [`ParseError::InvalidVersion`] if the matched text describes an
    ///   unconstructible value, such as a pre-release at distance zero.
    pub fn parse(&self, input: &str) -> Result<Version, ParseError> {
        if let Some(caps) = self.release.captures(input) {
            return Ok(Version::Release(Self::release_from(&caps, input)?));
        }

        if let Some(caps) = self.pre_release.captures(input) {
            let release = Self::release_from(&caps, input)?;
            let distance = Self::group_u64(&caps, "distance", input)?;
            let pre_release = PreRelease::new(release, distance, &caps["commit"])?;

            return Ok(if input.ends_with(DIRTY_SUFFIX) {
                Version::dirty(Version::PreRelease(pre_release))
            } else {
                Version::PreRelease(pre_release)
            });
        }

        Err(ParseError::IllegalVersionString(input.to_owned()))
    }

    fn release_from(caps: &Captures, input: &str) -> Result<Release, ParseError> {
        Ok(Release::new(
            Self::group_u64(caps, "major", input)?,
            Self::group_u64(caps, "minor", input)?,
            Self::group_u64(caps, "patch", input)?,
        ))
    }

    fn group_u64(caps: &Captures, name: &str, input: &str) -> Result<u64, ParseError> {
        // the grammar only admits digits here, so the only failure is overflow
        caps[name]
            .parse()
            .map_err(|_| ParseError::IllegalVersionString(input.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersionError;

    fn parser() -> RegexParser {
        RegexParser::new(
            Regex::new(r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)$")
                .unwrap(),
            Regex::new(
                r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)\+(?P<distance>0|[1-9]\d*)\.(?P<commit>[0-9a-z]{7,})(\.dirty)?$",
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_release_tried_before_pre_release() {
        let version = parser().parse("1.2.3").unwrap();
        assert_eq!(version, Version::release(1, 2, 3));
    }

    #[test]
    fn test_pre_release_with_dirty_suffix() {
        let version = parser().parse("1.2.3+4.aabbccd.dirty").unwrap();
        assert_eq!(
            version,
            Version::dirty(Version::pre_release(crate::Release::new(1, 2, 3), 4, "aabbccd").unwrap())
        );
    }

    #[test]
    fn test_neither_pattern_matches() {
        let result = parser().parse("not-a-version");
        assert_eq!(
            result,
            Err(ParseError::IllegalVersionString("not-a-version".to_owned()))
        );
    }

    #[test]
    fn test_zero_distance_propagates_construction_error() {
        let result = parser().parse("1.2.3+0.aabbccd");
        assert_eq!(
            result,
            Err(ParseError::InvalidVersion(VersionError::ZeroDistance))
        );
    }

    #[test]
    fn test_numeric_overflow_is_illegal() {
        // one past u64::MAX
        let result = parser().parse("18446744073709551616.0.0");
        assert!(matches!(result, Err(ParseError::IllegalVersionString(_))));
    }
}
