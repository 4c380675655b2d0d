use crate::error::ParseError;
use crate::parser::{RegexParser, DIRTY_SUFFIX};
use crate::version::Version;
use regex::Regex;
use std::sync::LazyLock;

/// A textual grammar and formatter pair for [`Version`]s.
///
/// Each dialect owns two precompiled patterns (through a [`RegexParser`]
/// built once and reused) and a pure serializer. Serialization is kept off
/// [`Version`] itself so that the in-memory representation stays decoupled
/// from how any particular consumer spells a version.
///
/// There is no fallback across dialects: a string meant for one dialect is
/// never implicitly retried against the other.
pub trait Dialect {
    /// The parser for this dialect's grammar. Compiled on first use and
    /// shared by all callers; patterns are read-only afterwards, so this is
    /// safe to use concurrently.
    fn parser() -> &'static RegexParser;

    /// Renders `version` in this dialect.
    fn serialize(version: &Version) -> String;

    /// Parses `input` against this dialect's grammar.
    ///
    /// # Errors
    ///
    /// See [`RegexParser::parse`].
    fn parse(input: &str) -> Result<Version, ParseError> {
        Self::parser().parse(input)
    }
}

static CANONICAL_PARSER: LazyLock<RegexParser> = LazyLock::new(|| {
    RegexParser::new(
        Regex::new(r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)$")
            .expect("canonical release pattern compiles"),
        Regex::new(
            r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)-alpha(?P<distance>0|[1-9]\d*)\+(?P<commit>[0-9a-z]{7,})(\.dirty)?$",
        )
        .expect("canonical pre-release pattern compiles"),
    )
});

/// The SemVer-style dialect, e.g. `1.2.3` or `1.2.3-alpha4+aabbccd`.
///
/// Intended for version fields consumed by build tooling. This dialect
/// round-trips: for every constructible version `v`,
/// `Canonical::parse(&Canonical::serialize(&v))` returns `v`.
///
/// ```
/// use tagver::{Canonical, Dialect, Version};
///
/// let version = Canonical::parse("1.2.3-alpha4+aabbccd").unwrap();
/// assert_eq!(Canonical::serialize(&version), "1.2.3-alpha4+aabbccd");
/// ```
pub struct Canonical;

impl Dialect for Canonical {
    fn parser() -> &'static RegexParser {
        &CANONICAL_PARSER
    }

    fn serialize(version: &Version) -> String {
        match version {
            Version::Release(release) => format!(
                "{}.{}.{}",
                release.major(),
                release.minor(),
                release.patch()
            ),
            Version::PreRelease(pre_release) => format!(
                "{}-alpha{}+{}",
                Self::serialize(&Version::Release(*pre_release.release())),
                pre_release.distance(),
                pre_release.commit()
            ),
            Version::Dirty(inner) => format!("{}{}", Self::serialize(inner), DIRTY_SUFFIX),
        }
    }
}

static GIT_PORCELAIN_PARSER: LazyLock<RegexParser> = LazyLock::new(|| {
    RegexParser::new(
        Regex::new(r"^v(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)$")
            .expect("git porcelain release pattern compiles"),
        Regex::new(
            r"^v(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)-(?P<distance>0|[1-9]\d*)-g(?P<commit>[0-9a-z]{7,})(\.dirty)?$",
        )
        .expect("git porcelain pre-release pattern compiles"),
    )
});

/// The dialect of the `git describe` porcelain output, e.g. `v1.2.3` or
/// `v1.2.3-4-gaabbccd`.
///
/// This is primarily a parse target for externally produced tag text, not a
/// round-trip format: `git describe` prefixes the abbreviated commit with a
/// literal `g` marker, which parsing strips and serialization does not
/// re-add. `serialize(parse(s))` therefore differs from `s` for pre-release
/// strings.
pub struct GitPorcelain;

impl Dialect for GitPorcelain {
    fn parser() -> &'static RegexParser {
        &GIT_PORCELAIN_PARSER
    }

    fn serialize(version: &Version) -> String {
        match version {
            Version::Release(release) => format!(
                "v{}.{}.{}",
                release.major(),
                release.minor(),
                release.patch()
            ),
            Version::PreRelease(pre_release) => format!(
                "{}-{}-{}",
                Self::serialize(&Version::Release(*pre_release.release())),
                pre_release.distance(),
                pre_release.commit()
            ),
            Version::Dirty(inner) => format!("{}{}", Self::serialize(inner), DIRTY_SUFFIX),
        }
    }
}
