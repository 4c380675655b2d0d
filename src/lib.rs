//! # tagver
//!
//! A library for parsing, formatting, and incrementing git-tag-style semantic
//! versions.
//!
//! Versions are modeled as a closed set of shapes (a [`Release`], a
//! [`PreRelease`] some commits past a release, or either wrapped as
//! [dirty](Version::Dirty)) and converted to and from text through
//! *dialects*: grammar/formatter pairs sharing one regex-driven parsing
//! engine.
//!
//! ## Examples
//!
//! Compute the next release from the last tag `git describe` reported:
//!
//! ```
//! use tagver::prelude::*;
//!
//! let current = GitPorcelain::parse("v1.2.3-4-gaabbccd").unwrap();
//! let next = current.release_part().next_minor();
//! assert_eq!(GitPorcelain::serialize(&next.into()), "v1.3.0");
//! ```
//!
//! Or render a build version in the canonical SemVer-style dialect, which
//! round-trips:
//!
//! ```
//! use tagver::prelude::*;
//!
//! let version = Version::release(1, 3, 0);
//! let text = Canonical::serialize(&version);
//! assert_eq!(text, "1.3.0");
//! assert_eq!(Canonical::parse(&text), Ok(version));
//! ```
//!
//! ## Dialects
//!
//! | Dialect | Release | Pre-release | Dirty suffix |
//! |---|---|---|---|
//! | [`Canonical`] | `1.2.3` | `1.2.3-alpha4+aabbccd` | `.dirty` |
//! | [`GitPorcelain`] | `v1.2.3` | `v1.2.3-4-gaabbccd` (parse only; serialized without the `g` marker) | `.dirty` |
//!
//! Only pre-release text carries a dirty suffix; there is no textual form
//! for a dirty bare release in either dialect.
//!
//! ## Prelude
//!
//! tagver provides a prelude module for convenience. It contains everything
//! needed to interact with the library.
//!
//! Use it with:
//!
//! ```
//! use tagver::prelude::*;
//! ```
#![warn(missing_docs)]

mod dialect;
mod error;
mod parser;
mod version;

pub use crate::dialect::{Canonical, Dialect, GitPorcelain};
pub use crate::error::{ParseError, VersionError};
pub use crate::parser::RegexParser;
pub use crate::version::{PreRelease, Release, Version};

/// A convenience module appropriate for glob imports (`use tagver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Canonical;
    #[doc(no_inline)]
    pub use crate::Dialect;
    #[doc(no_inline)]
    pub use crate::GitPorcelain;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::PreRelease;
    #[doc(no_inline)]
    pub use crate::Release;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
