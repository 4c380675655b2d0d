use crate::error::VersionError;

/// A released version, identified by the standard semantic versioning
/// components.
///
/// All fields are unsigned, so non-negativity holds by construction. Releases
/// order by `major`, then `minor`, then `patch`.
///
/// # Examples
///
/// ```
/// use tagver::Release;
///
/// let release = Release::new(1, 2, 3);
/// assert_eq!(release.next_minor(), Release::new(1, 3, 0));
/// assert!(release < release.next_patch());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Release {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Release {
    /// Returns a new release version.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the initial release for a project, `0.0.1`. Callers reading
    /// versions from an external store substitute this when none exists yet.
    pub const fn initial() -> Self {
        Self::new(0, 0, 1)
    }

    /// The major component.
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the next major release, zeroing the minor and patch
    /// components.
    pub const fn next_major(&self) -> Self {
        Self::new(self.major + 1, 0, 0)
    }

    /// Returns the next minor release, zeroing the patch component.
    pub const fn next_minor(&self) -> Self {
        Self::new(self.major, self.minor + 1, 0)
    }

    /// Returns the next patch release.
    pub const fn next_patch(&self) -> Self {
        Self::new(self.major, self.minor, self.patch + 1)
    }
}

/// A version strictly between two releases: `distance` commits past
/// `release`, identified by an abbreviated commit hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    release: Release,
    distance: u64,
    commit: String,
}

impl PreRelease {
    /// Returns a new pre-release version.
    ///
    /// # Errors
    ///
    /// - [`VersionError::ZeroDistance`] if `distance` is zero. A pre-release
    ///   at distance zero *is* its release.
    /// - [`VersionError::ShortCommit`] if `commit` is shorter than the
    ///   7-character git abbreviation.
    pub fn new(
        release: Release,
        distance: u64,
        commit: impl Into<String>,
    ) -> Result<Self, VersionError> {
        let commit = commit.into();
        if distance == 0 {
            return Err(VersionError::ZeroDistance);
        }
        if commit.len() < 7 {
            return Err(VersionError::ShortCommit { commit });
        }
        Ok(Self {
            release,
            distance,
            commit,
        })
    }

    /// The release this version is a preview of.
    pub const fn release(&self) -> &Release {
        &self.release
    }

    /// The number of commits since [`Self::release`].
    pub const fn distance(&self) -> u64 {
        self.distance
    }

    /// The abbreviated hash of the current commit.
    pub fn commit(&self) -> &str {
        &self.commit
    }
}

/// The bounded collection of supported version shapes.
///
/// Values are immutable: they are produced by parsing through a
/// [`Dialect`](crate::Dialect) or by the increment methods on [`Release`],
/// and never mutated in place.
///
/// # Examples
///
/// ```
/// use tagver::{Release, Version};
///
/// let version = Version::pre_release(Release::new(1, 2, 3), 4, "aabbccd").unwrap();
/// assert_eq!(version.release_part(), &Release::new(1, 2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Version {
    /// A released version.
    Release(Release),
    /// A version between releases.
    PreRelease(PreRelease),
    /// A version computed while uncommitted local modifications were
    /// present. Wraps the version that would otherwise have been reported.
    Dirty(Box<Version>),
}

impl Version {
    /// Returns a new release version.
    pub const fn release(major: u64, minor: u64, patch: u64) -> Self {
        Self::Release(Release::new(major, minor, patch))
    }

    /// Returns a new pre-release version. See [`PreRelease::new`] for the
    /// field invariants.
    ///
    /// # Errors
    ///
    /// Propagates [`VersionError`] from [`PreRelease::new`].
    pub fn pre_release(
        release: Release,
        distance: u64,
        commit: impl Into<String>,
    ) -> Result<Self, VersionError> {
        PreRelease::new(release, distance, commit).map(Self::PreRelease)
    }

    /// Wraps a version as dirty.
    pub fn dirty(version: Version) -> Self {
        Self::Dirty(Box::new(version))
    }

    /// Returns the [`Release`] portion of this version, unwrapping
    /// pre-release and dirty layers. Useful for getting a handle on the
    /// previous release given the current version, and then incrementing it.
    pub fn release_part(&self) -> &Release {
        match self {
            Self::Release(release) => release,
            Self::PreRelease(pre_release) => pre_release.release(),
            Self::Dirty(inner) => inner.release_part(),
        }
    }
}

impl From<Release> for Version {
    fn from(release: Release) -> Self {
        Self::Release(release)
    }
}

impl From<PreRelease> for Version {
    fn from(pre_release: PreRelease) -> Self {
        Self::PreRelease(pre_release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_zeroes_lower_components() {
        let args = [
            (Release::new(1, 1, 0), Release::new(1, 1, 0).next_patch(), Release::new(1, 1, 1)),
            (Release::new(1, 0, 1), Release::new(1, 0, 1).next_minor(), Release::new(1, 1, 0)),
            (Release::new(0, 1, 1), Release::new(0, 1, 1).next_major(), Release::new(1, 0, 0)),
        ];

        for (from, next, expected) in args {
            assert_eq!(next, expected, "incrementing {from:?}");
            assert!(from < next);
        }
    }

    #[test]
    fn test_initial() {
        assert_eq!(Release::initial(), Release::new(0, 0, 1));
    }

    #[test]
    fn test_release_ordering() {
        let mut releases = [
            Release::new(1, 0, 0),
            Release::new(0, 0, 1),
            Release::new(0, 1, 0),
        ];
        releases.sort();
        assert_eq!(
            releases,
            [
                Release::new(0, 0, 1),
                Release::new(0, 1, 0),
                Release::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_pre_release_zero_distance() {
        let pre_release = PreRelease::new(Release::new(1, 0, 0), 0, "aaaaaaa");
        assert_eq!(pre_release, Err(VersionError::ZeroDistance));
    }

    #[test]
    fn test_pre_release_short_commit() {
        let pre_release = PreRelease::new(Release::new(1, 0, 0), 1, "aaaa");
        assert_eq!(
            pre_release,
            Err(VersionError::ShortCommit {
                commit: "aaaa".to_owned()
            })
        );
    }

    #[test]
    fn test_release_part() {
        let release = Release::new(1, 2, 3);
        let pre_release = Version::pre_release(release, 4, "aabbccd").unwrap();
        let dirty = Version::dirty(pre_release.clone());

        assert_eq!(Version::from(release).release_part(), &release);
        assert_eq!(pre_release.release_part(), &release);
        assert_eq!(dirty.release_part(), &release);
    }

    #[test]
    fn test_dirty_over_release_part() {
        // dirty can wrap a bare release as a value, even though no dialect
        // produces that textual form
        let dirty = Version::dirty(Version::release(1, 2, 3));
        assert_eq!(dirty.release_part(), &Release::new(1, 2, 3));
    }
}
