//! Latest stable tag selection

use crate::domain::StableVersion;

/// Select the highest stable release among a set of registry tags
///
/// Tags that are not exactly `vMAJOR.MINOR.PATCH` are ignored. Returns
/// None when no tag qualifies.
pub fn latest_stable<I, S>(tags: I) -> Option<StableVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| StableVersion::parse_tag(tag.as_ref()))
        .max()
}
