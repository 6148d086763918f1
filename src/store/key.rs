//! String form of a [`ZonePair`], `"<src>-<dest>"`, used at the
//! persistence boundary only.

use crate::route::ZonePair;

pub fn encode(pair: &ZonePair) -> String {
    format!("{}-{}", pair.src, pair.dest)
}

/// Parses `"<src>-<dest>"`. Either zone id may itself be negative,
/// so every separator position is tried from the left.
pub fn decode(key: &str) -> Option<ZonePair> {
    key.match_indices('-')
        .filter(|(at, _)| *at > 0)
        .find_map(|(at, _)| {
            let src = key[..at].trim().parse().ok()?;
            let dest = key[at + 1..].trim().parse().ok()?;
            Some(ZonePair::new(src, dest))
        })
}
