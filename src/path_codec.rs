//! Conversion between DICOMweb paths and [IdentifierMap].
//!
//! A path looks like `/studies/<uid>/series/<uid>/instances/<uid>/frames/<n>`,
//! truncated after any value.

use crate::error::DicomwebPathError;
use crate::identifiers::{IdentifierKind, IdentifierMap, Level};

const SEPARATOR: char = '/';

/// Check that `path` is a DICOMweb path, returning it without one leading
/// and one trailing `/`.
///
/// The empty string is valid. Otherwise the path must have an even number
/// of at least 2 segments, the second-to-last of which is a level name.
///
/// Only one slash is stripped from each end, so `//a/studies/1` validates to
/// `/a/studies/1`, which itself does not validate.
pub fn validate_path(path: &str) -> Result<&str, DicomwebPathError> {
    if path.is_empty() {
        return Ok(path);
    }
    let trimmed = path.strip_prefix(SEPARATOR).unwrap_or(path);
    let trimmed = trimmed.strip_suffix(SEPARATOR).unwrap_or(trimmed);
    let segments: Vec<&str> = trimmed.split(SEPARATOR).collect();
    let n = segments.len();
    if n < 2 || n % 2 != 0 || segments[n - 2].parse::<Level>().is_err() {
        return Err(DicomwebPathError::InvalidPath(path.to_string()));
    }
    Ok(trimmed)
}

/// Parse the identifiers out of a DICOMweb path.
///
/// Values are taken by position: the level names before them are not
/// compared against the kind expected at that depth.
pub fn identifiers_from_path(path: &str) -> Result<IdentifierMap, DicomwebPathError> {
    let path = validate_path(path)?;
    let ids: IdentifierMap = path
        .split(SEPARATOR)
        .skip(1)
        .step_by(2)
        .zip(IdentifierKind::ALL)
        .map(|(value, kind)| (kind, value))
        .collect();
    tracing::trace!(path, ?ids, "parsed identifiers");
    Ok(ids)
}

/// Produce the DICOMweb path for the given identifiers.
///
/// Every present kind is written in hierarchy order, whether or not its
/// ancestors are present.
pub fn path_from_identifiers(ids: &IdentifierMap) -> String {
    ids.iter()
        .map(|(kind, value)| format!("{SEPARATOR}{}{SEPARATOR}{value}", kind.path_segment()))
        .collect()
}

/// The level of the deepest identifier present.
pub fn level_from_identifiers(ids: &IdentifierMap) -> Level {
    ids.iter()
        .last()
        .map(|(kind, _)| kind.level())
        .unwrap_or(Level::Root)
}
