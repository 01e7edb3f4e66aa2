use camino::Utf8PathBuf;

use crate::error::DicomwebPathError;
use crate::identifiers::{IdentifierKind, IdentifierMap};

/// Default directory under which DICOM instances are stored.
pub const DEFAULT_BASE_DIR: &str = "./";

/// Where a DICOM instance is stored: `<base>/<study>/<series>/<instance>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemLocation {
    /// Series directory, always ending in `/`.
    pub dir: Utf8PathBuf,
    /// Instance file name.
    pub filename: String,
}

impl FilesystemLocation {
    pub fn full_path(&self) -> Utf8PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Compute the storage location of the instance identified by `ids`.
///
/// Study, series and instance IDs are required. Nothing is read from or
/// written to the filesystem.
pub fn filesystem_path_from_identifiers(
    ids: &IdentifierMap,
    base_dir: &str,
) -> Result<FilesystemLocation, DicomwebPathError> {
    let study = required(ids, IdentifierKind::Study)?;
    let series = required(ids, IdentifierKind::Series)?;
    let filename = required(ids, IdentifierKind::Instance)?.to_string();
    let sep = if base_dir.ends_with('/') { "" } else { "/" };
    let dir = Utf8PathBuf::from(format!("{base_dir}{sep}{study}/{series}/"));
    tracing::trace!(%dir, %filename, "filesystem location");
    Ok(FilesystemLocation { dir, filename })
}

fn required(ids: &IdentifierMap, kind: IdentifierKind) -> Result<&str, DicomwebPathError> {
    ids.get(kind).ok_or(DicomwebPathError::MissingKey(kind))
}
