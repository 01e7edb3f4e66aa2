//! Translation between DICOMweb URL paths (`/studies/<uid>/series/<uid>/...`)
//! and the study, series, instance and frame identifiers they contain.

mod config;
mod dicom_json;
mod error;
mod filesystem;
mod host;
mod identifiers;
mod path_codec;
mod pretty;

pub use config::Settings;
pub use dicom_json::{
    DicomJson, INSTANCE_TAG, SERIES_TAG, STUDY_TAG, get_dicom_tag, ids_from_json, tag_key,
};
pub use error::{DicomwebPathError, MissingRequiredTag};
pub use filesystem::{DEFAULT_BASE_DIR, FilesystemLocation, filesystem_path_from_identifiers};
pub use host::{HostUrl, validate_host_str};
pub use identifiers::{IdentifierKind, IdentifierMap, Level, UnknownLevel};
pub use path_codec::{identifiers_from_path, level_from_identifiers, path_from_identifiers, validate_path};
pub use pretty::{DICOM_XML_CONTENT_TYPE, pretty_format, pretty_xml};
