//! Reading identifiers out of a DICOM JSON object (PS3.18 F.2), e.g. one
//! element of a DICOMweb search response.

use dicom::core::Tag;
use dicom::dictionary_std::tags;
use serde_json::{Map, Value};

use crate::error::MissingRequiredTag;
use crate::identifiers::{IdentifierKind, IdentifierMap};

pub const STUDY_TAG: Tag = tags::STUDY_INSTANCE_UID;
pub const SERIES_TAG: Tag = tags::SERIES_INSTANCE_UID;
pub const INSTANCE_TAG: Tag = tags::SOP_INSTANCE_UID;

/// A DICOM JSON object: attributes keyed by tag, e.g. `"0020000D"`.
pub type DicomJson = Map<String, Value>;

/// The key of a tag in DICOM JSON: eight uppercase hexadecimal digits.
pub fn tag_key(tag: Tag) -> String {
    format!("{:04X}{:04X}", tag.0, tag.1)
}

/// Get the first value of an attribute.
///
/// Only string and number values are supported. A first value of any other
/// type (e.g. a PN object, or `null`) is reported as a missing tag.
pub fn get_dicom_tag(dcm: &DicomJson, tag: Tag) -> Result<String, MissingRequiredTag> {
    let key = tag_key(tag);
    dcm.get(&key)
        .and_then(|attribute| attribute.get("Value"))
        .and_then(|values| values.get(0))
        .and_then(value_to_string)
        .ok_or(MissingRequiredTag(key))
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Get the study, series and instance UIDs of a DICOM JSON object.
pub fn ids_from_json(dcm: &DicomJson) -> Result<IdentifierMap, MissingRequiredTag> {
    Ok(IdentifierMap::from([
        (IdentifierKind::Study, get_dicom_tag(dcm, STUDY_TAG)?),
        (IdentifierKind::Series, get_dicom_tag(dcm, SERIES_TAG)?),
        (IdentifierKind::Instance, get_dicom_tag(dcm, INSTANCE_TAG)?),
    ]))
}
