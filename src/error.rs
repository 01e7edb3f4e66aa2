use crate::identifiers::IdentifierKind;

#[derive(thiserror::Error, Debug)]
pub enum DicomwebPathError {
    #[error("not a valid URL: \"{0}\"")]
    InvalidUrl(String),

    #[error("not a valid DICOMweb path: \"{0}\"")]
    InvalidPath(String),

    #[error(transparent)]
    MissingTag(#[from] MissingRequiredTag),

    #[error("identifiers do not have the required {0} ID")]
    MissingKey(IdentifierKind),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("not a well-formed XML document: {0}")]
    MalformedXml(&'static str),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("DICOM JSON does not have the required tag: \"{0}\"")]
pub struct MissingRequiredTag(pub String);
