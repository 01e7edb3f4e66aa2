use aliri_braid::braid;

use crate::error::DicomwebPathError;

/// Base URL of a DICOMweb server, always ending in `/`.
#[braid(serde)]
pub struct HostUrl;

/// Check that `hostname` is a URL with a host, appending a trailing `/` if needed.
///
/// `hostname` must already be in the form the URL parser would write it,
/// apart from the trailing `/`: surrounding whitespace, embedded tabs or
/// newlines, and `http:host` without `//` are rejected.
pub fn validate_host_str(hostname: &str) -> Result<HostUrl, DicomwebPathError> {
    let invalid = || DicomwebPathError::InvalidUrl(hostname.to_string());
    let url = url::Url::parse(hostname).map_err(|_| invalid())?;
    let serialized = url.as_str();
    let canonical = serialized == hostname
        || serialized.strip_suffix('/').is_some_and(|s| s == hostname);
    if !url.has_host() || !canonical {
        return Err(invalid());
    }
    let host = if hostname.ends_with('/') {
        hostname.to_string()
    } else {
        format!("{hostname}/")
    };
    Ok(HostUrl::from(host))
}
