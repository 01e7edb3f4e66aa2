use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use crate::error::DicomwebPathError;

pub const DICOM_XML_CONTENT_TYPE: &str = "application/dicom+xml";

const INDENT_SIZE: usize = 4;

/// Indent a response body if its content type is DICOM XML, otherwise
/// return it as-is.
pub fn pretty_format(body: &str, content_type: &str) -> Result<String, DicomwebPathError> {
    if content_type.eq_ignore_ascii_case(DICOM_XML_CONTENT_TYPE) {
        pretty_xml(body)
    } else {
        Ok(body.to_string())
    }
}

/// Re-indent an XML document, one element per line.
///
/// The document must have exactly one root element, no text outside of it
/// and no unclosed elements.
pub fn pretty_xml(xml: &str) -> Result<String, DicomwebPathError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Eof => break,
            Event::Start(_) | Event::Empty(_) if depth == 0 => {
                roots += 1;
                if roots > 1 {
                    return Err(DicomwebPathError::MalformedXml("more than one root element"));
                }
            }
            Event::Text(_) | Event::CData(_) if depth == 0 => {
                return Err(DicomwebPathError::MalformedXml("text outside of the root element"));
            }
            _ => {}
        }
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        writer.write_event(event)?;
    }
    if depth != 0 {
        return Err(DicomwebPathError::MalformedXml("unclosed element"));
    }
    if roots == 0 {
        return Err(DicomwebPathError::MalformedXml("no root element"));
    }
    let pretty = String::from_utf8(writer.into_inner())?;
    tracing::debug!(before = xml.len(), after = pretty.len(), "pretty-printed XML");
    Ok(pretty)
}
