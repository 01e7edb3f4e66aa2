use camino::Utf8PathBuf;
use dicomweb_path::{
    DicomJson, DicomwebPathError, IdentifierKind, Level, filesystem_path_from_identifiers,
    identifiers_from_path, ids_from_json, level_from_identifiers, path_from_identifiers,
    validate_host_str, validate_path,
};
use pretty_assertions::assert_eq;
use rstest::*;

const STUDY: &str = "1.2.840.113845.11.1000000001785349915.20130308061609.6346698";
const SERIES: &str = "1.3.12.2.1107.5.2.19.45152.2013030808061520200285270.0.0.0";
const INSTANCE: &str = "1.2.840.113845.11.1000000001785349915.20130308061609.6346700";

#[fixture]
fn instance_json() -> DicomJson {
    let path = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("instance.json");
    let content = fs_err::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[rstest]
fn test_dicom_json_to_url_and_storage(instance_json: DicomJson) {
    let ids = ids_from_json(&instance_json).unwrap();
    assert_eq!(level_from_identifiers(&ids), Level::Instances);

    let host = validate_host_str("http://localhost:8042/dicom-web").unwrap();
    let path = path_from_identifiers(&ids);
    let url = format!("{}{}", host, validate_path(&path).unwrap());
    assert_eq!(
        url,
        format!("http://localhost:8042/dicom-web/studies/{STUDY}/series/{SERIES}/instances/{INSTANCE}")
    );

    let location = filesystem_path_from_identifiers(&identifiers_from_path(&path).unwrap(), "/data").unwrap();
    assert_eq!(location.dir.as_str(), format!("/data/{STUDY}/{SERIES}/"));
    assert_eq!(location.filename, INSTANCE);
}

#[rstest]
fn test_frame_path(instance_json: DicomJson) {
    let mut ids = ids_from_json(&instance_json).unwrap();
    ids.insert(IdentifierKind::Frame, "1");
    let path = path_from_identifiers(&ids);
    assert!(path.ends_with(&format!("/instances/{INSTANCE}/frames/1")));
    assert_eq!(level_from_identifiers(&identifiers_from_path(&path).unwrap()), Level::Frames);
}

#[test]
fn test_series_path_has_no_storage_location() {
    let ids = identifiers_from_path(&format!("/studies/{STUDY}/series/{SERIES}")).unwrap();
    assert!(matches!(
        filesystem_path_from_identifiers(&ids, "./"),
        Err(DicomwebPathError::MissingKey(IdentifierKind::Instance))
    ));
}
