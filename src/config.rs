//! Settings, which are configurable using environment variables prefixed by `DICOMWEB_PATH_`.
use camino::Utf8PathBuf;
use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;

use crate::filesystem::DEFAULT_BASE_DIR;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Settings {
    /// Directory under which DICOM instances are stored.
    #[serde(default = "default_files_root")]
    pub files_root: Utf8PathBuf,
    /// Base URL of the DICOMweb server.
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files_root: default_files_root(),
            host: None,
            verbose: false,
        }
    }
}

fn default_files_root() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_BASE_DIR)
}

fn get_config() -> Figment {
    Figment::new().merge(Env::prefixed("DICOMWEB_PATH_"))
}

impl Settings {
    pub fn from_env() -> Result<Self, figment::Error> {
        get_config().extract()
    }
}
