use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use dicomweb_path::{
    DicomJson, IdentifierKind, IdentifierMap, Settings, filesystem_path_from_identifiers,
    identifiers_from_path, ids_from_json, level_from_identifiers, path_from_identifiers,
    pretty_format, validate_host_str, DICOM_XML_CONTENT_TYPE,
};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the identifiers of a DICOMweb path as JSON
    Ids { path: String },
    /// Print the DICOMweb path of the given identifiers
    Path {
        #[arg(long)]
        study: Option<String>,
        #[arg(long)]
        series: Option<String>,
        #[arg(long)]
        instance: Option<String>,
        #[arg(long)]
        frame: Option<String>,
    },
    /// Print the level of a DICOMweb path
    Level { path: String },
    /// Print where the instance of a DICOMweb path is stored
    Fs {
        path: String,
        /// Storage root, overrides DICOMWEB_PATH_FILES_ROOT
        #[arg(long)]
        base_dir: Option<Utf8PathBuf>,
    },
    /// Validate a DICOMweb server URL, defaults to DICOMWEB_PATH_HOST
    Host { url: Option<String> },
    /// Print the DICOMweb path of the instance described by a DICOM JSON file
    Tags { file: Utf8PathBuf },
    /// Pretty-print a response body
    Pretty {
        file: Utf8PathBuf,
        #[arg(long, default_value = DICOM_XML_CONTENT_TYPE)]
        content_type: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    let level = if cli.verbose || settings.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(level.into())
                    .from_env_lossy(),
            )
            .with_writer(std::io::stderr)
            .finish(),
    )
    .unwrap_or_else(|e| eprintln!("Could not set up global logger: {e}"));

    match cli.command {
        Command::Ids { path } => {
            let ids = identifiers_from_path(&path)?;
            println!("{}", serde_json::to_string(&ids)?);
        }
        Command::Path {
            study,
            series,
            instance,
            frame,
        } => {
            let ids: IdentifierMap = [
                (IdentifierKind::Study, study),
                (IdentifierKind::Series, series),
                (IdentifierKind::Instance, instance),
                (IdentifierKind::Frame, frame),
            ]
            .into_iter()
            .filter_map(|(kind, value)| value.map(|v| (kind, v)))
            .collect();
            if !ids.is_hierarchical() {
                tracing::warn!(?ids, "identifiers are not a prefix of study/series/instance/frame");
            }
            println!("{}", path_from_identifiers(&ids));
        }
        Command::Level { path } => {
            let ids = identifiers_from_path(&path)?;
            println!("{}", level_from_identifiers(&ids));
        }
        Command::Fs { path, base_dir } => {
            let ids = identifiers_from_path(&path)?;
            let base_dir = base_dir.unwrap_or(settings.files_root);
            let location = filesystem_path_from_identifiers(&ids, base_dir.as_str())?;
            println!("{}", location.full_path());
        }
        Command::Host { url } => {
            let url = url
                .or(settings.host)
                .ok_or_else(|| anyhow::anyhow!("no URL given and DICOMWEB_PATH_HOST is not set"))?;
            println!("{}", validate_host_str(&url)?);
        }
        Command::Tags { file } => {
            let content = fs_err::read_to_string(&file)?;
            let dcm: DicomJson = serde_json::from_str(&content)?;
            let ids = ids_from_json(&dcm)?;
            println!("{}", path_from_identifiers(&ids));
        }
        Command::Pretty { file, content_type } => {
            let body = fs_err::read_to_string(&file)?;
            println!("{}", pretty_format(&body, &content_type)?);
        }
    }
    Ok(())
}
