use std::fmt::Write as FmtWrite;
use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rsvpui::{
    DocumentFormat, FormVariant, Kiosk, OutputDestination, OutputOptions, SiteConfig, UiOptions,
    load_site_config, site_config_schema,
};

const LOG_ENV: &str = "RSVPUI_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "rsvpui",
    version,
    about = "Browse the pictures and send your RSVP from the terminal"
)]
struct Cli {
    /// Site config spec: file path, inline payload, or "-" for stdin
    #[arg(short = 'c', long = "config", value_name = "SPEC")]
    config: Option<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// How the Attending/PlusOne answers reveal the plus-one fields
    #[arg(long = "variant", value_enum)]
    variant: Option<VariantArg>,

    /// Open on the RSVP screen instead of the gallery
    #[arg(long = "rsvp")]
    start_on_form: bool,

    /// Key bindings document replacing the bundled keymap
    #[arg(long = "keymap", value_name = "PATH")]
    keymap: Option<PathBuf>,

    /// Hide the key binding hints in the footer
    #[arg(long = "no-help")]
    no_help: bool,

    /// Output destinations for the submitted RSVP ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Write the urlencoded form body instead of a structured document
    #[arg(long = "form-body")]
    form_body: bool,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Append tracing output to this file (filter with RSVPUI_LOG)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the JSON Schema of the site config and exit
    #[arg(long = "print-schema")]
    print_schema: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    TwoLevel,
    SingleLevel,
}

impl From<VariantArg> for FormVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::TwoLevel => FormVariant::TwoLevel,
            VariantArg::SingleLevel => FormVariant::SingleLevel,
        }
    }
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.print_schema {
        let schema = serde_json::to_string_pretty(&site_config_schema())
            .wrap_err("failed to render config schema")?;
        println!("{schema}");
        return Ok(());
    }

    init_tracing(cli.log_file.as_deref())?;

    let mut diagnostics = DiagnosticCollector::default();

    let config = match cli.config.as_deref() {
        Some(spec) => match load_config(spec) {
            Ok(config) => Some(config),
            Err(err) => {
                diagnostics.push_input("config", format!("{err:#}"));
                None
            }
        },
        None => Some(SiteConfig::default()),
    };

    let options = match build_ui_options(&cli) {
        Ok(options) => Some(options),
        Err(err) => {
            diagnostics.push_input("keymap", format!("{err:#}"));
            None
        }
    };

    let (output_settings, output_paths) = build_output_options(&cli, &mut diagnostics);
    ensure_output_paths_available(&output_paths, cli.force, &mut diagnostics);

    diagnostics.into_result()?;

    let (Some(mut config), Some(options)) = (config, options) else {
        return Err(eyre!("no site configuration available"));
    };
    if let Some(variant) = cli.variant {
        config = config.with_variant(variant.into());
    }
    if let Some(title) = cli.title.as_ref() {
        config = config.with_title(title.clone());
    }

    info!(variant = config.rsvp.variant.as_str(), "starting rsvpui");
    let mut kiosk = Kiosk::new(config).with_options(options);
    if let Some(output) = output_settings {
        kiosk = kiosk.with_output(output);
    }

    match kiosk.run().map_err(Report::msg)? {
        Some(submission) => info!(guest = %submission.guest_line(), "rsvp recorded"),
        None => eprintln!("exited without sending an RSVP"),
    }
    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    // the TUI owns stdout/stderr, so logs only go to a file
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn build_ui_options(cli: &Cli) -> Result<UiOptions> {
    let options = UiOptions::default()
        .with_start_on_form(cli.start_on_form)
        .with_help(!cli.no_help);
    let Some(path) = cli.keymap.as_ref() else {
        return Ok(options);
    };
    let raw = read_from_source(&InputSource::File(path.clone()))?;
    options
        .with_keymap_json(&raw)
        .map_err(Report::msg)
        .wrap_err_with(|| format!("invalid keymap {}", path.display()))
}

fn load_config(spec: &str) -> Result<SiteConfig> {
    if spec == "-" {
        let contents = read_from_source(&InputSource::Stdin)?;
        return parse_config(&contents, DocumentFormat::default(), "config");
    }

    let path = PathBuf::from(spec);
    let format = match probe_format_from_extension(&path) {
        ExtensionFormat::Known(format) => format,
        #[cfg(not(all(feature = "yaml", feature = "toml")))]
        ExtensionFormat::UnsupportedFeature {
            format_name,
            feature_flag,
        } => {
            return Err(eyre!(
                "config '{spec}' requires {format_name} support, but this build lacks the '{feature_flag}' feature"
            ));
        }
        ExtensionFormat::Unknown => DocumentFormat::default(),
    };
    match read_from_source(&InputSource::File(path.clone())) {
        Ok(contents) => parse_config(&contents, format, "config"),
        Err(err) => {
            if is_not_found(&err) {
                return parse_config(spec, format, "inline config");
            }
            Err(err.wrap_err(format!("failed to load config from {}", path.display())))
        }
    }
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn is_not_found(err: &Report) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

/// Try the hinted format first, then every other compiled-in format.
fn parse_config(contents: &str, format: DocumentFormat, label: &str) -> Result<SiteConfig> {
    match load_site_config(contents, format) {
        Ok(config) => Ok(config),
        Err(primary) => {
            for candidate in DocumentFormat::available_formats() {
                if candidate == format {
                    continue;
                }
                if let Ok(config) = load_site_config(contents, candidate) {
                    return Ok(config);
                }
            }
            Err(eyre!("failed to parse {label}: {primary:#}"))
        }
    }
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn build_output_options(
    cli: &Cli,
    diagnostics: &mut DiagnosticCollector,
) -> (Option<OutputOptions>, Vec<PathBuf>) {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }

    if destinations.is_empty() {
        return (None, Vec::new());
    }

    let file_paths: Vec<PathBuf> = destinations
        .iter()
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();

    let start = diagnostics.len();
    let format = if cli.form_body {
        DocumentFormat::default()
    } else {
        infer_format_from_files(&file_paths, diagnostics).unwrap_or_default()
    };
    if diagnostics.len() > start {
        return (None, file_paths);
    }

    let options = OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_form_body(cli.form_body)
        .with_destinations(destinations);
    (Some(options), file_paths)
}

fn infer_format_from_files(
    file_paths: &[PathBuf],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in file_paths {
        match probe_format_from_extension(path) {
            ExtensionFormat::Known(format) => match detected {
                Some(existing) if existing != format => diagnostics.push_output(format!(
                    "output file {} uses {format} but other destinations use {existing}; align extensions",
                    path.display()
                )),
                Some(_) => {}
                None => detected = Some(format),
            },
            #[cfg(not(all(feature = "yaml", feature = "toml")))]
            ExtensionFormat::UnsupportedFeature {
                format_name,
                feature_flag,
            } => diagnostics.push_output(format!(
                "output file {} requires {format_name} support, but this build was compiled without the '{feature_flag}' feature",
                path.display()
            )),
            ExtensionFormat::Unknown => diagnostics.push_output(format!(
                "cannot infer format from output file {}; use .json/.yaml/.toml or --form-body",
                path.display()
            )),
        }
    }
    detected
}

#[derive(Debug)]
enum ExtensionFormat {
    Known(DocumentFormat),
    #[cfg(not(all(feature = "yaml", feature = "toml")))]
    UnsupportedFeature {
        format_name: &'static str,
        feature_flag: &'static str,
    },
    Unknown,
}

fn probe_format_from_extension(path: &Path) -> ExtensionFormat {
    let Some(ext) = path.extension() else {
        return ExtensionFormat::Unknown;
    };
    let normalized = ext.to_string_lossy().to_ascii_lowercase();
    match normalized.as_str() {
        "json" => ExtensionFormat::Known(DocumentFormat::Json),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => ExtensionFormat::Known(DocumentFormat::Yaml),
        #[cfg(not(feature = "yaml"))]
        "yaml" | "yml" => ExtensionFormat::UnsupportedFeature {
            format_name: "yaml",
            feature_flag: "yaml",
        },
        #[cfg(feature = "toml")]
        "toml" => ExtensionFormat::Known(DocumentFormat::Toml),
        #[cfg(not(feature = "toml"))]
        "toml" => ExtensionFormat::UnsupportedFeature {
            format_name: "toml",
            feature_flag: "toml",
        },
        _ => ExtensionFormat::Unknown,
    }
}

fn ensure_output_paths_available(
    paths: &[PathBuf],
    force: bool,
    diagnostics: &mut DiagnosticCollector,
) {
    if force {
        return;
    }
    for path in paths {
        if path.exists() {
            diagnostics.push_output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_json_config_is_accepted() {
        let config = load_config(r#"{"title": "Our Day"}"#).unwrap();
        assert_eq!(config.title, "Our Day");
    }

    #[test]
    fn unknown_output_extension_is_reported() {
        let mut diagnostics = DiagnosticCollector::default();
        let format = infer_format_from_files(&[PathBuf::from("rsvp.txt")], &mut diagnostics);
        assert!(format.is_none());
        assert_eq!(diagnostics.len(), 1);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_config_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("rsvpui-{}-site.toml", std::process::id()));
        let raw = r#"
title = "Garden Party"

[gallery]
pictures = ["a.jpg"]

[rsvp]
variant = "single-level"
"#;
        fs::write(&path, raw).unwrap();
        let loaded = load_config(&path.to_string_lossy());
        fs::remove_file(&path).unwrap();
        let config = loaded.unwrap();
        assert_eq!(config.title, "Garden Party");
        assert_eq!(config.gallery.pictures, vec!["a.jpg".to_string()]);
        assert_eq!(config.rsvp.variant, FormVariant::SingleLevel);
    }

    #[test]
    fn missing_keymap_file_is_an_error() {
        let cli = Cli::parse_from(["rsvpui", "--keymap", "/nonexistent/rsvpui.keymap.json"]);
        assert!(build_ui_options(&cli).is_err());
    }

    #[test]
    fn no_help_flag_hides_hints() {
        let cli = Cli::parse_from(["rsvpui", "--no-help", "--rsvp"]);
        let options = build_ui_options(&cli).unwrap();
        assert!(!options.show_help);
        assert!(options.start_on_form);
    }

    #[test]
    fn variant_argument_maps_to_form_variant() {
        assert_eq!(
            FormVariant::from(VariantArg::SingleLevel),
            FormVariant::SingleLevel
        );
    }
}
