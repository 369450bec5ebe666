use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        BoolishValueParser, Styles,
        styling::{AnsiColor, Effects},
    },
};

use gewaesserkarte::MapOutcome;
use gewaesserkarte::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("gewaesserkarte {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

/// Parse a `LAT,LON` pair given to `--center`.
fn parse_center(value: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| "expected LAT,LON".to_string())?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    Ok((latitude, longitude))
}

#[derive(Parser, Debug)]
#[command(
    name = "gewaesserkarte",
    version,
    long_version = long_version(),
    about = "Interactive terminal map of the Mecklenburg water-body catalog",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `gewaesserkarte` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "GEWAESSERKARTE_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "Load the water catalog from a JSON file instead of the builtin data"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        value_name = "BOOL",
        help = "Show marker name labels (default: enabled)"
    )]
    pub(crate) labels: Option<bool>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long,
        value_name = "LAT,LON",
        value_parser = parse_center,
        help = "Override the start center (default: 53.77,11.15)"
    )]
    pub(crate) center: Option<(f64, f64)>,
    #[arg(
        long,
        value_name = "DEGREES",
        allow_negative_numbers = true,
        help = "Override the start span delta for both axes (default: 0.5)"
    )]
    pub(crate) span: Option<f64>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the search prompt title (default: Gewässer suchen)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result on quit")]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported on exit.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// Print the exit outcome as plain text: the jumped-to water (tab separated)
/// or, failing that, the final query.
pub(crate) fn print_plain(outcome: &MapOutcome) {
    if let Some(focused) = &outcome.focused {
        println!(
            "{}\t{:.4}\t{:.4}",
            focused.name, focused.latitude, focused.longitude
        );
    } else if !outcome.query.is_empty() {
        println!("{}", outcome.query);
    }
}

/// Print the exit outcome as a JSON object.
pub(crate) fn print_json(outcome: &MapOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}
