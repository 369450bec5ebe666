use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use tracing::debug;

use gewaesserkarte::viewport::{Region, Span, default_start_region};
use gewaesserkarte::{Coordinate, UiConfig, app_dirs, theme};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    map: MapSection,
    ui: UiSection,
    catalog: CatalogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct MapSection {
    center_latitude: Option<f64>,
    center_longitude: Option<f64>,
    span_delta: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    labels: Option<bool>,
    initial_query: Option<String>,
    prompt_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
    path: Option<PathBuf>,
}

pub struct ResolvedConfig {
    pub catalog_path: Option<PathBuf>,
    pub theme_name: String,
    pub ui: UiConfig,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        match &self.catalog_path {
            Some(path) => println!("  Catalog: {}", path.display()),
            None => println!("  Catalog: (builtin)"),
        }
        let region = self.ui.start_region;
        println!(
            "  Start center: {:.4}, {:.4}",
            region.center.latitude, region.center.longitude
        );
        println!(
            "  Start span: {:.4} x {:.4}",
            region.span.latitude_delta, region.span.longitude_delta
        );
        println!("  Theme: {}", self.theme_name);
        println!("  Labels: {}", bool_to_word(self.ui.show_labels));
        if let Some(title) = &self.ui.prompt_title {
            println!("  Prompt title: {title}");
        }
        if !self.ui.initial_query.is_empty() {
            println!("  Initial query: {}", self.ui.initial_query);
        }
    }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("gewaesserkarte")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".gewaesserkarte.toml"));
        files.push(current_dir.join("gewaesserkarte.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.catalog.clone() {
            self.catalog.path = Some(path);
        }
        if let Some((latitude, longitude)) = cli.center {
            self.map.center_latitude = Some(latitude);
            self.map.center_longitude = Some(longitude);
        }
        if let Some(delta) = cli.span {
            self.map.span_delta = Some(delta);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(labels) = cli.labels {
            self.ui.labels = Some(labels);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.prompt_title = Some(title);
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let start_region = resolve_start_region(&self.map)?;

        let theme_name = self
            .ui
            .theme
            .as_deref()
            .unwrap_or(theme::DEFAULT_THEME)
            .trim()
            .to_ascii_lowercase();
        let theme = theme::by_name(&theme_name)
            .ok_or_else(|| anyhow!("unknown theme '{theme_name}'"))?;

        let ui = UiConfig {
            start_region,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            show_labels: self.ui.labels.unwrap_or(true),
            theme,
            prompt_title: self.ui.prompt_title,
        };

        debug!(
            theme = %theme_name,
            labels = ui.show_labels,
            center_latitude = start_region.center.latitude,
            center_longitude = start_region.center.longitude,
            "configuration resolved"
        );

        Ok(ResolvedConfig {
            catalog_path: self.catalog.path,
            theme_name,
            ui,
        })
    }
}

fn resolve_start_region(map: &MapSection) -> Result<Region> {
    let defaults = default_start_region();

    let center = match (map.center_latitude, map.center_longitude) {
        (None, None) => defaults.center,
        (Some(latitude), Some(longitude)) => {
            let center = Coordinate {
                latitude,
                longitude,
            };
            ensure!(
                center.is_valid(),
                "start center {latitude}, {longitude} is outside the valid coordinate range"
            );
            center
        }
        _ => bail!("start center requires both map.center_latitude and map.center_longitude"),
    };

    let span = match map.span_delta {
        None => defaults.span,
        Some(delta) => {
            ensure!(
                delta.is_finite() && delta > 0.0,
                "span delta must be a positive number, got {delta}"
            );
            Span {
                latitude_delta: delta,
                longitude_delta: delta,
            }
        }
    };

    Ok(Region { center, span })
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write as _;

    fn parse(args: &[&str]) -> CliArgs {
        let mut full = vec!["gewaesserkarte", "--no-config"];
        full.extend_from_slice(args);
        CliArgs::parse_from(full)
    }

    #[test]
    fn defaults_match_the_start_region() {
        let resolved = load(&parse(&[])).unwrap();
        let region = resolved.ui.start_region;
        assert_eq!(region.center.latitude, 53.77);
        assert_eq!(region.center.longitude, 11.15);
        assert_eq!(region.span.latitude_delta, 0.5);
        assert!(resolved.ui.show_labels);
        assert_eq!(resolved.theme_name, "slate");
        assert!(resolved.catalog_path.is_none());
    }

    #[test]
    fn cli_overrides_win_over_defaults() {
        let resolved = load(&parse(&[
            "--center",
            "54.1,12.1",
            "--span",
            "0.25",
            "--labels",
            "no",
            "--query",
            "see",
        ]))
        .unwrap();
        let region = resolved.ui.start_region;
        assert_eq!(region.center.latitude, 54.1);
        assert_eq!(region.span.longitude_delta, 0.25);
        assert!(!resolved.ui.show_labels);
        assert_eq!(resolved.ui.initial_query, "see");
    }

    #[test]
    fn config_file_values_are_merged() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[map]\ncenter_latitude = 53.5\ncenter_longitude = 11.5\nspan_delta = 0.1\n\n[ui]\ntheme = \"baltic\"\nlabels = false"
        )
        .unwrap();

        let path = file.path().display().to_string();
        let resolved = load(&parse(&["--config", &path])).unwrap();
        assert_eq!(resolved.ui.start_region.center.latitude, 53.5);
        assert_eq!(resolved.ui.start_region.span.latitude_delta, 0.1);
        assert_eq!(resolved.theme_name, "baltic");
        assert!(!resolved.ui.show_labels);
    }

    #[test]
    fn half_specified_center_is_rejected() {
        let map = MapSection {
            center_latitude: Some(53.5),
            center_longitude: None,
            span_delta: None,
        };
        assert!(resolve_start_region(&map).is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let result = load(&parse(&["--theme", "neon"]));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_span_is_rejected() {
        let result = load(&parse(&["--span", "-1.0"]));
        assert!(result.is_err());
    }
}
