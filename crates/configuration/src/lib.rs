use crate::error::ConfigError;
use std::path::{Path, PathBuf};

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, Display};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "service-impact.toml";

/// Widest timeline bar the report will draw.
pub const MAX_TIMELINE_WIDTH: usize = 200;

/// Prefix for environment overrides, e.g. `SERVICE_IMPACT__AFTER__DAYS_MONITORED=46`.
pub const ENV_PREFIX: &str = "SERVICE_IMPACT";

/// Command-line arguments that select the configuration source.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct ConfigArgs {
    /// Path to a TOML file describing the observation periods.
    /// Defaults to `service-impact.toml` in the working directory, if present.
    #[cfg_attr(feature = "clap", arg(long, short))]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<Config, ConfigError> {
        load_config(self.config.as_deref())
    }
}

/// Loads the application configuration.
///
/// An explicit `path` must exist. Without one, `service-impact.toml` is read when
/// present and the baseline periods are used otherwise. Environment variables
/// prefixed with `SERVICE_IMPACT__` override either source. The result is
/// validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_with_environment(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// The built-in configuration as the lowest-priority source, so partial
/// sections fill their remaining fields from the baseline.
fn defaults() -> Result<config::Config, ConfigError> {
    Ok(config::Config::try_from(&Config::default())?)
}

fn load_with_environment(
    path: Option<&Path>,
    env: config::Environment,
) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(defaults()?)
        .add_source(file)
        .add_source(env)
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(
        before = %config.before.label,
        after = %config.after.label,
        "Loaded configuration."
    );
    Ok(config)
}

/// Parses a configuration from TOML text, without consulting the environment.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(defaults()?)
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

/// Rejects periods that could not be analysed and a timeline width outside
/// `1..=MAX_TIMELINE_WIDTH`.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    for (section, period) in [("before", &config.before), ("after", &config.after)] {
        period
            .validate()
            .map_err(|source| ConfigError::InvalidPeriod { section, source })?;
    }

    let width = config.display.timeline_width;
    if !(1..=MAX_TIMELINE_WIDTH).contains(&width) {
        return Err(ConfigError::ValidationError(format!(
            "[display] timeline_width must be between 1 and {MAX_TIMELINE_WIDTH}, got {width}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ObservationPeriod;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_document_falls_back_to_baselines() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.timeline_width, 40);
    }

    #[test]
    fn periods_are_read_from_toml() {
        let config = load_config_from_str(
            r#"
            [before]
            label = "Before"
            distance_km = 1200
            oil_added_liters = 3.1
            days_monitored = 30

            [display]
            timeline_width = 20
            "#,
        )
        .unwrap();

        assert_eq!(
            config.before,
            ObservationPeriod::new("Before", dec!(1200), dec!(3.1), 30)
        );
        assert_eq!(config.after, ObservationPeriod::baseline_post_service());
        assert_eq!(config.display.timeline_width, 20);
    }

    #[test]
    fn zero_oil_is_an_invalid_period() {
        let err = load_config_from_str(
            r#"
            [after]
            label = "After"
            distance_km = 500
            oil_added_liters = 0
            days_monitored = 10
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::InvalidPeriod { section, source } => {
                assert_eq!(section, "after");
                assert_eq!(source.field(), "oil_added_liters");
            }
            other => panic!("expected an invalid period, got {other:?}"),
        }
    }

    #[test]
    fn zero_timeline_width_is_rejected() {
        let err = load_config_from_str("[display]\ntimeline_width = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn oversized_timeline_width_is_rejected() {
        let err = load_config_from_str("[display]\ntimeline_width = 1000000000000000\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(load_config_from_str("[display]\ntimeline_width = 200\n").is_ok());
    }

    #[test]
    fn partial_section_keeps_baseline_fields() {
        let config = load_config_from_str("[after]\ndays_monitored = 46\n").unwrap();
        assert_eq!(
            config.after,
            ObservationPeriod::new("Post-Service (Nov-Dec)", dec!(2013), dec!(2.75), 46)
        );
        assert_eq!(config.before, ObservationPeriod::baseline_pre_service());
    }

    #[test]
    fn environment_overrides_apply_without_a_file() {
        let vars = config::Map::from([
            ("SERVICE_IMPACT__AFTER__DAYS_MONITORED".to_string(), "46".to_string()),
            ("SERVICE_IMPACT__BEFORE__OIL_ADDED_LITERS".to_string(), "2.5".to_string()),
        ]);
        let config = load_with_environment(None, environment().source(Some(vars))).unwrap();

        assert_eq!(config.after.days_monitored, 46);
        assert_eq!(config.after.label, "Post-Service (Nov-Dec)");
        assert_eq!(config.before.oil_added_liters, dec!(2.5));
        assert_eq!(config.before.distance_km, dec!(887));
    }

    #[test]
    fn missing_explicit_file_is_a_load_error() {
        let err = load_config(Some(Path::new("does/not/exist.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn malformed_period_is_a_load_error() {
        let err = load_config_from_str("[before]\ndistance_km = \"far\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
