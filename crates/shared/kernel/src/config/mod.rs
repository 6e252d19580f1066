use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file stem, resolved against the working directory.
pub const DEFAULT_CONFIG: &str = "slugeq";
/// Prefix of environment overrides (e.g. `SLUGEQ__STORE__DATA_DIR`).
pub const ENV_PREFIX: &str = "SLUGEQ";

/// Custom error type for config loading.
#[slugeq_derive::slugeq_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `slugeq.toml`). An explicit path must
///    exist; the implicit default ([`DEFAULT_CONFIG`]) is optional so a bare environment works.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `SLUGEQ__`.
///    Nested structures are accessed using double underscores (e.g., `SLUGEQ__STORE__DATA_DIR`
///    maps to `store.data_dir`). Handle lists are comma separated.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly specified configuration file cannot be found.
/// * The content of the file or environment does not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use slugeq_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("settings.enabled_category_groups")
                .with_list_parse_key("settings.enabled_sections")
                .with_list_parse_key("settings.enabled_product_types")
                .try_parsing(true),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
