use crate::error::{FlagErrorExt, Result};
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Prefix of environment variables read by [`load_config_with_env`].
pub const ENV_PREFIX: &str = "APPSEARCH";
/// Separator between the prefix and nested keys in environment variables.
pub const ENV_SEPARATOR: &str = "__";

/// Loads `T` from an optional file.
///
/// Anything absent from the file, or everything when `path` is `None`, is left to `T`'s
/// serde defaults. The process environment is never read here; see [`load_config_with_env`].
///
/// # Errors
/// This function will return an error if:
/// * The given configuration file cannot be found or parsed.
/// * The content does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use appsearch_kernel::config::load_config;
/// use appsearch_kernel::domain::config::FlagConfig;
///
/// let cfg: FlagConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg, FlagConfig::default());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    build(path, None)
}

/// Like [`load_config`], with `APPSEARCH__*` environment overrides layered over the file.
///
/// Nested keys use double underscores (e.g., `APPSEARCH__ENABLE_SAFE_PARCELABLE=false`).
/// Values are parsed, so `true`/`false` arrive as booleans. Keys naming no field are ignored.
/// `env` replaces the process environment when given.
///
/// # Errors
/// Same as [`load_config`], plus values that do not match their field type.
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T>
where
    T: DeserializeOwned,
{
    build(path, Some(environment(env)))
}

fn environment(source: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .convert_case(config::Case::Snake)
        .try_parsing(true)
        .source(source)
}

fn build<T>(path: Option<impl AsRef<Path>>, env: Option<Environment>) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = &path {
        let path = path.as_ref();
        info!("Loading flag config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    if let Some(env) = env {
        info!("Applying {ENV_PREFIX}{ENV_SEPARATOR}* environment overrides");
        builder = builder.add_source(env);
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
