//! CLI configuration
use anyhow::Context;
use std::path::{Path, PathBuf};
use userdir_client::ClientConfig;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "userdir.toml";

/// Prefix of the environment variables that override file values
/// (`USERDIR_API_URL`, `USERDIR_TIMEOUT_MS`, ...)
pub const ENV_PREFIX: &str = "USERDIR";

/// Load configuration from file and environment.
///
/// Precedence, lowest first: built-in defaults, the config file, `USERDIR_*`
/// environment variables. An explicit `path` must exist; the default file is
/// optional.
pub fn load(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    load_with_env(path, None)
}

/// Same as [`load`], reading variables from `env` instead of the process
/// environment when given.
pub fn load_with_env(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<ClientConfig> {
    let mut settings = config::Config::builder();

    match path {
        Some(path) => {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                settings = settings.add_source(config::File::from(default_path));
            }
        }
    }

    settings = settings.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env),
    );

    let config = settings
        .build()
        .context("Failed to read configuration")?;

    config
        .try_deserialize()
        .context("Invalid configuration")
}
