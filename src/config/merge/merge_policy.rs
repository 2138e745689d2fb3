//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Prefix for environment overrides, e.g. `READMESCORE_SCORING__VCS_DIR`.
pub const ENV_PREFIX: &str = "READMESCORE";

/// Create a Config builder with merge policy defaults applied.
///
/// List-valued settings fall back to their serde defaults, so only scalars are seeded here.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scoring.vcs_dir", ".git")?
        .set_default("scoring.sort_subdirectories", true)?
        .set_default("logging.level", "info")
}

/// Keys whose environment values are comma-separated lists.
pub const LIST_KEYS: &[&str] = &[
    "scoring.readme_names",
    "scoring.exclude_files",
    "scoring.exclude_extensions",
];

/// Environment variables override every file source.
///
/// List keys split on `,`, e.g. `READMESCORE_SCORING__EXCLUDE_FILES=LICENSE,NOTICE`;
/// every other key is parsed as a scalar.
pub fn environment() -> config::Environment {
    LIST_KEYS.iter().fold(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}
