//! Workspace config file source: `.readme-scorer.toml` at the scanned root

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// File name looked up in the root of the scanned tree.
pub const WORKSPACE_CONFIG_FILE: &str = ".readme-scorer.toml";

/// Add the workspace config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(builder);
    }
    debug!(config_path = %config_path.display(), "Loading workspace configuration");
    Ok(builder.add_source(
        File::from(config_path)
            .format(config::FileFormat::Toml)
            .required(false),
    ))
}
