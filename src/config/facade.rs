//! Config loading facade: assembles sources in precedence order and validates the result.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::ScorerConfig;
use crate::error::ScoreError;
use config::File;
use std::path::Path;

/// Entry point for loading [`ScorerConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file, the workspace file under `workspace_root`
    /// and environment overrides, in that order.
    pub fn load(workspace_root: &Path) -> Result<ScorerConfig, ScoreError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(merge_policy::environment());
        Self::finish(builder)
    }

    /// Load defaults and a single explicit file (which must exist), then environment overrides.
    pub fn load_from_file(path: &Path) -> Result<ScorerConfig, ScoreError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(
                File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .add_source(merge_policy::environment());
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<ScorerConfig, ScoreError> {
        let config: ScorerConfig = builder.build()?.try_deserialize()?;
        config.scoring.validate().map_err(ScoreError::ConfigError)?;
        Ok(config)
    }
}
