//! Fluent builder for constructing a [`Factory`].

use mf_core::TargetPair;
use mf_instructions::FactoryLayout;

use crate::{Factory, FactoryConfig, OutputPolicy, SimError, SimResult};

/// Fluent builder for [`Factory`].
///
/// # Required inputs
///
/// - [`FactoryLayout`]: from [`mf_instructions::build`] or a loader
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                  |
/// |-----------------------|--------------------------|
/// | `.config(c)`          | `FactoryConfig::default()` |
/// | `.target(pair)`       | no target                |
/// | `.max_passes(n)`      | unlimited                |
/// | `.output_policy(p)`   | `OutputPolicy::Overwrite` |
pub struct FactoryBuilder {
    layout: FactoryLayout,
    config: FactoryConfig,
}

impl FactoryBuilder {
    pub fn new(layout: FactoryLayout) -> Self {
        Self { layout, config: FactoryConfig::default() }
    }

    /// Replace the whole configuration.  Later setter calls still apply.
    pub fn config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn target(mut self, pair: TargetPair) -> Self {
        self.config.target = Some(pair);
        self
    }

    pub fn max_passes(mut self, passes: u64) -> Self {
        self.config.max_passes = Some(passes);
        self
    }

    pub fn output_policy(mut self, policy: OutputPolicy) -> Self {
        self.config.outputs = policy;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Factory`].
    pub fn build(self) -> SimResult<Factory> {
        if self.config.max_passes == Some(0) {
            return Err(SimError::Config("max_passes must be at least 1".into()));
        }
        Ok(Factory::new(self.config, self.layout.bots, self.layout.outputs))
    }
}
