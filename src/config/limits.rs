//! Resource limits configuration module.
//!
//! Bounds on input line size and on the number of live handles, plus the
//! switch for strict tool-argument checking.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Smallest accepted line limit; anything below cannot hold a request.
const MIN_LINE_BYTES: usize = 64;

/// Resource limits configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsConfig {
    /// Maximum size of one input line in bytes
    pub max_line_bytes: usize,

    /// Maximum number of live handles, 0 for unlimited
    pub max_handles: usize,

    /// Check tool arguments against the declared input schema before calling
    pub strict_arguments: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: 1024 * 1024, // 1 MiB
            max_handles: 0,
            strict_arguments: false,
        }
    }
}

impl Validate for LimitsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_line_bytes < MIN_LINE_BYTES {
            return Err(ConfigError::ValidationError(format!(
                "max_line_bytes must be at least {MIN_LINE_BYTES}"
            )));
        }
        Ok(())
    }
}
