//! Single-shot prefix lookup.

use crate::key::TargetKey;
use crate::record::{Payload, INITIAL_BUFFER_SIZE};
use crate::search::{verify_sorted, SearchMethod, Strategy};
use crate::source::{resolve, ContentSource, Input};
use crate::{Error, Result};

/// Lookup configuration.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Search strategy; `Auto` follows the input's capability
    pub strategy: Strategy,
    /// Check record ordering before a binary search
    pub verify_sorted: bool,
    /// Initial stream buffer size in bytes
    pub initial_buffer_capacity: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            verify_sorted: false,
            initial_buffer_capacity: INITIAL_BUFFER_SIZE,
        }
    }
}

impl LookupConfig {
    /// Concrete search method for `source`.
    pub fn strategy_for(&self, source: &dyn ContentSource) -> SearchMethod {
        self.strategy.resolve(source.default_strategy())
    }
}

/// Look up the location stored for `key` in `input`.
///
/// The key is validated before the input is touched.
pub fn find_location(key: &str, input: &Input, config: &LookupConfig) -> Result<Payload> {
    let key = TargetKey::parse(key)?;
    let source = resolve(input, config)?;
    locate(source.as_ref(), &key, config)
}

/// Search already loaded content for `key`.
pub fn locate(source: &dyn ContentSource, key: &TargetKey, config: &LookupConfig) -> Result<Payload> {
    let method = config.strategy_for(source);
    let content = source.as_bytes();

    if method == SearchMethod::Binary && config.verify_sorted {
        verify_sorted(content)?;
    }

    log::debug!(
        "{} search for prefix {} over {} records",
        method,
        key.prefix(),
        source.record_count()
    );

    method
        .locate(content, &key.prefix())
        .ok_or(Error::NotFound)
}
