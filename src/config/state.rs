// Application state module
// Immutable process-wide state shared by all request handlers

use super::types::Config;
use crate::sentiment::Scorer;

/// Application state
///
/// Built once at startup and never mutated afterwards, so handlers read it
/// through a plain `Arc` with no locking. The scorer is stateless and safe
/// to invoke from any number of in-flight requests.
pub struct AppState {
    pub config: Config,
    pub scorer: Scorer,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            scorer: Scorer::new(),
        }
    }
}
