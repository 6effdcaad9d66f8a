use crate::error::{EcoindexError, Result};
use serde::{Deserialize, Serialize};

/// Raw metrics observed for a rendered page: DOM node count, transferred
/// size in kilobytes, and number of network requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub nodes: u64,
    pub size: f64,
    pub requests: u64,
}

impl PageMetrics {
    pub fn new(nodes: u64, size: f64, requests: u64) -> Result<Self> {
        let metrics = Self {
            nodes,
            size,
            requests,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Boundary validation. The scoring engine itself never checks ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.size.is_finite() {
            return Err(EcoindexError::InvalidMetrics(format!(
                "size must be finite, got {}",
                self.size
            )));
        }
        if self.size < 0.0 {
            return Err(EcoindexError::InvalidMetrics(format!(
                "size must be non-negative, got {}",
                self.size
            )));
        }
        Ok(())
    }
}
