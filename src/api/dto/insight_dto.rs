//! Insight and leaderboard DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::TrackerError;

/// The only leaderboard metric currently supported.
pub const METRIC_TOTAL_MINUTES: &str = "total_minutes";

/// Query parameters for `GET /users/{id}/leaderboard`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct LeaderboardParams {
    /// Ranking metric; defaults to `total_minutes`.
    #[serde(default = "default_metric")]
    pub metric: String,
}

fn default_metric() -> String {
    METRIC_TOTAL_MINUTES.to_string()
}

impl LeaderboardParams {
    /// Rejects any metric other than the supported one.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnsupportedMetric`] for unknown metrics.
    pub fn ensure_supported(&self) -> Result<(), TrackerError> {
        if self.metric == METRIC_TOTAL_MINUTES {
            Ok(())
        } else {
            Err(TrackerError::UnsupportedMetric(self.metric.clone()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_metric_is_supported() {
        let params = LeaderboardParams {
            metric: default_metric(),
        };
        assert!(params.ensure_supported().is_ok());
    }

    #[test]
    fn unknown_metric_is_rejected() {
        let params = LeaderboardParams {
            metric: "max_weight".to_string(),
        };
        let Err(err) = params.ensure_supported() else {
            panic!("unknown metric must fail");
        };
        assert!(matches!(err, TrackerError::UnsupportedMetric(_)));
    }
}
