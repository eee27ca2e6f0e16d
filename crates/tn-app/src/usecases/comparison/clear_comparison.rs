use std::sync::Arc;

use tracing::info;

use crate::services::selection::ComparisonStore;

/// Empty the comparison tray in one operation.
pub struct ClearComparison {
    comparison: Arc<ComparisonStore>,
}

impl ClearComparison {
    pub fn new(comparison: Arc<ComparisonStore>) -> Self {
        Self { comparison }
    }

    pub async fn execute(&self) {
        self.comparison.clear().await;
        info!("Cleared comparison tray");
    }
}
