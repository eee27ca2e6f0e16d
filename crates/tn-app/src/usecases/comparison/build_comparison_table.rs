use std::sync::Arc;

use crate::models::ComparisonTable;
use crate::services::selection::ComparisonStore;

/// Project the current tray into the side-by-side table read model.
pub struct BuildComparisonTable {
    comparison: Arc<ComparisonStore>,
}

impl BuildComparisonTable {
    pub fn new(comparison: Arc<ComparisonStore>) -> Self {
        Self { comparison }
    }

    pub async fn execute(&self) -> ComparisonTable {
        let entries = self.comparison.entries().await;
        ComparisonTable::build(&entries)
    }
}
