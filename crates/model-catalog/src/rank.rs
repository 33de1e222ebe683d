//! Rank catalog entries by combined price.

use std::fmt;
use std::path::Path;

use flat_store::JsonDocument;

use crate::error::CatalogError;
use crate::types::{ModelEntry, ModelList};

/// A model and its prompt + completion price.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedModel {
    pub id: String,
    /// `f64::INFINITY` when the pricing could not be parsed.
    pub total_price: f64,
}

impl RankedModel {
    pub fn from_entry(entry: &ModelEntry) -> Self {
        Self {
            id: entry.display_id().to_string(),
            total_price: entry.total_price().unwrap_or(f64::INFINITY),
        }
    }

    pub fn has_price(&self) -> bool {
        self.total_price.is_finite()
    }
}

impl fmt::Display for RankedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_price() {
            write!(f, "model id = {}, total price = {}", self.id, self.total_price)
        } else {
            write!(f, "model id = {}, total price = N/A", self.id)
        }
    }
}

/// Cheapest first. The sort is stable, so ties keep catalog order and
/// unpriced entries land after every priced one.
pub fn rank_models(models: &[ModelEntry]) -> Vec<RankedModel> {
    let mut ranked: Vec<RankedModel> = models.iter().map(RankedModel::from_entry).collect();
    ranked.sort_by(|a, b| a.total_price.total_cmp(&b.total_price));
    ranked
}

/// Load `{"models": [...]}` from `input` and return the `limit` cheapest.
pub fn rank(input: &Path, limit: usize) -> Result<Vec<RankedModel>, CatalogError> {
    let list: ModelList = JsonDocument::new(input)
        .load()?
        .ok_or_else(|| CatalogError::MissingInput(input.to_path_buf()))?;

    let mut ranked = rank_models(&list.models);
    ranked.truncate(limit);
    Ok(ranked)
}
