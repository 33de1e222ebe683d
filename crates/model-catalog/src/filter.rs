//! Pricing filter for catalog entries.

use tracing::info;

use crate::types::ModelEntry;

/// Outcome of filtering a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub kept: Vec<ModelEntry>,
    pub dropped: Vec<String>,
}

/// True when both prompt and completion cost parse and are strictly positive.
///
/// Zero means free (usually a promotional alias) and `-1` means the provider
/// does not expose a price; neither is usable for cost-based routing.
pub fn is_priced(entry: &ModelEntry) -> bool {
    matches!(
        (entry.prompt_cost(), entry.completion_cost()),
        (Some(prompt), Some(completion)) if prompt > 0.0 && completion > 0.0
    )
}

/// Split `entries` into priced models and the ids of everything else.
///
/// Every dropped entry is logged with both of its costs.
pub fn filter_priced(entries: Vec<ModelEntry>) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for entry in entries {
        if is_priced(&entry) {
            outcome.kept.push(entry);
        } else {
            info!(
                model = entry.display_id(),
                prompt = ?entry.prompt_cost(),
                completion = ?entry.completion_cost(),
                "Filtering out model due to pricing"
            );
            outcome.dropped.push(entry.display_id().to_string());
        }
    }

    outcome
}
