//! Commodity declarations by currency.

use std::collections::HashMap;

use tally_core::{Commodity, Entry};

/// Map each declared currency to its `Commodity` directive. On duplicate
/// declarations the first one in traversal order is kept.
pub fn get_commodity_directives(entries: &[Entry]) -> HashMap<String, &Commodity> {
    let mut commodities = HashMap::new();
    for entry in entries {
        if let Entry::Commodity(commodity) = entry {
            commodities
                .entry(commodity.currency.clone())
                .or_insert(commodity);
        }
    }
    tracing::debug!(commodities = commodities.len(), "collected commodity directives");
    commodities
}
