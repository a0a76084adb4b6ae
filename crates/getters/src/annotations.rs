//! Tags, links and payees attached to transactions.

use std::collections::BTreeSet;

use tally_core::{Entry, Transaction};

fn transactions(entries: &[Entry]) -> impl Iterator<Item = &Transaction> {
    entries.iter().filter_map(Entry::as_transaction)
}

/// All tags used by any transaction, deduplicated and sorted.
pub fn get_all_tags(entries: &[Entry]) -> Vec<String> {
    let tags: BTreeSet<&str> = transactions(entries)
        .flat_map(|txn| txn.tags.iter().map(String::as_str))
        .collect();
    tracing::debug!(tags = tags.len(), "collected tags");
    tags.into_iter().map(str::to_string).collect()
}

/// All links used by any transaction, deduplicated and sorted.
pub fn get_all_links(entries: &[Entry]) -> Vec<String> {
    let links: BTreeSet<&str> = transactions(entries)
        .flat_map(|txn| txn.links.iter().map(String::as_str))
        .collect();
    tracing::debug!(links = links.len(), "collected links");
    links.into_iter().map(str::to_string).collect()
}

/// All payees, deduplicated and sorted. Absent and empty payees are skipped.
pub fn get_all_payees(entries: &[Entry]) -> Vec<String> {
    let payees: BTreeSet<&str> = transactions(entries)
        .filter_map(|txn| txn.payee.as_deref())
        .filter(|payee| !payee.is_empty())
        .collect();
    tracing::debug!(payees = payees.len(), "collected payees");
    payees.into_iter().map(str::to_string).collect()
}
