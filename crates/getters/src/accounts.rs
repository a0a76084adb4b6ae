//! Which accounts a ledger references, and when.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tally_core::{Account, Entry};

/// Calls `visit` for every account an entry touches, in entry order.
///
/// For transactions this is one call per posting, so an account posted to
/// twice in the same transaction is visited twice.
pub(crate) fn for_each_entry_account<'a>(entry: &'a Entry, mut visit: impl FnMut(&'a Account)) {
    match entry {
        Entry::Open(open) => visit(&open.account),
        Entry::Close(close) => visit(&close.account),
        Entry::Transaction(txn) => txn.postings.iter().for_each(|p| visit(&p.account)),
        Entry::Balance(balance) => visit(&balance.account),
        Entry::Note(note) => visit(&note.account),
        Entry::Document(document) => visit(&document.account),
        Entry::Pad(pad) => {
            visit(&pad.account);
            visit(&pad.source_account);
        }
        Entry::Commodity(_) | Entry::Event(_) | Entry::Price(_) => {}
    }
}

/// Accounts touched by a single entry. Empty for kinds without accounts.
pub fn get_entry_accounts(entry: &Entry) -> HashSet<Account> {
    let mut accounts = HashSet::new();
    for_each_entry_account(entry, |account| {
        accounts.insert(account.clone());
    });
    accounts
}

/// Every account referenced anywhere in `entries`.
pub fn get_accounts(entries: &[Entry]) -> HashSet<Account> {
    let mut accounts = HashSet::new();
    for entry in entries {
        for_each_entry_account(entry, |account| {
            if !accounts.contains(account) {
                accounts.insert(account.clone());
            }
        });
    }
    tracing::debug!(entries = entries.len(), accounts = accounts.len(), "collected accounts");
    accounts
}

/// First and last usage date of every referenced account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountsUseMap {
    pub first: HashMap<Account, NaiveDate>,
    pub last: HashMap<Account, NaiveDate>,
}

/// Single pass over `entries` recording, per account, the date of the first
/// and of the last entry touching it.
///
/// Entries are not re-sorted: with date-sorted input `first`/`last` are the
/// earliest/latest dates, and on ties `last` follows traversal order.
pub fn get_accounts_use_map(entries: &[Entry]) -> AccountsUseMap {
    let mut use_map = AccountsUseMap::default();
    for entry in entries {
        let date = entry.date();
        for_each_entry_account(entry, |account| {
            use_map.first.entry(account.clone()).or_insert(date);
            use_map.last.insert(account.clone(), date);
        });
    }
    tracing::debug!(accounts = use_map.first.len(), "built accounts use map");
    use_map
}
