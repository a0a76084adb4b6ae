//! Resolved open/close directives per account.

use std::collections::HashMap;

use chrono::NaiveDate;
use tally_core::{Account, Close, Entry, Open};

/// The directives that bound an account's active lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenClose<'a> {
    pub open: Option<&'a Open>,
    pub close: Option<&'a Close>,
}

impl OpenClose<'_> {
    /// Whether the account is open on `date`: opened on or before it and not
    /// closed on or before it.
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        let opened = self.open.is_some_and(|open| open.date <= date);
        let closed = self.close.is_some_and(|close| close.date <= date);
        opened && !closed
    }
}

/// Map every opened or closed account to its resolved directives.
///
/// Ledgers often carry duplicate directives. The earliest `Open` in
/// traversal order is kept; every later `Close` replaces the previous one,
/// so the last `Close` wins. Accounts only ever posted to are not in the map.
pub fn get_account_open_close(entries: &[Entry]) -> HashMap<Account, OpenClose<'_>> {
    let mut open_close_map: HashMap<Account, OpenClose<'_>> = HashMap::new();
    for entry in entries {
        match entry {
            Entry::Open(open) => {
                let resolved = open_close_map.entry(open.account.clone()).or_default();
                if resolved.open.is_none() {
                    resolved.open = Some(open);
                } else {
                    tracing::debug!(account = %open.account, date = %open.date, "ignoring duplicate open");
                }
            }
            Entry::Close(close) => {
                let resolved = open_close_map.entry(close.account.clone()).or_default();
                resolved.close = Some(close);
            }
            _ => {}
        }
    }
    tracing::debug!(accounts = open_close_map.len(), "resolved account open/close");
    open_close_map
}
