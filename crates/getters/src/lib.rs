//! Ledger getters: derived summaries over a date-sorted entry sequence.
//!
//! Pure functions only: no IO, no caching, no mutation of the entries. Each
//! call visits every entry once in input order (and every posting of a
//! transaction once, in posting order) and returns a freshly built result.

pub mod accounts;
pub mod annotations;
pub mod commodities;
pub mod dates;
pub mod hierarchy;
pub mod lifecycle;

#[cfg(test)]
mod fixtures;

pub use accounts::{AccountsUseMap, get_accounts, get_accounts_use_map, get_entry_accounts};
pub use annotations::{get_all_links, get_all_payees, get_all_tags};
pub use commodities::get_commodity_directives;
pub use dates::{ActiveYears, get_active_years, get_min_max_dates, get_min_max_dates_of};
pub use hierarchy::{
    AccountTree, get_account_components, get_dict_accounts, get_leveln_parent_accounts,
};
pub use lifecycle::{OpenClose, get_account_open_close};
