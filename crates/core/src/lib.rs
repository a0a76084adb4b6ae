//! `tally-core` — ledger data model shared by the getters.
//!
//! This crate contains **pure data** (no IO, no parsing of ledger text).

pub mod account;
pub mod entry;
pub mod error;

pub use account::{Account, split_account_name};
pub use entry::{
    Balance, Close, Commodity, Document, Entry, EntryKind, Event, Note, Open, Pad, Posting, Price,
    Transaction,
};
pub use error::{GetterError, GetterResult};
