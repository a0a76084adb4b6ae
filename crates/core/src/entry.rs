//! Ledger entries as handed over by the upstream parser.
//!
//! Entries are immutable facts. A sequence of them is expected to be sorted
//! by date (non-decreasing); entries sharing a date may come in any order.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Directive opening an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Open {
    pub date: NaiveDate,
    pub account: Account,
    /// Currencies the account is constrained to (empty = unconstrained).
    #[serde(default)]
    pub currencies: Vec<String>,
}

/// Directive closing an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Close {
    pub date: NaiveDate,
    pub account: Account,
}

/// One account-affecting line of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    #[serde(default = "default_flag")]
    pub flag: char,
    #[serde(default)]
    pub payee: Option<String>,
    #[serde(default)]
    pub narration: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub links: BTreeSet<String>,
    #[serde(default)]
    pub postings: Vec<Posting>,
}

fn default_flag() -> char {
    '*'
}

/// Balance assertion on an account (the amount itself is not modelled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub date: NaiveDate,
    pub account: Account,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub date: NaiveDate,
    pub account: Account,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub date: NaiveDate,
    pub account: Account,
    pub path: String,
}

/// Padding directive: `account` is filled up from `source_account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    pub date: NaiveDate,
    pub account: Account,
    pub source_account: Account,
}

/// Declaration of a commodity/currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commodity {
    pub date: NaiveDate,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub date: NaiveDate,
    pub currency: String,
}

/// A dated ledger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Open(Open),
    Close(Close),
    Transaction(Transaction),
    Balance(Balance),
    Note(Note),
    Document(Document),
    Pad(Pad),
    Commodity(Commodity),
    Event(Event),
    Price(Price),
}

/// Discriminant of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Open,
    Close,
    Transaction,
    Balance,
    Note,
    Document,
    Pad,
    Commodity,
    Event,
    Price,
}

impl Entry {
    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::Open(e) => e.date,
            Entry::Close(e) => e.date,
            Entry::Transaction(e) => e.date,
            Entry::Balance(e) => e.date,
            Entry::Note(e) => e.date,
            Entry::Document(e) => e.date,
            Entry::Pad(e) => e.date,
            Entry::Commodity(e) => e.date,
            Entry::Event(e) => e.date,
            Entry::Price(e) => e.date,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Open(_) => EntryKind::Open,
            Entry::Close(_) => EntryKind::Close,
            Entry::Transaction(_) => EntryKind::Transaction,
            Entry::Balance(_) => EntryKind::Balance,
            Entry::Note(_) => EntryKind::Note,
            Entry::Document(_) => EntryKind::Document,
            Entry::Pad(_) => EntryKind::Pad,
            Entry::Commodity(_) => EntryKind::Commodity,
            Entry::Event(_) => EntryKind::Event,
            Entry::Price(_) => EntryKind::Price,
        }
    }

    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            Entry::Transaction(txn) => Some(txn),
            _ => None,
        }
    }
}

impl From<Open> for Entry {
    fn from(value: Open) -> Self {
        Entry::Open(value)
    }
}

impl From<Close> for Entry {
    fn from(value: Close) -> Self {
        Entry::Close(value)
    }
}

impl From<Transaction> for Entry {
    fn from(value: Transaction) -> Self {
        Entry::Transaction(value)
    }
}
