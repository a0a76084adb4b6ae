//! Hierarchical account names.
//!
//! An account name is a list of components joined by [`Account::SEPARATOR`],
//! written root first (`Assets:US:Cash` is `["Assets", "US", "Cash"]`).
//! [`split_account_name`] is the only place that parses that format; both
//! [`Account`] construction and the raw-string helpers in the getters go
//! through it.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{GetterError, GetterResult};

/// Split a raw account name into its components.
///
/// Fails when the name is empty or when any component is empty (leading,
/// trailing or doubled separators).
pub fn split_account_name(name: &str) -> GetterResult<Vec<&str>> {
    if name.is_empty() {
        return Err(GetterError::malformed_account(name, "account name is empty"));
    }

    let components: Vec<&str> = name.split(Account::SEPARATOR).collect();
    if let Some(index) = components.iter().position(|c| c.is_empty()) {
        return Err(GetterError::malformed_account(
            name,
            format!("empty component at index {index}"),
        ));
    }

    Ok(components)
}

/// A validated account name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Account(String);

impl Account {
    /// Component separator.
    pub const SEPARATOR: char = ':';

    pub fn new(name: impl Into<String>) -> GetterResult<Self> {
        let name = name.into();
        split_account_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Components from root to leaf.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::SEPARATOR)
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Account {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for Account {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Account {
    type Error = GetterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Account {
    type Error = GetterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Account> for String {
    fn from(value: Account) -> Self {
        value.0
    }
}

impl FromStr for Account {
    type Err = GetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
