//! Account names as a hierarchy of components.
//!
//! The functions taking raw names (`&[impl AsRef<str>]`) know nothing about
//! entries or open/close state; they work on any list of account names a
//! report happens to have. Raw names go through
//! [`tally_core::split_account_name`], so a malformed name is an error
//! rather than an empty component.

use std::collections::{BTreeMap, HashMap, HashSet};

use tally_core::{Account, Entry, GetterResult, split_account_name};

use crate::accounts::get_accounts;

/// Every individual component of every account referenced by `entries`.
pub fn get_account_components(entries: &[Entry]) -> HashSet<String> {
    let components: HashSet<String> = get_accounts(entries)
        .iter()
        .flat_map(|account| account.components().map(str::to_string))
        .collect();
    tracing::debug!(components = components.len(), "collected account components");
    components
}

/// Component at depth `level` (0 = root) of each account name.
///
/// Names with `level` components or fewer are skipped. A component is
/// emitted once per contributing name, in input order, provided at least
/// `min_accounts` names contribute it at that level; with `min_accounts`
/// of 0 or 1 nothing is filtered. Callers wanting a set deduplicate.
pub fn get_leveln_parent_accounts(
    account_names: &[impl AsRef<str>],
    level: usize,
    min_accounts: usize,
) -> GetterResult<Vec<String>> {
    let mut picked: Vec<&str> = Vec::new();
    let mut contributors: HashMap<&str, usize> = HashMap::new();

    for name in account_names {
        let components = split_account_name(name.as_ref())?;
        if let Some(component) = components.get(level).copied() {
            *contributors.entry(component).or_insert(0) += 1;
            picked.push(component);
        }
    }

    let parents: Vec<String> = picked
        .into_iter()
        .filter(|component| contributors[component] >= min_accounts)
        .map(str::to_string)
        .collect();
    tracing::debug!(level, min_accounts, parents = parents.len(), "collected level parents");
    Ok(parents)
}

/// Account names arranged as a tree of components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountTree {
    children: BTreeMap<String, AccountTree>,
    is_account: bool,
}

impl AccountTree {
    fn insert(&mut self, components: &[&str]) {
        let mut node = self;
        for component in components {
            node = node.children.entry((*component).to_string()).or_default();
        }
        node.is_account = true;
    }

    /// Direct children, sorted by component.
    pub fn children(&self) -> impl Iterator<Item = (&str, &AccountTree)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn get(&self, component: &str) -> Option<&AccountTree> {
        self.children.get(component)
    }

    /// Node for a full account name, walking one component per level.
    pub fn find(&self, account: &Account) -> Option<&AccountTree> {
        account
            .components()
            .try_fold(self, |node, component| node.get(component))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node was listed as an account itself (as opposed to
    /// only being the parent of listed accounts).
    pub fn is_account(&self) -> bool {
        self.is_account
    }

    /// Full names of the leaf accounts below this node, sorted.
    pub fn leaves(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, path: &mut Vec<&'a str>, leaves: &mut Vec<String>) {
        let separator = Account::SEPARATOR.to_string();
        for (component, node) in &self.children {
            path.push(component);
            if node.is_leaf() {
                leaves.push(path.join(separator.as_str()));
            } else {
                node.collect_leaves(path, leaves);
            }
            path.pop();
        }
    }
}

/// Build an [`AccountTree`] from raw account names.
pub fn get_dict_accounts(account_names: &[impl AsRef<str>]) -> GetterResult<AccountTree> {
    let mut tree = AccountTree::default();
    for name in account_names {
        tree.insert(&split_account_name(name.as_ref())?);
    }
    tracing::debug!(accounts = account_names.len(), roots = tree.children.len(), "built account tree");
    Ok(tree)
}
