//! Access modes and permission sets.
//!
//! A [`PermissionSet`] is an unordered set over the four ACL access modes.
//! Iteration follows insertion order so tests stay deterministic, but the
//! order carries no meaning: equality is set equality.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::vocab::{modes, ACL};

/// One of the four ACL access modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    Read,
    Write,
    Append,
    Control,
}

impl Permission {
    /// All access modes, in canonical order.
    pub const ALL: [Permission; 4] = [
        Permission::Read,
        Permission::Write,
        Permission::Append,
        Permission::Control,
    ];

    /// The mode's IRI in the ACL namespace.
    pub const fn iri(self) -> &'static str {
        match self {
            Permission::Read => modes::READ,
            Permission::Write => modes::WRITE,
            Permission::Append => modes::APPEND,
            Permission::Control => modes::CONTROL,
        }
    }

    /// The local name of the mode (`"Read"`, `"Write"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Permission::Read => "Read",
            Permission::Write => "Write",
            Permission::Append => "Append",
            Permission::Control => "Control",
        }
    }

    /// Look up a mode by its full IRI.
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.iri() == iri)
    }

    /// The IRIs accepted by [`FromStr`], for error messages.
    pub fn valid_iris() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.iri()).collect()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iri())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    /// Accepts the full IRI or the bare local name.
    fn from_str(token: &str) -> Result<Self> {
        let local = token.strip_prefix(ACL).unwrap_or(token);
        Self::ALL
            .into_iter()
            .find(|p| p.name() == local)
            .ok_or_else(|| CoreError::InvalidPermission {
                token: token.to_string(),
                valid: Self::valid_iris(),
            })
    }
}

/// A set of access modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: IndexSet<Permission>,
}

impl PermissionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of all four access modes.
    pub fn all() -> Self {
        Self::from_iter(Permission::ALL)
    }

    /// Parse a set from IRI or local-name tokens.
    ///
    /// Fails on the first token that is not an access mode.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<Permission>())
            .collect()
    }

    /// Return this set with `permission` added.
    #[must_use]
    pub fn add(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    /// Return this set with the mode named by `token` added.
    pub fn try_add(self, token: &str) -> Result<Self> {
        let permission = token.parse()?;
        Ok(self.add(permission))
    }

    /// Return this set with `permission` removed.
    #[must_use]
    pub fn delete(mut self, permission: Permission) -> Self {
        self.permissions.shift_remove(&permission);
        self
    }

    /// Check whether `permission` is present.
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Check whether every one of `permissions` is present.
    pub fn has_all<I: IntoIterator<Item = Permission>>(&self, permissions: I) -> bool {
        permissions.into_iter().all(|p| self.has(p))
    }

    /// True when `other` is a subset of this set.
    pub fn includes(&self, other: &PermissionSet) -> bool {
        other.permissions.is_subset(&self.permissions)
    }

    /// True when no permission is stored.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions.iter().copied()
    }

    /// Permissions in at least one of the two sets.
    pub fn union(&self, other: &PermissionSet) -> Self {
        self.iter().chain(other.iter()).collect()
    }

    /// Permissions in both sets.
    pub fn intersection(&self, other: &PermissionSet) -> Self {
        self.iter().filter(|p| other.has(*p)).collect()
    }

    /// Permissions in this set that are not in `other`.
    pub fn difference(&self, other: &PermissionSet) -> Self {
        self.iter().filter(|p| !other.has(*p)).collect()
    }

    /// Human-readable label, local names concatenated in canonical order.
    ///
    /// `{Write, Read}` becomes `"ReadWrite"`. Used for subject-id synthesis.
    pub fn label(&self) -> String {
        Permission::ALL
            .into_iter()
            .filter(|p| self.has(*p))
            .map(Permission::name)
            .collect()
    }
}

impl From<Permission> for PermissionSet {
    fn from(permission: Permission) -> Self {
        Self::new().add(permission)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = Permission;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, Permission>>;

    fn into_iter(self) -> Self::IntoIter {
        self.permissions.iter().copied()
    }
}
