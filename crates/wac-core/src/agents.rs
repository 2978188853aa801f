//! Agent sets.
//!
//! An [`AgentSet`] unions four kinds of agent selectors: individual WebIDs,
//! group references, the public class (everyone), and the authenticated
//! class (anyone logged in). URIs are compared literally; callers are
//! responsible for canonical form.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A set of agents a rule applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSet {
    /// Individual identities.
    web_ids: IndexSet<String>,
    /// Group references (instances of `vcard:Group`).
    groups: IndexSet<String>,
    /// Access for everyone.
    public: bool,
    /// Access for any authenticated identity.
    authenticated: bool,
}

impl AgentSet {
    /// Create an empty agent set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Agent set containing only the public class.
    pub fn public() -> Self {
        Self::new().add_public()
    }

    /// Agent set containing only the authenticated class.
    pub fn authenticated() -> Self {
        Self::new().add_authenticated()
    }

    /// Agent set containing the given WebIDs.
    pub fn from_web_ids<I, S>(web_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().add_web_ids(web_ids)
    }

    /// Agent set containing the given groups.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().add_groups(groups)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // WebIDs
    // ─────────────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn add_web_id(mut self, web_id: impl Into<String>) -> Self {
        self.web_ids.insert(web_id.into());
        self
    }

    #[must_use]
    pub fn add_web_ids<I, S>(mut self, web_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.web_ids.extend(web_ids.into_iter().map(Into::into));
        self
    }

    /// True when every given WebID is present.
    pub fn has_web_ids<I, S>(&self, web_ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        web_ids
            .into_iter()
            .all(|web_id| self.web_ids.contains(web_id.as_ref()))
    }

    pub fn has_web_id(&self, web_id: &str) -> bool {
        self.web_ids.contains(web_id)
    }

    #[must_use]
    pub fn delete_web_id(mut self, web_id: &str) -> Self {
        self.web_ids.shift_remove(web_id);
        self
    }

    pub fn web_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.web_ids.iter().map(String::as_str)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Groups
    // ─────────────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn add_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    #[must_use]
    pub fn add_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// True when every given group is present.
    pub fn has_groups<I, S>(&self, groups: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        groups
            .into_iter()
            .all(|group| self.groups.contains(group.as_ref()))
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    #[must_use]
    pub fn delete_group(mut self, group: &str) -> Self {
        self.groups.shift_remove(group);
        self
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(String::as_str)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Agent classes
    // ─────────────────────────────────────────────────────────────────────────

    /// Give access to everyone. Other agents are left untouched.
    #[must_use]
    pub fn add_public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn has_public(&self) -> bool {
        self.public
    }

    #[must_use]
    pub fn delete_public(mut self) -> Self {
        self.public = false;
        self
    }

    /// Give access to anyone who has logged in with some identity.
    #[must_use]
    pub fn add_authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }

    pub fn has_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn delete_authenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Set algebra
    // ─────────────────────────────────────────────────────────────────────────

    /// True when no agent of any kind is stored.
    pub fn is_empty(&self) -> bool {
        self.web_ids.is_empty() && self.groups.is_empty() && !self.public && !self.authenticated
    }

    /// True when this set is a superset of `other` on every field.
    pub fn includes(&self, other: &AgentSet) -> bool {
        other.web_ids.is_subset(&self.web_ids)
            && other.groups.is_subset(&self.groups)
            && (self.public || !other.public)
            && (self.authenticated || !other.authenticated)
    }

    /// Agents in at least one of the two sets.
    pub fn union(&self, other: &AgentSet) -> Self {
        Self {
            web_ids: self.web_ids.union(&other.web_ids).cloned().collect(),
            groups: self.groups.union(&other.groups).cloned().collect(),
            public: self.public || other.public,
            authenticated: self.authenticated || other.authenticated,
        }
    }

    /// Agents in both sets.
    pub fn intersection(&self, other: &AgentSet) -> Self {
        Self {
            web_ids: self.web_ids.intersection(&other.web_ids).cloned().collect(),
            groups: self.groups.intersection(&other.groups).cloned().collect(),
            public: self.public && other.public,
            authenticated: self.authenticated && other.authenticated,
        }
    }

    /// Agents in this set that are not in `other`.
    pub fn difference(&self, other: &AgentSet) -> Self {
        Self {
            web_ids: self.web_ids.difference(&other.web_ids).cloned().collect(),
            groups: self.groups.difference(&other.groups).cloned().collect(),
            public: self.public && !other.public,
            authenticated: self.authenticated && !other.authenticated,
        }
    }
}

impl From<&str> for AgentSet {
    /// A single WebID.
    fn from(web_id: &str) -> Self {
        Self::new().add_web_id(web_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "https://alice.example/profile/card#me";
    const BOB: &str = "https://bob.example/profile/card#me";
    const TEAM: &str = "https://alice.example/groups#team";

    #[test]
    fn test_web_id_lifecycle() {
        let agents = AgentSet::from_web_ids([ALICE]).add_web_id(BOB);
        assert!(agents.has_web_ids([ALICE, BOB]));

        let agents = agents.delete_web_id(ALICE);
        assert!(!agents.has_web_id(ALICE));
        assert!(!agents.has_web_ids([ALICE, BOB]));
        assert!(agents.has_web_id(BOB));
    }

    #[test]
    fn test_public_does_not_touch_other_agents() {
        let agents = AgentSet::from(ALICE).add_public();
        assert!(agents.has_public());
        assert!(agents.has_web_id(ALICE));

        let agents = agents.delete_public();
        assert!(!agents.has_public());
        assert!(agents.has_web_id(ALICE));
    }

    #[test]
    fn test_is_empty() {
        assert!(AgentSet::new().is_empty());
        assert!(!AgentSet::public().is_empty());
        assert!(!AgentSet::authenticated().is_empty());
        assert!(!AgentSet::from_groups([TEAM]).is_empty());
        assert!(AgentSet::from(ALICE).delete_web_id(ALICE).is_empty());
    }

    #[test]
    fn test_equality_is_structural() {
        let a = AgentSet::from_web_ids([ALICE, BOB]).add_public();
        let b = AgentSet::public().add_web_ids([BOB, ALICE]);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().add_authenticated());
        assert_ne!(AgentSet::from_web_ids([TEAM]), AgentSet::from_groups([TEAM]));
    }

    #[test]
    fn test_includes() {
        let big = AgentSet::from_web_ids([ALICE, BOB]).add_group(TEAM).add_public();
        assert!(big.includes(&AgentSet::from(ALICE)));
        assert!(big.includes(&AgentSet::public()));
        assert!(!big.includes(&AgentSet::authenticated()));
        assert!(!AgentSet::from(ALICE).includes(&big));
        assert!(AgentSet::new().includes(&AgentSet::new()));
    }

    #[test]
    fn test_union_intersection_difference() {
        let first = AgentSet::from_web_ids([ALICE, BOB]).add_public();
        let second = AgentSet::from(BOB).add_group(TEAM).add_public().add_authenticated();

        let union = first.union(&second);
        assert!(union.has_web_ids([ALICE, BOB]));
        assert!(union.has_group(TEAM));
        assert!(union.has_public() && union.has_authenticated());

        let common = first.intersection(&second);
        assert_eq!(common, AgentSet::from(BOB).add_public());

        let rest = first.difference(&second);
        assert_eq!(rest, AgentSet::from(ALICE));

        assert!(first.difference(&first).is_empty());
    }
}
