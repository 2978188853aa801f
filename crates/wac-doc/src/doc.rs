//! The access-control document.
//!
//! An [`AclDoc`] owns its rules by value. Callers hand rules in and read them
//! back through shared references; the only way to change a stored rule is
//! through the document's own operations.

use indexmap::IndexMap;
use tracing::debug;

use wac_core::{AclRule, AgentSet, CoreError, Permission, PermissionSet, Quad};

use crate::error::{DocError, Result};
use crate::subject::{normalize_subject_id, synthesize_subject_id};

/// Options for adding a rule.
#[derive(Debug, Clone, Default)]
pub struct AddRuleOptions {
    /// Store the rule under this id instead of synthesizing one. An existing
    /// rule with the same id is overwritten.
    pub subject_id: Option<String>,
}

impl AddRuleOptions {
    pub fn subject_id(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: Some(subject_id.into()),
        }
    }
}

/// The rules and foreign statements of one ACL resource.
#[derive(Debug, Clone)]
pub struct AclDoc {
    /// The resource this document governs.
    access_to: String,

    /// Reject rules whose scope disagrees with `access_to`.
    strict: bool,

    /// Rules indexed by normalized subject id, in insertion order.
    rules: IndexMap<String, AclRule>,

    /// Top-level statements that are not part of any rule.
    other_quads: Vec<Quad>,
}

impl AclDoc {
    /// Create an empty, lenient document governing `access_to`.
    pub fn new(access_to: impl Into<String>) -> Result<Self> {
        let access_to = access_to.into();
        if access_to.trim().is_empty() {
            return Err(CoreError::MissingScope("document accessTo is empty".to_string()).into());
        }

        Ok(Self {
            access_to,
            strict: false,
            rules: IndexMap::new(),
            other_quads: Vec::new(),
        })
    }

    /// Create an empty document that validates rule scopes.
    pub fn strict(access_to: impl Into<String>) -> Result<Self> {
        Ok(Self::new(access_to)?.with_strict(true))
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn access_to(&self) -> &str {
        &self.access_to
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Number of stored rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Stored rules with their subject ids, in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &AclRule)> + '_ {
        self.rules.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    pub fn subject_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.keys().map(String::as_str)
    }

    /// Top-level statements that are not rules.
    pub fn other_quads(&self) -> &[Quad] {
        &self.other_quads
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Insertion
    // ─────────────────────────────────────────────────────────────────────────

    /// Grant `permissions` to `agents` on this document's resource.
    ///
    /// Returns the subject id the rule was stored under.
    pub fn add_rule(
        &mut self,
        permissions: PermissionSet,
        agents: AgentSet,
        options: AddRuleOptions,
    ) -> Result<String> {
        self.insert_rule(AclRule::new(permissions, agents), options)
    }

    /// Like [`add_rule`](Self::add_rule), but the rule is also inherited by
    /// resources contained in this one.
    pub fn add_default_rule(
        &mut self,
        permissions: PermissionSet,
        agents: AgentSet,
        options: AddRuleOptions,
    ) -> Result<String> {
        let rule = AclRule::new(permissions, agents).with_default(self.access_to.clone());
        self.insert_rule(rule, options)
    }

    /// Store a fully built rule.
    ///
    /// A missing `access_to` is filled in with the document's. In strict mode
    /// every scope field must equal the document's `access_to`. Nothing is
    /// stored when validation fails.
    pub fn insert_rule(&mut self, mut rule: AclRule, options: AddRuleOptions) -> Result<String> {
        if rule.access_to.is_none() {
            rule.access_to = Some(self.access_to.clone());
        }
        self.check_scope(&rule)?;

        let subject_id = match options.subject_id {
            Some(id) => normalize_subject_id(&self.access_to, &id),
            None => self.new_subject_id(&rule, None),
        };

        if self.rules.insert(subject_id.clone(), rule).is_some() {
            debug!(subject_id = %subject_id, "overwrote existing rule");
        } else {
            debug!(subject_id = %subject_id, "added rule");
        }

        Ok(subject_id)
    }

    /// Append top-level statements that are not access restrictions.
    pub fn add_other<I: IntoIterator<Item = Quad>>(&mut self, quads: I) {
        self.other_quads.extend(quads);
    }

    fn check_scope(&self, rule: &AclRule) -> Result<()> {
        if !self.strict {
            return Ok(());
        }

        let fields = [
            ("accessTo", &rule.access_to),
            ("default", &rule.default),
            ("defaultForNew", &rule.default_for_new),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                if value != &self.access_to {
                    return Err(DocError::InvalidScope {
                        field,
                        expected: self.access_to.clone(),
                        actual: value.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// True when the stored rules together grant `permissions` to `agents`.
    ///
    /// ```rust
    /// use wac_core::{AgentSet, Permission::*, PermissionSet};
    /// use wac_doc::{AclDoc, AddRuleOptions};
    ///
    /// let mut doc = AclDoc::new("https://pod.example/file").unwrap();
    /// doc.add_rule(Read.into(), "a".into(), AddRuleOptions::subject_id("#1")).unwrap();
    /// doc.add_rule(Write.into(), "a".into(), AddRuleOptions::subject_id("#2")).unwrap();
    ///
    /// assert!(doc.has_rule(&PermissionSet::from_iter([Read, Write]), &AgentSet::from("a")));
    /// ```
    pub fn has_rule(&self, permissions: &PermissionSet, agents: &AgentSet) -> bool {
        self.covers(&self.query(permissions, agents))
    }

    /// Like [`has_rule`](Self::has_rule) for rules inherited by contained
    /// resources.
    pub fn has_default_rule(&self, permissions: &PermissionSet, agents: &AgentSet) -> bool {
        self.covers(&self.default_query(permissions, agents))
    }

    /// True when the union of stored rules grants everything `query` grants.
    ///
    /// The query is repeatedly split by subtracting each stored rule; it is
    /// covered once no fragment remains. An empty document covers nothing.
    pub fn covers(&self, query: &AclRule) -> bool {
        let mut remaining = vec![query.clone()];
        for existing in self.rules.values() {
            remaining = remaining
                .iter()
                .flat_map(|fragment| AclRule::subtract(fragment, existing))
                .collect();
            if remaining.is_empty() {
                return true;
            }
        }

        false
    }

    /// The rule stored under `subject_id`, after normalization.
    pub fn get_rule_by_subject_id(&self, subject_id: &str) -> Option<&AclRule> {
        self.rules
            .get(&normalize_subject_id(&self.access_to, subject_id))
    }

    /// Union of the agents of every rule on this resource granting at least
    /// `permissions`.
    pub fn get_agents_with(&self, permissions: &PermissionSet) -> AgentSet {
        self.rules
            .values()
            .filter(|rule| rule.access_to.as_deref() == Some(self.access_to.as_str()))
            .filter(|rule| rule.permissions.includes(permissions))
            .fold(AgentSet::new(), |agents, rule| agents.union(&rule.agents))
    }

    /// Every permission granted to `agents`.
    ///
    /// Meant for single-agent queries. Public and authenticated grants are
    /// not added automatically: asking for a WebID does not report what the
    /// public class may do.
    pub fn get_permissions_for(&self, agents: &AgentSet) -> PermissionSet {
        Permission::ALL
            .into_iter()
            .filter(|permission| {
                self.get_agents_with(&PermissionSet::from(*permission))
                    .includes(agents)
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Deletion
    // ─────────────────────────────────────────────────────────────────────────

    /// Revoke `permissions` from `agents` in every rule on this resource.
    pub fn delete_rule(&mut self, permissions: &PermissionSet, agents: &AgentSet) {
        let grant = self.query(permissions, agents);
        self.subtract_everywhere(&grant);
    }

    /// Revoke inherited `permissions` from `agents`.
    pub fn delete_default_rule(&mut self, permissions: &PermissionSet, agents: &AgentSet) {
        let grant = self.default_query(permissions, agents);
        self.subtract_everywhere(&grant);
    }

    /// Remove the whole entry stored under `subject_id`.
    pub fn delete_subject(&mut self, subject_id: &str) -> Option<AclRule> {
        let key = normalize_subject_id(&self.access_to, subject_id);
        let removed = self.rules.shift_remove(&key);
        if removed.is_some() {
            debug!(subject_id = %key, "deleted subject");
        }
        removed
    }

    /// Revoke `permissions` from `agents` in the rule stored under
    /// `subject_id` only.
    ///
    /// When the revocation splits the rule in two, both parts are stored under
    /// freshly synthesized ids and the original id is retired.
    pub fn delete_by_subject_id(
        &mut self,
        subject_id: &str,
        permissions: &PermissionSet,
        agents: &AgentSet,
    ) {
        let key = normalize_subject_id(&self.access_to, subject_id);
        let grant = self.query(permissions, agents);
        self.subtract_from_subject(&key, &grant);
    }

    /// Revoke every permission from `agents`.
    pub fn delete_agents(&mut self, agents: &AgentSet) {
        self.delete_rule(&PermissionSet::all(), agents);
    }

    /// Strip `permissions` from every rule, whoever it grants them to.
    pub fn delete_permissions(&mut self, permissions: &PermissionSet) {
        let keys: Vec<String> = self.rules.keys().cloned().collect();
        for key in keys {
            let Some(existing) = self.rules.get(&key) else {
                continue;
            };
            let grant = AclRule {
                permissions: permissions.clone(),
                other_quads: Vec::new(),
                ..existing.clone()
            };
            self.subtract_from_subject(&key, &grant);
        }
    }

    /// Drop every rule that grants nothing. Returns how many were dropped.
    pub fn minimize_rules(&mut self) -> usize {
        let before = self.rules.len();
        self.rules.retain(|_, rule| !rule.has_no_effect());
        let removed = before - self.rules.len();
        if removed > 0 {
            debug!(removed, remaining = self.rules.len(), "minimized rules");
        }
        removed
    }

    fn subtract_everywhere(&mut self, grant: &AclRule) {
        let keys: Vec<String> = self.rules.keys().cloned().collect();
        for key in keys {
            self.subtract_from_subject(&key, grant);
        }
    }

    fn subtract_from_subject(&mut self, key: &str, grant: &AclRule) {
        let Some(existing) = self.rules.get(key) else {
            return;
        };

        let mut rest = AclRule::subtract(existing, grant);
        match rest.len() {
            0 => {
                self.rules.shift_remove(key);
                debug!(subject_id = %key, "rule fully revoked");
            }
            1 => {
                if let (Some(slot), Some(rule)) = (self.rules.get_mut(key), rest.pop()) {
                    *slot = rule;
                }
            }
            _ => {
                self.rules.shift_remove(key);
                for rule in rest {
                    let subject_id = self.new_subject_id(&rule, Some(key));
                    debug!(from = %key, to = %subject_id, "split rule");
                    self.rules.insert(subject_id, rule);
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn query(&self, permissions: &PermissionSet, agents: &AgentSet) -> AclRule {
        AclRule::new(permissions.clone(), agents.clone()).with_access_to(self.access_to.clone())
    }

    fn default_query(&self, permissions: &PermissionSet, agents: &AgentSet) -> AclRule {
        self.query(permissions, agents)
            .with_default(self.access_to.clone())
    }

    /// Synthesize an id that collides with no stored id and is not `retired`.
    fn new_subject_id(&self, rule: &AclRule, retired: Option<&str>) -> String {
        synthesize_subject_id(rule, |candidate| {
            let candidate = normalize_subject_id(&self.access_to, candidate);
            self.rules.contains_key(&candidate) || retired == Some(candidate.as_str())
        })
    }
}

impl PartialEq for AclDoc {
    /// Same resource, same foreign statements in the same order, and the same
    /// rule under every subject id. Strictness is a policy, not content, and
    /// is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.access_to == other.access_to
            && self.other_quads == other.other_quads
            && self.rules.len() == other.rules.len()
            && self
                .rules
                .iter()
                .all(|(id, rule)| other.rules.get(id) == Some(rule))
    }
}

impl Eq for AclDoc {}
