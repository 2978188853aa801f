//! ACL rules and the rule algebra.
//!
//! A rule grants a [`PermissionSet`] to an [`AgentSet`] over a scope. The
//! scope is the resource named by `access_to`, optionally extended to the
//! resources contained in `default` (and its legacy alias `default_for_new`).
//!
//! Rules are value types. Every operation here returns new rules; nothing is
//! mutated in place.

use serde::{Deserialize, Serialize};

use crate::agents::AgentSet;
use crate::permission::PermissionSet;
use crate::quad::Quad;

/// A grant of permissions to agents over a scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclRule {
    /// Granted access modes.
    pub permissions: PermissionSet,

    /// Agents the modes are granted to.
    pub agents: AgentSet,

    /// The resource this rule targets.
    pub access_to: Option<String>,

    /// Container whose members inherit this rule.
    pub default: Option<String>,

    /// Legacy alias of `default`. Kept separately so documents written with
    /// either predicate round-trip unchanged.
    pub default_for_new: Option<String>,

    /// Statements about this rule's subject that the ACL vocabulary does not
    /// describe, in source order.
    pub other_quads: Vec<Quad>,
}

impl AclRule {
    /// Create an unscoped rule.
    pub fn new(permissions: PermissionSet, agents: AgentSet) -> Self {
        Self {
            permissions,
            agents,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_access_to(mut self, access_to: impl Into<String>) -> Self {
        self.access_to = Some(access_to.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn with_default_for_new(mut self, default_for_new: impl Into<String>) -> Self {
        self.default_for_new = Some(default_for_new.into());
        self
    }

    #[must_use]
    pub fn with_other_quads<I: IntoIterator<Item = Quad>>(mut self, quads: I) -> Self {
        self.other_quads.extend(quads);
        self
    }

    /// True when the rule is inherited by contained resources.
    pub fn is_default(&self) -> bool {
        self.default.is_some() || self.default_for_new.is_some()
    }

    /// True when the rule grants nothing.
    ///
    /// A rule carrying foreign statements is never void, whatever its ACL
    /// content, so minimization cannot destroy unrelated data.
    pub fn has_no_effect(&self) -> bool {
        self.other_quads.is_empty()
            && (self.permissions.is_empty() || self.agents.is_empty() || self.access_to.is_none())
    }

    /// Return the parts of `first` that are not granted by `second`.
    ///
    /// Returns zero, one or two rules:
    ///
    /// 1. `first`'s permissions for the agents `second` does not name;
    /// 2. the permissions `second` does not grant, for the agents it does name.
    ///
    /// Rules without effect are dropped. Both results keep `first`'s scope and
    /// other statements. When the scopes do not match (different `access_to`,
    /// or `first` is a default rule with a different `default`), `second`
    /// cannot affect `first` and a copy of `first` is returned.
    ///
    /// ```rust
    /// use wac_core::{AclRule, AgentSet, Permission, PermissionSet};
    ///
    /// let scope = "https://pod.example/file";
    /// let first = AclRule::new(
    ///     PermissionSet::from_iter([Permission::Read, Permission::Write]),
    ///     AgentSet::from_web_ids(["web", "id"]),
    /// )
    /// .with_access_to(scope);
    /// let second = AclRule::new(PermissionSet::from(Permission::Read), AgentSet::from("web"))
    ///     .with_access_to(scope);
    ///
    /// let rest = AclRule::subtract(&first, &second);
    /// assert_eq!(rest[0].agents, AgentSet::from("id"));
    /// assert_eq!(rest[1].permissions, PermissionSet::from(Permission::Write));
    /// assert_eq!(rest[1].agents, AgentSet::from("web"));
    /// ```
    pub fn subtract(first: &AclRule, second: &AclRule) -> Vec<AclRule> {
        let default_differs = first.default.is_some() && first.default != second.default;
        if default_differs || first.access_to != second.access_to {
            return vec![first.clone()];
        }

        let unaffected_agents = AclRule {
            agents: first.agents.difference(&second.agents),
            ..first.clone()
        };

        let residual_permissions = AclRule {
            permissions: first.permissions.difference(&second.permissions),
            agents: first.agents.intersection(&second.agents),
            ..first.clone()
        };

        [unaffected_agents, residual_permissions]
            .into_iter()
            .filter(|rule| !rule.has_no_effect())
            .collect()
    }

    /// Return the part both rules grant.
    ///
    /// Scope fields are kept where both rules agree and cleared otherwise.
    /// Other statements are intersected as a multiset.
    pub fn common(first: &AclRule, second: &AclRule) -> AclRule {
        let mut unmatched: Vec<&Quad> = second.other_quads.iter().collect();
        let other_quads = first
            .other_quads
            .iter()
            .filter(|quad| match unmatched.iter().position(|other| other == quad) {
                Some(index) => {
                    unmatched.swap_remove(index);
                    true
                }
                None => false,
            })
            .cloned()
            .collect();

        AclRule {
            permissions: first.permissions.intersection(&second.permissions),
            agents: first.agents.intersection(&second.agents),
            access_to: shared(&first.access_to, &second.access_to),
            default: shared(&first.default, &second.default),
            default_for_new: shared(&first.default_for_new, &second.default_for_new),
            other_quads,
        }
    }

    /// True when everything `other` grants is also granted by this rule.
    ///
    /// Only ACL content is compared; `other`'s foreign statements are ignored.
    pub fn includes(&self, other: &AclRule) -> bool {
        let probe = AclRule {
            other_quads: Vec::new(),
            ..other.clone()
        };
        probe.has_no_effect() || AclRule::subtract(&probe, self).is_empty()
    }
}

fn shared(first: &Option<String>, second: &Option<String>) -> Option<String> {
    if first == second {
        first.clone()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::Permission::{self, *};
    use crate::quad::Term;

    const SCOPE: &str = "https://pod.example/docs/";
    const OTHER_SCOPE: &str = "https://pod.example/private/";

    fn perms<const N: usize>(modes: [Permission; N]) -> PermissionSet {
        PermissionSet::from_iter(modes)
    }

    fn rule<const N: usize, const M: usize>(modes: [Permission; N], web_ids: [&str; M]) -> AclRule {
        AclRule::new(perms(modes), AgentSet::from_web_ids(web_ids)).with_access_to(SCOPE)
    }

    fn note(subject: &str) -> Quad {
        Quad::new(
            Term::iri(subject),
            "http://xmlns.com/foaf/0.1/name",
            Term::literal("note"),
        )
    }

    #[test]
    fn test_has_no_effect() {
        assert!(rule([], ["web"]).has_no_effect());
        assert!(rule([Read], []).has_no_effect());
        assert!(AclRule::new(perms([Read]), AgentSet::public()).has_no_effect());
        assert!(!rule([Read], ["web"]).has_no_effect());
    }

    #[test]
    fn test_foreign_statements_keep_rule_alive() {
        let rule = AclRule::default().with_other_quads([note("#r")]);
        assert!(!rule.has_no_effect());
    }

    #[test]
    fn test_subtract_splits_into_two() {
        let first = rule([Read, Write], ["web", "id"]);
        let second = rule([Read], ["web"]);

        let rest = AclRule::subtract(&first, &second);

        assert_eq!(rest, vec![rule([Read, Write], ["id"]), rule([Write], ["web"])]);
    }

    #[test]
    fn test_subtract_self_cancels() {
        let first = rule([Read, Write, Control], ["web", "id"]);
        assert!(AclRule::subtract(&first, &first.clone()).is_empty());
    }

    #[test]
    fn test_subtract_only_unaffected_agents() {
        let first = rule([Read, Write], ["web", "id"]);
        let second = rule([Read, Write], ["web"]);
        assert_eq!(AclRule::subtract(&first, &second), vec![rule([Read, Write], ["id"])]);
    }

    #[test]
    fn test_subtract_only_residual_permissions() {
        let first = rule([Read, Write], ["web"]);
        let second = rule([Read], ["web", "id"]);
        assert_eq!(AclRule::subtract(&first, &second), vec![rule([Write], ["web"])]);
    }

    #[test]
    fn test_subtract_with_different_access_to_is_noop() {
        let first = rule([Read], ["web"]);
        let second = rule([Read], ["web"]).with_access_to(OTHER_SCOPE);
        assert_eq!(AclRule::subtract(&first, &second), vec![first]);
    }

    #[test]
    fn test_subtract_from_default_rule_needs_matching_default() {
        let first = rule([Read], ["web"]).with_default(SCOPE);
        let plain = rule([Read], ["web"]);
        assert_eq!(AclRule::subtract(&first, &plain), vec![first.clone()]);

        let other_default = rule([Read], ["web"]).with_default(OTHER_SCOPE);
        assert_eq!(AclRule::subtract(&first, &other_default), vec![first.clone()]);

        let same_default = rule([Read], ["web"]).with_default(SCOPE);
        assert!(AclRule::subtract(&first, &same_default).is_empty());
    }

    #[test]
    fn test_default_rule_covers_plain_rule() {
        let plain = rule([Read], ["web"]);
        let default = rule([Read], ["web"]).with_default(SCOPE);
        assert!(AclRule::subtract(&plain, &default).is_empty());
    }

    #[test]
    fn test_subtract_keeps_scope_and_other_quads_of_first() {
        let first = rule([Read, Write], ["web", "id"])
            .with_default(SCOPE)
            .with_default_for_new(SCOPE)
            .with_other_quads([note("#r")]);
        let second = rule([Read], ["web"]).with_default(SCOPE);

        let rest = AclRule::subtract(&first, &second);
        assert_eq!(rest.len(), 2);
        for part in &rest {
            assert_eq!(part.access_to.as_deref(), Some(SCOPE));
            assert_eq!(part.default.as_deref(), Some(SCOPE));
            assert_eq!(part.default_for_new.as_deref(), Some(SCOPE));
            assert_eq!(part.other_quads, vec![note("#r")]);
        }
    }

    #[test]
    fn test_common() {
        let first = rule([Read, Write], ["web", "id"]).with_other_quads([note("#a"), note("#b")]);
        let second = rule([Write, Append], ["id", "other"])
            .with_default(SCOPE)
            .with_other_quads([note("#b"), note("#b")]);

        let common = AclRule::common(&first, &second);

        assert_eq!(common.permissions, perms([Write]));
        assert_eq!(common.agents, AgentSet::from("id"));
        assert_eq!(common.access_to.as_deref(), Some(SCOPE));
        assert_eq!(common.default, None);
        assert_eq!(common.other_quads, vec![note("#b")]);
    }

    #[test]
    fn test_common_clears_disagreeing_access_to() {
        let first = rule([Read], ["web"]);
        let second = rule([Read], ["web"]).with_access_to(OTHER_SCOPE);
        assert_eq!(AclRule::common(&first, &second).access_to, None);
    }

    #[test]
    fn test_includes() {
        let big = rule([Read, Write], ["web", "id"]);
        assert!(big.includes(&rule([Read], ["web"])));
        assert!(big.includes(&rule([Read, Write], ["id"]).with_other_quads([note("#x")])));
        assert!(!big.includes(&rule([Control], ["web"])));
        assert!(!big.includes(&rule([Read], ["stranger"])));
        assert!(!big.includes(&rule([Read], ["web"]).with_access_to(OTHER_SCOPE)));
    }

    #[test]
    fn test_equality_covers_every_field() {
        let base = rule([Read], ["web"]);
        assert_eq!(base, base.clone());
        assert_ne!(base, base.clone().with_default(SCOPE));
        assert_ne!(base, base.clone().with_default_for_new(SCOPE));
        assert_ne!(base, base.clone().with_other_quads([note("#r")]));
    }
}
