//! Proptest generators for property-based testing.

use proptest::prelude::*;

use wac_core::{AclRule, AgentSet, Permission, PermissionSet};
use wac_doc::{AclDoc, AddRuleOptions};

/// The resource generated rules and documents govern.
pub const SCOPE: &str = "https://pod.example/docs/file";

/// The ACL resource for [`SCOPE`].
pub const ACL_URL: &str = "https://pod.example/docs/file.acl";

/// Generate a Permission.
pub fn permission() -> impl Strategy<Value = Permission> {
    prop_oneof![
        Just(Permission::Read),
        Just(Permission::Write),
        Just(Permission::Append),
        Just(Permission::Control),
    ]
}

/// Generate a PermissionSet, possibly empty.
pub fn permission_set() -> impl Strategy<Value = PermissionSet> {
    prop::collection::vec(permission(), 0..=4).prop_map(PermissionSet::from_iter)
}

/// Generate a WebID from a small pool, so that sets overlap often.
///
/// Most of the pool lives on the origin of [`SCOPE`], spelled in ways the
/// `url` crate would normalize: non-ASCII paths, uppercase hosts, explicit
/// default ports and query strings.
pub fn web_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-d]".prop_map(|name| format!("https://pod.example/people/{name}#me")),
        "[a-d]".prop_map(|name| format!("https://{name}.example/profile/card#me")),
        "[a-d]".prop_map(|name| format!("https://pod.example/équipe/{name}é#me")),
        "[a-d]".prop_map(|name| format!("https://POD.example/people/{name}#me")),
        "[a-d]".prop_map(|name| format!("https://pod.example:443/people/{name}#me")),
        "[a-d]".prop_map(|name| format!("https://pod.example/docs/card?user={name}#me")),
    ]
}

/// Generate a group reference from a small pool.
pub fn group() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]".prop_map(|name| format!("https://pod.example/groups#{name}")),
        "[a-c]".prop_map(|name| format!("https://Pod.Example/groupes/élèves#{name}")),
        "[a-c]".prop_map(|name| format!("https://pod.example:443/docs/groups?v=1#{name}")),
    ]
}

/// Generate an AgentSet, possibly empty.
pub fn agent_set() -> impl Strategy<Value = AgentSet> {
    (
        prop::collection::vec(web_id(), 0..4),
        prop::collection::vec(group(), 0..3),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(web_ids, groups, public, authenticated)| {
            let mut agents = AgentSet::from_web_ids(web_ids).add_groups(groups);
            if public {
                agents = agents.add_public();
            }
            if authenticated {
                agents = agents.add_authenticated();
            }
            agents
        })
}

/// Generate a rule on [`SCOPE`], inherited or not.
pub fn scoped_rule() -> impl Strategy<Value = AclRule> {
    (permission_set(), agent_set(), any::<bool>()).prop_map(|(permissions, agents, inherited)| {
        let rule = AclRule::new(permissions, agents).with_access_to(SCOPE);
        if inherited {
            rule.with_default(SCOPE)
        } else {
            rule
        }
    })
}

/// Generate a lenient document on [`SCOPE`] with up to `max_rules` rules
/// under synthesized subject ids.
pub fn acl_doc(max_rules: usize) -> impl Strategy<Value = AclDoc> {
    prop::collection::vec(scoped_rule(), 0..=max_rules).prop_filter_map(
        "document rejected a generated rule",
        |rules| {
            let mut doc = AclDoc::new(SCOPE).ok()?;
            for rule in rules {
                doc.insert_rule(rule, AddRuleOptions::default()).ok()?;
            }
            Some(doc)
        },
    )
}

/// True when the union of `parts` grants everything `rule` grants.
pub fn covered_by(rule: &AclRule, parts: &[AclRule]) -> bool {
    let mut remaining = vec![rule.clone()];
    for part in parts {
        remaining = remaining
            .iter()
            .flat_map(|fragment| AclRule::subtract(fragment, part))
            .collect();
    }
    remaining.iter().all(AclRule::has_no_effect)
}
