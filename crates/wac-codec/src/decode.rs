//! Statements to rules.
//!
//! Statements are grouped by subject. A subject typed `acl:Authorization`
//! becomes a rule; every other statement is kept as a top-level foreign
//! statement.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use wac_core::vocab::{agent_classes, predicates, types, ACL};
use wac_core::{AclRule, Permission, Quad};
use wac_doc::{AclDoc, AddRuleOptions};

use crate::error::{CodecError, Result};

/// Rules and foreign statements recovered from a statement stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    /// Rules keyed by subject, in order of first appearance. Blank node
    /// subjects are keyed as `_:label`.
    pub rules: IndexMap<String, AclRule>,

    /// Statements about subjects that are not authorizations, in stream order.
    pub other_quads: Vec<Quad>,
}

impl Decoded {
    /// Build a document governing `access_to` from the decoded rules.
    ///
    /// Rules without an `accessTo` inherit the document's. A strict document
    /// rejects rules scoped to another resource.
    pub fn into_doc(self, access_to: &str, strict: bool) -> Result<AclDoc> {
        let mut doc = AclDoc::new(access_to)?.with_strict(strict);
        for (subject_id, rule) in self.rules {
            doc.insert_rule(rule, AddRuleOptions::subject_id(subject_id))?;
        }
        doc.add_other(self.other_quads);
        Ok(doc)
    }
}

/// Decode statements into rules.
///
/// In strict mode an ACL-namespace predicate the decoder does not know fails
/// with [`CodecError::UnrecognizedPredicate`]; otherwise it is kept with the
/// rule's foreign statements.
pub fn decode(quads: Vec<Quad>, strict: bool) -> Result<Decoded> {
    let authorizations: HashSet<String> = quads
        .iter()
        .filter(|quad| is_authorization_type(quad))
        .map(|quad| quad.subject.subject_key())
        .collect();

    let mut decoded = Decoded::default();
    for quad in quads {
        let key = quad.subject.subject_key();
        if !authorizations.contains(&key) {
            decoded.other_quads.push(quad);
            continue;
        }

        let rule = decoded.rules.entry(key).or_default();
        add_quad_to_rule(rule, quad, strict)?;
    }

    debug!(
        rules = decoded.rules.len(),
        other = decoded.other_quads.len(),
        "decoded statements"
    );
    Ok(decoded)
}

fn is_authorization_type(quad: &Quad) -> bool {
    quad.predicate == predicates::TYPE && quad.object.as_iri() == Some(types::AUTHORIZATION)
}

fn add_quad_to_rule(rule: &mut AclRule, quad: Quad, strict: bool) -> Result<()> {
    let value = quad.object.value();

    match quad.predicate.as_str() {
        predicates::TYPE if is_authorization_type(&quad) => {}
        predicates::MODE => {
            let permission: Permission = value.parse()?;
            rule.permissions = std::mem::take(&mut rule.permissions).add(permission);
        }
        predicates::AGENT => {
            rule.agents = std::mem::take(&mut rule.agents).add_web_id(value);
        }
        predicates::AGENT_GROUP => {
            rule.agents = std::mem::take(&mut rule.agents).add_group(value);
        }
        predicates::AGENT_CLASS => {
            let agents = std::mem::take(&mut rule.agents);
            rule.agents = match value {
                agent_classes::PUBLIC => agents.add_public(),
                agent_classes::AUTHENTICATED => agents.add_authenticated(),
                other => return Err(CodecError::UnrecognizedAgentClass(other.to_string())),
            };
        }
        predicates::ACCESS_TO => rule.access_to = Some(value.to_string()),
        predicates::DEFAULT => rule.default = Some(value.to_string()),
        predicates::DEFAULT_FOR_NEW => {
            rule.default_for_new = Some(value.to_string());
            rule.default = Some(value.to_string());
        }
        unknown if strict && unknown.starts_with(ACL) => {
            return Err(CodecError::UnrecognizedPredicate(unknown.to_string()));
        }
        _ => rule.other_quads.push(quad),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wac_core::vocab::{modes, FOAF};
    use wac_core::{AgentSet, PermissionSet, Term};

    const ACL_URL: &str = "https://pod.example/docs/.acl";
    const FILE_URL: &str = "https://pod.example/docs/";

    fn rule_subject() -> Term {
        Term::iri(format!("{ACL_URL}#owner"))
    }

    fn statement(predicate: &str, object: Term) -> Quad {
        Quad::new(rule_subject(), predicate, object)
    }

    fn typed_rule(mut quads: Vec<Quad>) -> Vec<Quad> {
        quads.insert(0, statement(predicates::TYPE, Term::iri(types::AUTHORIZATION)));
        quads
    }

    #[test]
    fn test_decodes_every_acl_predicate() {
        let quads = typed_rule(vec![
            statement(predicates::AGENT, Term::iri("https://pod.example/profile/card#me")),
            statement(predicates::AGENT_GROUP, Term::iri("https://pod.example/groups#team")),
            statement(predicates::AGENT_CLASS, Term::iri(agent_classes::PUBLIC)),
            statement(predicates::AGENT_CLASS, Term::iri(agent_classes::AUTHENTICATED)),
            statement(predicates::ACCESS_TO, Term::iri(FILE_URL)),
            statement(predicates::MODE, Term::iri(modes::READ)),
            statement(predicates::MODE, Term::iri(modes::APPEND)),
        ]);

        let decoded = decode(quads, true).unwrap();
        let rule = &decoded.rules[&format!("{ACL_URL}#owner")];

        assert_eq!(
            rule.permissions,
            PermissionSet::from_iter([Permission::Read, Permission::Append])
        );
        assert_eq!(
            rule.agents,
            AgentSet::from("https://pod.example/profile/card#me")
                .add_group("https://pod.example/groups#team")
                .add_public()
                .add_authenticated()
        );
        assert_eq!(rule.access_to.as_deref(), Some(FILE_URL));
        assert!(rule.other_quads.is_empty());
        assert!(decoded.other_quads.is_empty());
    }

    #[test]
    fn test_default_for_new_sets_both_fields() {
        let decoded = decode(
            typed_rule(vec![statement(predicates::DEFAULT_FOR_NEW, Term::iri(FILE_URL))]),
            false,
        )
        .unwrap();
        let rule = &decoded.rules[0];
        assert_eq!(rule.default.as_deref(), Some(FILE_URL));
        assert_eq!(rule.default_for_new.as_deref(), Some(FILE_URL));
    }

    #[test]
    fn test_untyped_subjects_are_foreign() {
        let name = Quad::new(
            Term::iri(format!("{ACL_URL}#me")),
            format!("{FOAF}givenName"),
            Term::literal("Jane"),
        );
        let mode = Quad::new(Term::iri(format!("{ACL_URL}#orphan")), predicates::MODE, Term::iri(modes::READ));

        let decoded = decode(vec![name.clone(), mode.clone()], true).unwrap();

        assert!(decoded.rules.is_empty());
        assert_eq!(decoded.other_quads, vec![name, mode]);
    }

    #[test]
    fn test_type_may_follow_other_statements() {
        let decoded = decode(
            vec![
                statement(predicates::MODE, Term::iri(modes::WRITE)),
                statement(predicates::TYPE, Term::iri(types::AUTHORIZATION)),
            ],
            false,
        )
        .unwrap();
        assert!(decoded.rules[0].permissions.has(Permission::Write));
    }

    #[test]
    fn test_keeps_foreign_statements_on_rules() {
        let name = statement(&format!("{FOAF}name"), Term::literal("Jane Doe"));
        let extra_type = statement(predicates::TYPE, Term::iri("https://vocab.example/Special"));
        let decoded = decode(typed_rule(vec![name.clone(), extra_type.clone()]), false).unwrap();

        assert_eq!(decoded.rules[0].other_quads, vec![name, extra_type]);
    }

    #[test]
    fn test_unknown_agent_class_fails() {
        let quads = typed_rule(vec![statement(
            predicates::AGENT_CLASS,
            Term::iri("https://vocab.example/Robot"),
        )]);
        assert_eq!(
            decode(quads, false).unwrap_err(),
            CodecError::UnrecognizedAgentClass("https://vocab.example/Robot".to_string())
        );
    }

    #[test]
    fn test_unknown_mode_fails() {
        let quads = typed_rule(vec![statement(predicates::MODE, Term::iri(format!("{ACL}Delete")))]);
        assert!(matches!(decode(quads, false), Err(CodecError::Core(_))));
    }

    #[test]
    fn test_unknown_acl_predicate_depends_on_strictness() {
        let origin = statement(&format!("{ACL}origin"), Term::iri("https://app.example"));
        let quads = typed_rule(vec![origin.clone()]);

        assert_eq!(
            decode(quads.clone(), true).unwrap_err(),
            CodecError::UnrecognizedPredicate(format!("{ACL}origin"))
        );
        assert_eq!(decode(quads, false).unwrap().rules[0].other_quads, vec![origin]);
    }

    #[test]
    fn test_blank_node_rules_are_keyed_by_label() {
        let subject = Term::blank("b0");
        let quads = vec![
            Quad::new(subject.clone(), predicates::TYPE, Term::iri(types::AUTHORIZATION)),
            Quad::new(subject, predicates::MODE, Term::iri(modes::READ)),
        ];
        let decoded = decode(quads, false).unwrap();
        assert!(decoded.rules.contains_key("_:b0"));
    }

    #[test]
    fn test_into_doc_fills_in_access_to() {
        let decoded = decode(
            typed_rule(vec![
                statement(predicates::AGENT, Term::iri("https://pod.example/profile/card#me")),
                statement(predicates::MODE, Term::iri(modes::READ)),
            ]),
            false,
        )
        .unwrap();

        let doc = decoded.into_doc(FILE_URL, false).unwrap();
        let rule = doc.get_rule_by_subject_id(&format!("{ACL_URL}#owner")).unwrap();
        assert_eq!(rule.access_to.as_deref(), Some(FILE_URL));
        assert!(doc.has_rule(
            &PermissionSet::from(Permission::Read),
            &AgentSet::from("https://pod.example/profile/card#me")
        ));
    }

    #[test]
    fn test_into_strict_doc_checks_scope() {
        let decoded = decode(
            typed_rule(vec![statement(predicates::ACCESS_TO, Term::iri("https://pod.example/other"))]),
            false,
        )
        .unwrap();
        assert!(matches!(
            decoded.into_doc(FILE_URL, true),
            Err(CodecError::Doc(wac_doc::DocError::InvalidScope { .. }))
        ));
    }
}
