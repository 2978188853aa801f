//! Rules to statements.

use tracing::debug;

use wac_core::vocab::{agent_classes, predicates, types};
use wac_core::{AclRule, Quad, Term};
use wac_doc::AclDoc;

/// Encode a document as statements.
///
/// Each rule that has an effect yields its type statement, then agents,
/// groups, agent classes, `accessTo`, `default`, `defaultForNew`, modes and
/// finally its foreign statements. The document's top-level foreign
/// statements come last. Rules without effect are skipped, so the output is
/// that of the minimized document.
pub fn encode(doc: &AclDoc) -> Vec<Quad> {
    let mut quads = Vec::new();
    let mut skipped = 0usize;

    for (subject_id, rule) in doc.rules() {
        if rule.has_no_effect() {
            skipped += 1;
            continue;
        }
        let subject = subject_term(doc.access_to(), subject_id);
        encode_rule(&mut quads, &subject, rule);
    }
    quads.extend(doc.other_quads().iter().cloned());

    debug!(statements = quads.len(), skipped, "encoded document");
    quads
}

/// The subject term for a stored subject id.
///
/// `#fragment` ids are fragments of the document's `access_to`, `_:label` ids
/// are blank nodes, anything else is an IRI as written.
pub fn subject_term(access_to: &str, subject_id: &str) -> Term {
    if let Some(label) = subject_id.strip_prefix("_:") {
        Term::blank(label)
    } else if subject_id.starts_with('#') {
        Term::iri(format!("{access_to}{subject_id}"))
    } else {
        Term::iri(subject_id)
    }
}

fn encode_rule(quads: &mut Vec<Quad>, subject: &Term, rule: &AclRule) {
    let mut push = |predicate: &str, object: Term| {
        quads.push(Quad::new(subject.clone(), predicate, object));
    };

    push(predicates::TYPE, Term::iri(types::AUTHORIZATION));

    for web_id in rule.agents.web_ids() {
        push(predicates::AGENT, Term::iri(web_id));
    }
    for group in rule.agents.groups() {
        push(predicates::AGENT_GROUP, Term::iri(group));
    }
    if rule.agents.has_public() {
        push(predicates::AGENT_CLASS, Term::iri(agent_classes::PUBLIC));
    }
    if rule.agents.has_authenticated() {
        push(predicates::AGENT_CLASS, Term::iri(agent_classes::AUTHENTICATED));
    }

    if let Some(access_to) = &rule.access_to {
        push(predicates::ACCESS_TO, Term::iri(access_to));
    }
    if let Some(default) = &rule.default {
        push(predicates::DEFAULT, Term::iri(default));
    }
    if let Some(default_for_new) = &rule.default_for_new {
        push(predicates::DEFAULT_FOR_NEW, Term::iri(default_for_new));
    }

    for permission in &rule.permissions {
        push(predicates::MODE, Term::iri(permission.iri()));
    }

    quads.extend(rule.other_quads.iter().cloned());
}
