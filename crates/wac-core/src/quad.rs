//! Statements that are carried through the algebra without interpretation.
//!
//! Anything attached to a rule's subject that the ACL vocabulary does not
//! describe, and any top-level statement that is not part of a rule, is kept
//! as a [`Quad`] so that it survives a decode/encode round trip.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node label, without the `_:` prefix.
    BlankNode(String),
    /// A literal with an optional datatype or language tag.
    Literal {
        value: String,
        datatype: Option<String>,
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(label.into())
    }

    /// A plain string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// The lexical value: the IRI, the blank node label, or the literal text.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::BlankNode(label) => label,
            Term::Literal { value, .. } => value,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Key used to group statements by subject.
    ///
    /// IRIs map to themselves, blank nodes to `_:label`.
    pub fn subject_key(&self) -> String {
        match self {
            Term::BlankNode(label) => format!("_:{label}"),
            other => other.value().to_string(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal {
                value,
                datatype,
                language,
            } => {
                write!(f, "{value:?}")?;
                if let Some(language) = language {
                    write!(f, "@{language}")?;
                } else if let Some(datatype) = datatype {
                    write!(f, "^^<{datatype}>")?;
                }
                Ok(())
            }
        }
    }
}

/// A statement in the default graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quad {
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    pub object: Term,
}

impl Quad {
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_key() {
        assert_eq!(Term::iri("https://a.example/#x").subject_key(), "https://a.example/#x");
        assert_eq!(Term::blank("b0").subject_key(), "_:b0");
    }

    #[test]
    fn test_display() {
        let quad = Quad::new(
            Term::iri("https://a.example/#me"),
            "http://xmlns.com/foaf/0.1/name",
            Term::literal("Jane"),
        );
        assert_eq!(
            quad.to_string(),
            "<https://a.example/#me> <http://xmlns.com/foaf/0.1/name> \"Jane\" ."
        );
    }
}
