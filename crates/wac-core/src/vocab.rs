//! Vocabulary IRIs used by ACL resources.
//!
//! A process-wide, read-only table. Nothing here is ever mutated.

/// The ACL namespace.
pub const ACL: &str = "http://www.w3.org/ns/auth/acl#";

/// The FOAF namespace.
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

/// The RDF syntax namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// The XML Schema datatype namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Default prefix table used when writing Turtle.
pub const PREFIXES: &[(&str, &str)] = &[("acl", ACL), ("foaf", FOAF)];

/// Predicate IRIs.
pub mod predicates {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const MODE: &str = "http://www.w3.org/ns/auth/acl#mode";
    pub const AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
    pub const AGENT_GROUP: &str = "http://www.w3.org/ns/auth/acl#agentGroup";
    pub const AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";
    pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";
    pub const DEFAULT: &str = "http://www.w3.org/ns/auth/acl#default";
    /// Legacy alias of [`DEFAULT`].
    pub const DEFAULT_FOR_NEW: &str = "http://www.w3.org/ns/auth/acl#defaultForNew";

    /// Every predicate the decoder interprets.
    pub const ALL: &[&str] = &[
        TYPE,
        MODE,
        AGENT,
        AGENT_GROUP,
        AGENT_CLASS,
        ACCESS_TO,
        DEFAULT,
        DEFAULT_FOR_NEW,
    ];
}

/// Values of `acl:agentClass`.
pub mod agent_classes {
    /// Everyone.
    pub const PUBLIC: &str = "http://xmlns.com/foaf/0.1/Agent";
    /// Anyone who has logged in.
    pub const AUTHENTICATED: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";
}

/// Class IRIs.
pub mod types {
    pub const AUTHORIZATION: &str = "http://www.w3.org/ns/auth/acl#Authorization";
}

/// Access mode IRIs.
pub mod modes {
    pub const READ: &str = "http://www.w3.org/ns/auth/acl#Read";
    pub const WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
    pub const APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
    pub const CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_live_in_their_namespaces() {
        for predicate in predicates::ALL {
            assert!(predicate.starts_with(ACL) || predicate.starts_with(RDF));
        }
        assert!(agent_classes::PUBLIC.starts_with(FOAF));
        assert!(types::AUTHORIZATION.starts_with(ACL));
    }
}
