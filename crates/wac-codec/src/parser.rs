//! Turtle to document and back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use wac_core::vocab::PREFIXES;
use wac_doc::AclDoc;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::Result;
use crate::iri::parse_base;
use crate::turtle::{self, WriteOptions};

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Produce strict documents and reject unknown ACL predicates.
    pub strict: bool,
    /// Write IRIs relative to the ACL resource where possible.
    pub relativize_iris: bool,
    /// Prefixes declared when writing Turtle.
    pub prefixes: IndexMap<String, String>,
    /// Group statements by subject on output. Statement order is not kept.
    pub pretty: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict: false,
            relativize_iris: true,
            prefixes: PREFIXES
                .iter()
                .map(|(prefix, namespace)| (prefix.to_string(), namespace.to_string()))
                .collect(),
            pretty: false,
        }
    }
}

/// Reads and writes the ACL resource that governs one file.
///
/// ```rust
/// use wac_codec::AclParser;
/// use wac_core::{AgentSet, Permission, PermissionSet};
/// use wac_doc::AddRuleOptions;
///
/// let parser = AclParser::new(
///     "https://pod.example/private/",
///     "https://pod.example/private/.acl",
/// )
/// .unwrap();
///
/// let mut doc = parser.turtle_to_acl_doc("").unwrap();
/// doc.add_rule(
///     PermissionSet::from(Permission::Read),
///     AgentSet::from("https://other.example/profile/card#me"),
///     AddRuleOptions::default(),
/// )
/// .unwrap();
///
/// let turtle = parser.acl_doc_to_turtle(&doc).unwrap();
/// assert_eq!(parser.turtle_to_acl_doc(&turtle).unwrap(), doc);
/// ```
#[derive(Debug, Clone)]
pub struct AclParser {
    /// The resource the ACL governs.
    file_url: String,
    /// The ACL resource itself; base for relative IRIs.
    acl_url: Url,
    config: ParserConfig,
}

impl AclParser {
    /// Create a parser with the default configuration.
    pub fn new(file_url: impl Into<String>, acl_url: &str) -> Result<Self> {
        Ok(Self {
            file_url: file_url.into(),
            acl_url: parse_base(acl_url)?,
            config: ParserConfig::default(),
        })
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    pub fn acl_url(&self) -> &str {
        self.acl_url.as_str()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse Turtle into a document governing the file.
    pub fn turtle_to_acl_doc(&self, turtle: &str) -> Result<AclDoc> {
        let quads = turtle::parse(turtle, &self.acl_url)?;
        let doc = decode(quads, self.config.strict)?.into_doc(&self.file_url, self.config.strict)?;
        debug!(acl_url = %self.acl_url, rules = doc.len(), "parsed acl document");
        Ok(doc)
    }

    /// Write a document as Turtle.
    ///
    /// Rules without effect are left out. Fails if a term cannot be
    /// written as Turtle.
    pub fn acl_doc_to_turtle(&self, doc: &AclDoc) -> Result<String> {
        let options = WriteOptions {
            prefixes: &self.config.prefixes,
            base: self.config.relativize_iris.then(|| self.acl_url.as_str()),
            pretty: self.config.pretty,
        };
        turtle::write(&encode(doc), options)
    }
}
