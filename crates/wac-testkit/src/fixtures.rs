//! Test fixtures and helpers.
//!
//! Common setup code for scenario tests.

use wac_codec::AclParser;
use wac_core::{AgentSet, Permission, PermissionSet};
use wac_doc::{AclDoc, AddRuleOptions};

/// A pod resource with its ACL resource and a few known agents.
#[derive(Debug, Clone)]
pub struct DocFixture {
    pub file_url: String,
    pub acl_url: String,
}

impl DocFixture {
    /// Fixture for `https://pod.example/docs/file`.
    pub fn new() -> Self {
        Self::with_file_url("https://pod.example/docs/file")
    }

    /// Fixture for an arbitrary resource; its ACL lives at `<file_url>.acl`.
    pub fn with_file_url(file_url: impl Into<String>) -> Self {
        let file_url = file_url.into();
        let acl_url = format!("{file_url}.acl");
        Self { file_url, acl_url }
    }

    /// WebID of a named agent on its own origin.
    pub fn web_id(&self, name: &str) -> String {
        format!("https://{name}.example/profile/card#me")
    }

    /// The owner, `alice`.
    pub fn alice(&self) -> AgentSet {
        AgentSet::from(self.web_id("alice").as_str())
    }

    /// A collaborator, `bob`.
    pub fn bob(&self) -> AgentSet {
        AgentSet::from(self.web_id("bob").as_str())
    }

    /// A parser for this resource with the default configuration.
    pub fn parser(&self) -> AclParser {
        AclParser::new(self.file_url.as_str(), &self.acl_url).expect("fixture ACL url is absolute")
    }

    /// An empty lenient document.
    pub fn empty_doc(&self) -> AclDoc {
        AclDoc::new(self.file_url.as_str()).expect("fixture file url is not blank")
    }

    /// Alice has full control over the resource and its children.
    pub fn owner_doc(&self) -> AclDoc {
        let mut doc = self.empty_doc();
        doc.add_rule(PermissionSet::all(), self.alice(), AddRuleOptions::subject_id("#owner"))
            .expect("lenient document accepts rule");
        doc.add_default_rule(
            PermissionSet::all(),
            self.alice(),
            AddRuleOptions::subject_id("#ownerDefault"),
        )
        .expect("lenient document accepts rule");
        doc
    }

    /// [`owner_doc`](Self::owner_doc) plus Bob as a reader and writer and the
    /// public as readers.
    pub fn shared_doc(&self) -> AclDoc {
        let mut doc = self.owner_doc();
        doc.add_rule(
            PermissionSet::from_iter([Permission::Read, Permission::Write]),
            self.bob(),
            AddRuleOptions::subject_id("#bob"),
        )
        .expect("lenient document accepts rule");
        doc.add_rule(
            PermissionSet::from(Permission::Read),
            AgentSet::public(),
            AddRuleOptions::subject_id("#public"),
        )
        .expect("lenient document accepts rule");
        doc
    }
}

impl Default for DocFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create fixtures for `count` sibling resources in one folder.
pub fn sibling_fixtures(count: usize) -> Vec<DocFixture> {
    (0..count)
        .map(|i| DocFixture::with_file_url(format!("https://pod.example/docs/file{i}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_urls() {
        let fixture = DocFixture::new();
        assert_eq!(fixture.acl_url, "https://pod.example/docs/file.acl");
        assert_eq!(fixture.parser().file_url(), fixture.file_url);
    }

    #[test]
    fn test_owner_doc_grants_alice_everything() {
        let fixture = DocFixture::default();
        let doc = fixture.owner_doc();

        assert_eq!(doc.get_permissions_for(&fixture.alice()), PermissionSet::all());
        assert!(doc.has_default_rule(&PermissionSet::all(), &fixture.alice()));
        assert!(doc.get_permissions_for(&fixture.bob()).is_empty());
    }

    #[test]
    fn test_shared_doc() {
        let fixture = DocFixture::new();
        let doc = fixture.shared_doc();

        assert_eq!(doc.len(), 4);
        assert_eq!(
            doc.get_permissions_for(&fixture.bob()),
            PermissionSet::from_iter([Permission::Read, Permission::Write])
        );
        assert!(doc
            .get_agents_with(&PermissionSet::from(Permission::Read))
            .includes(&AgentSet::public().add_web_id(fixture.web_id("alice"))));
    }

    #[test]
    fn test_shared_doc_survives_turtle() {
        let fixture = DocFixture::new();
        let parser = fixture.parser();
        let doc = fixture.shared_doc();

        let turtle = parser.acl_doc_to_turtle(&doc).unwrap();
        assert_eq!(parser.turtle_to_acl_doc(&turtle).unwrap(), doc);
    }

    #[test]
    fn test_sibling_fixtures_are_distinct() {
        let fixtures = sibling_fixtures(3);
        assert_eq!(fixtures.len(), 3);
        assert_ne!(fixtures[0].acl_url, fixtures[1].acl_url);
    }
}
