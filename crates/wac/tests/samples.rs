//! Golden sample tests.
//!
//! Every sample must:
//! - parse into its expected document
//! - survive a write/read cycle unchanged
//! - survive a save/load cycle through a session

use wac::{AclParser, AclSession, AgentSet, MemoryAclSource, Permission, PermissionSet, WacConfig};
use wac_testkit::{all_samples, DocFixture};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_samples_parse_to_expected_docs() {
    for sample in all_samples() {
        let parser = AclParser::new(sample.file_url, sample.acl_url).unwrap();
        let parsed = parser.turtle_to_acl_doc(sample.turtle).unwrap();

        assert_eq!(parsed, sample.expected_doc().unwrap(), "{}", sample.description);
    }
}

#[test]
fn test_samples_survive_writing() {
    for sample in all_samples() {
        let parser = AclParser::new(sample.file_url, sample.acl_url).unwrap();
        let doc = sample.expected_doc().unwrap();

        let turtle = parser.acl_doc_to_turtle(&doc).unwrap();
        let back = parser.turtle_to_acl_doc(&turtle).unwrap();

        assert_eq!(back, doc, "{}\n{turtle}", sample.description);
    }
}

#[tokio::test]
async fn test_samples_survive_a_session() {
    init_tracing();

    for sample in all_samples() {
        let source = MemoryAclSource::new().with_resource(sample.acl_url, sample.turtle);
        let session = AclSession::new(source, WacConfig::default());

        let mut doc = session.load(sample.acl_url, sample.file_url).await.unwrap();
        session.save(sample.acl_url, &mut doc).await.unwrap();
        let reloaded = session.load(sample.acl_url, sample.file_url).await.unwrap();

        assert_eq!(reloaded, sample.expected_doc().unwrap(), "{}", sample.description);
    }
}

#[tokio::test]
async fn test_sharing_and_revoking() {
    init_tracing();

    let fixture = DocFixture::new();
    let session = AclSession::new(MemoryAclSource::new(), WacConfig::default());
    let read_write = PermissionSet::from_iter([Permission::Read, Permission::Write]);

    session
        .modify(&fixture.acl_url, &fixture.file_url, |doc| {
            *doc = fixture.shared_doc();
            Ok(())
        })
        .await
        .unwrap();

    let doc = session
        .modify(&fixture.acl_url, &fixture.file_url, |doc| {
            doc.delete_agents(&fixture.bob());
            doc.delete_permissions(&PermissionSet::from(Permission::Control));
            Ok(())
        })
        .await
        .unwrap();

    assert!(doc.get_permissions_for(&fixture.bob()).is_empty());
    assert_eq!(doc.get_permissions_for(&fixture.alice()).intersection(&read_write), read_write);
    assert!(!doc.has_rule(&PermissionSet::from(Permission::Control), &fixture.alice()));
    assert!(doc.has_rule(&PermissionSet::from(Permission::Read), &AgentSet::public()));
    assert_eq!(session.load(&fixture.acl_url, &fixture.file_url).await.unwrap(), doc);
}
