//! Golden ACL samples.
//!
//! Each sample pairs an ACL resource, as found in the WAC specification or in
//! the defaults a pod server writes, with the document it must decode into.
//! Subject ids are the absolute IRIs of the ACL resource's fragments, because
//! those are not fragments of the governed file and are therefore not
//! shortened.

use wac_core::{AclRule, AgentSet, Permission, PermissionSet, Quad, Term};
use wac_doc::{AclDoc, AddRuleOptions, Result};

/// A golden sample.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Human-readable name for the sample.
    pub description: &'static str,
    /// The ACL resource's Turtle.
    pub turtle: &'static str,
    /// IRI of the ACL resource.
    pub acl_url: &'static str,
    /// IRI of the resource the ACL governs.
    pub file_url: &'static str,
    build: fn(&Sample) -> Result<AclDoc>,
}

impl Sample {
    /// The document the Turtle must decode into.
    pub fn expected_doc(&self) -> Result<AclDoc> {
        (self.build)(self)
    }

    /// Subject id of the fragment `#name` of the ACL resource.
    pub fn subject(&self, name: &str) -> String {
        format!("{}#{name}", self.acl_url)
    }
}

fn read_write_control() -> PermissionSet {
    PermissionSet::from_iter([Permission::Read, Permission::Write, Permission::Control])
}

/// Get all golden samples.
pub fn all_samples() -> Vec<Sample> {
    vec![
        Sample {
            description: "WAC spec: example document",
            turtle: r#"
# Contents of https://alice.databox.me/docs/file1.acl
@prefix  acl:  <http://www.w3.org/ns/auth/acl#>  .

<#authorization1>
    a             acl:Authorization;
    acl:agent     <https://alice.databox.me/profile/card#me>;  # Alice's WebID
    acl:accessTo  <https://alice.databox.me/docs/file1>;
    acl:mode      acl:Read,
                  acl:Write,
                  acl:Control."#,
            acl_url: "https://alice.databox.me/docs/file1.acl",
            file_url: "https://alice.databox.me/docs/file1",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.add_rule(
                    read_write_control(),
                    AgentSet::from("https://alice.databox.me/profile/card#me"),
                    AddRuleOptions::subject_id(sample.subject("authorization1")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "WAC spec: groups",
            turtle: r#"
# Contents of https://alice.databox.me/docs/shared-file1.acl
@prefix  acl:  <http://www.w3.org/ns/auth/acl#>.

# Individual authorization - Alice has Read/Write/Control access
<#authorization1>
    a             acl:Authorization;
    acl:accessTo  <https://alice.example.com/docs/shared-file1>;
    acl:mode      acl:Read,
                  acl:Write,
                  acl:Control;
    acl:agent     <https://alice.example.com/profile/card#me>.

# Group authorization, giving Read/Write access to two groups, which are
# specified in the 'work-groups' document.
<#authorization2>
    a               acl:Authorization;
    acl:accessTo    <https://alice.example.com/docs/shared-file1>;
    acl:mode        acl:Read,
                    acl:Write;
    acl:agentGroup  <https://alice.example.com/work-groups#Accounting>;
    acl:agentGroup  <https://alice.example.com/work-groups#Management>."#,
            acl_url: "https://alice.databox.me/docs/shared-file1.acl",
            file_url: "https://alice.example.com/docs/shared-file1",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.add_rule(
                    read_write_control(),
                    AgentSet::from("https://alice.example.com/profile/card#me"),
                    AddRuleOptions::subject_id(sample.subject("authorization1")),
                )?;
                doc.add_rule(
                    PermissionSet::from_iter([Permission::Read, Permission::Write]),
                    AgentSet::from_groups([
                        "https://alice.example.com/work-groups#Accounting",
                        "https://alice.example.com/work-groups#Management",
                    ]),
                    AddRuleOptions::subject_id(sample.subject("authorization2")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "WAC spec: public access",
            turtle: r#"
@prefix   acl:  <http://www.w3.org/ns/auth/acl#>.
@prefix  foaf:  <http://xmlns.com/foaf/0.1/>.

<#authorization2>
    a               acl:Authorization;
    acl:agentClass  foaf:Agent;                               # everyone
    acl:mode        acl:Read;                                 # has Read-only access
    acl:accessTo    <https://alice.databox.me/profile/card>.  # to the public profile"#,
            acl_url: "https://alice.databox.me/profile/card.acl",
            file_url: "https://alice.databox.me/profile/card",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.add_rule(
                    PermissionSet::from(Permission::Read),
                    AgentSet::public(),
                    AddRuleOptions::subject_id(sample.subject("authorization2")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "WAC spec: authenticated agents",
            turtle: r#"
    @prefix   acl:  <http://www.w3.org/ns/auth/acl#>.
    @prefix  foaf:  <http://xmlns.com/foaf/0.1/>.

    <#authorization2>
        a               acl:Authorization;
        acl:agentClass  acl:AuthenticatedAgent;                   # anyone logged in
        acl:mode        acl:Read;                                 # has Read-only access
        acl:accessTo    <https://alice.databox.me/profile/card>.  # to the public profile"#,
            acl_url: "https://alice.databox.me/profile/card.acl",
            file_url: "https://alice.databox.me/profile/card",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.add_rule(
                    PermissionSet::from(Permission::Read),
                    AgentSet::authenticated(),
                    AddRuleOptions::subject_id(sample.subject("authorization2")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "WAC spec: inherited authorization",
            turtle: r#"
    # Contents of https://alice.databox.me/docs/.acl
    @prefix  acl:  <http://www.w3.org/ns/auth/acl#>.

    <#authorization1>
        a                  acl:Authorization;

        # These statements specify access rules for the /docs/ container itself:
        acl:agent          <https://alice.databox.me/profile/card#me>;
        acl:accessTo       <https://alice.databox.me/docs/>;
        acl:mode           acl:Read,
                           acl:Write,
                           acl:Control;

        # default says: this authorization (the statements above)
        #   will also be inherited by any resource within that container
        #   that doesn't have its own ACL.
        acl:default  <https://alice.databox.me/docs/>."#,
            acl_url: "https://alice.databox.me/docs/.acl",
            file_url: "https://alice.databox.me/docs/",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.add_default_rule(
                    read_write_control(),
                    AgentSet::from("https://alice.databox.me/profile/card#me"),
                    AddRuleOptions::subject_id(sample.subject("authorization1")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "Pod server: /public/.acl",
            turtle: r#"
# ACL resource for the public folder
@prefix acl: <http://www.w3.org/ns/auth/acl#>.
@prefix foaf: <http://xmlns.com/foaf/0.1/>.

# The owner has all permissions
<#owner>
    a acl:Authorization;
    acl:agent <https://example.solid.community/profile/card#me>;
    acl:accessTo <./>;
    acl:defaultForNew <./>;
    acl:mode acl:Read, acl:Write, acl:Control.

# The public has read permissions
<#public>
    a acl:Authorization;
    acl:agentClass foaf:Agent;
    acl:accessTo <./>;
    acl:defaultForNew <./>;
    acl:mode acl:Read."#,
            acl_url: "https://example.solid.community/public/.acl",
            file_url: "https://example.solid.community/public/",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.insert_rule(
                    legacy_default_rule(
                        sample,
                        read_write_control(),
                        AgentSet::from("https://example.solid.community/profile/card#me"),
                    ),
                    AddRuleOptions::subject_id(sample.subject("owner")),
                )?;
                doc.insert_rule(
                    legacy_default_rule(sample, PermissionSet::from(Permission::Read), AgentSet::public()),
                    AddRuleOptions::subject_id(sample.subject("public")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "Pod server: /private/.acl",
            turtle: r#"
    # ACL resource for the private folder
    @prefix acl: <http://www.w3.org/ns/auth/acl#>.

    # The owner has all permissions
    <#owner>
        a acl:Authorization;
        acl:agent <https://example.solid.community/profile/card#me>;
        acl:accessTo <./>;
        acl:defaultForNew <./>;
        acl:mode acl:Read, acl:Write, acl:Control."#,
            acl_url: "https://example.solid.community/private/.acl",
            file_url: "https://example.solid.community/private/",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.insert_rule(
                    legacy_default_rule(
                        sample,
                        read_write_control(),
                        AgentSet::from("https://example.solid.community/profile/card#me"),
                    ),
                    AddRuleOptions::subject_id(sample.subject("owner")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "Pod server: root /.acl",
            turtle: r#"
    # Root ACL resource for the user account
    @prefix acl: <http://www.w3.org/ns/auth/acl#>.

    <#owner>
        a acl:Authorization;

        acl:agent <https://example.solid.community/profile/card#me> ;

        # Optional owner email, to be used for account recovery:
        acl:agent <mailto:user@example.org>;

        # Set the access to the root storage folder itself
        acl:accessTo </>;

        # All resources will inherit this authorization, by default
        acl:defaultForNew </>;

        # The owner has all of the access modes allowed
        acl:mode
            acl:Read, acl:Write, acl:Control.

    # Data is private by default; no other agents get access unless specifically
    # authorized in other .acls"#,
            acl_url: "https://example.solid.community/.acl",
            file_url: "https://example.solid.community/",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                doc.insert_rule(
                    legacy_default_rule(
                        sample,
                        read_write_control(),
                        AgentSet::from_web_ids([
                            "https://example.solid.community/profile/card#me",
                            "mailto:user@example.org",
                        ]),
                    ),
                    AddRuleOptions::subject_id(sample.subject("owner")),
                )?;
                Ok(doc)
            },
        },
        Sample {
            description: "Foreign statements are kept",
            turtle: r#"
@prefix   acl:  <http://www.w3.org/ns/auth/acl#>.
@prefix  foaf:  <http://xmlns.com/foaf/0.1/>.

<#authorization2>
    a               acl:Authorization;
    foaf:name       "Jane Doe";
    acl:agentClass  foaf:Agent;                               # everyone
    acl:mode        acl:Read;                                 # has Read-only access
    acl:accessTo    <https://alice.databox.me/profile/card>.  # to the public profile

<#me>
    foaf:givenName  "Jane"."#,
            acl_url: "https://alice.databox.me/profile/card.acl",
            file_url: "https://alice.databox.me/profile/card",
            build: |sample| {
                let mut doc = AclDoc::new(sample.file_url)?;
                let name = Quad::new(
                    Term::iri(sample.subject("authorization2")),
                    "http://xmlns.com/foaf/0.1/name",
                    Term::literal("Jane Doe"),
                );
                let given_name = Quad::new(
                    Term::iri(sample.subject("me")),
                    "http://xmlns.com/foaf/0.1/givenName",
                    Term::literal("Jane"),
                );
                doc.insert_rule(
                    AclRule::new(PermissionSet::from(Permission::Read), AgentSet::public())
                        .with_other_quads([name]),
                    AddRuleOptions::subject_id(sample.subject("authorization2")),
                )?;
                doc.add_other([given_name]);
                Ok(doc)
            },
        },
    ]
}

/// A rule inherited through the legacy `defaultForNew` predicate, which sets
/// both scope fields.
fn legacy_default_rule(sample: &Sample, permissions: PermissionSet, agents: AgentSet) -> AclRule {
    AclRule::new(permissions, agents)
        .with_default(sample.file_url)
        .with_default_for_new(sample.file_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_builds() {
        for sample in all_samples() {
            let doc = sample.expected_doc().unwrap();
            assert_eq!(doc.access_to(), sample.file_url);
            assert!(!doc.is_empty(), "{}", sample.description);
        }
    }

    #[test]
    fn test_subject_ids_stay_absolute() {
        for sample in all_samples() {
            let doc = sample.expected_doc().unwrap();
            for (subject_id, _) in doc.rules() {
                assert!(subject_id.starts_with(sample.acl_url), "{subject_id}");
            }
        }
    }
}
