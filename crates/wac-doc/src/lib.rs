//! # WAC Doc
//!
//! The rule store for a single access-control document.
//!
//! ## Overview
//!
//! An [`AclDoc`] maps subject identifiers to [`AclRule`](wac_core::AclRule)s
//! and keeps the top-level statements that are not rules. All queries and
//! deletions are expressed with the rule algebra from `wac-core`:
//!
//! - **Coverage**: [`AclDoc::has_rule`] succeeds when the union of stored rules
//!   grants the query, even if no single rule does.
//! - **Partial deletion**: [`AclDoc::delete_rule`] subtracts a grant from every
//!   stored rule, splitting rules where needed.
//! - **Minimization**: [`AclDoc::minimize_rules`] drops rules that grant nothing.
//!
//! ## Subject IDs
//!
//! Subject IDs are opaque keys. An ID of the form `<accessTo>#fragment` is
//! stored as `#fragment`, so both spellings address the same entry. IDs that
//! the document has to invent are derived from the rule's permissions, such as
//! `#ReadWrite` or `#ReadDefault1`.
//!
//! ## Usage
//!
//! ```rust
//! use wac_core::{AgentSet, Permission, PermissionSet};
//! use wac_doc::{AclDoc, AddRuleOptions};
//!
//! let mut doc = AclDoc::new("https://pod.example/file").unwrap();
//! doc.add_rule(
//!     PermissionSet::from_iter([Permission::Read, Permission::Write]),
//!     AgentSet::from_web_ids(["https://a.example/#me", "https://b.example/#me"]),
//!     AddRuleOptions::default(),
//! )
//! .unwrap();
//!
//! doc.delete_rule(&PermissionSet::from(Permission::Read), &AgentSet::from("https://a.example/#me"));
//!
//! assert!(doc.has_rule(&PermissionSet::from(Permission::Write), &AgentSet::from("https://a.example/#me")));
//! assert!(!doc.has_rule(&PermissionSet::from(Permission::Read), &AgentSet::from("https://a.example/#me")));
//! ```

pub mod doc;
pub mod error;
pub mod subject;

pub use doc::{AclDoc, AddRuleOptions};
pub use error::{DocError, Result};
pub use subject::{normalize_subject_id, synthesize_subject_id};
