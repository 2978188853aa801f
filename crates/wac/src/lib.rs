//! # WAC
//!
//! Web Access Control documents for Solid-style pods: who may do what with
//! a resource, and how to change that without losing anything else.
//!
//! ## Overview
//!
//! - **Rules**: an [`AclRule`] grants a [`PermissionSet`] to an [`AgentSet`]
//!   on a resource, optionally inherited by its children
//! - **Documents**: an [`AclDoc`] stores the rules of one ACL resource and
//!   answers coverage queries over their union
//! - **Turtle**: an [`AclParser`] reads and writes the ACL resource itself
//! - **Sessions**: an [`AclSession`] loads, edits and saves documents through
//!   an [`AclSource`]
//!
//! ## Key Concepts
//!
//! - **Coverage**: a query holds when the stored rules together grant it.
//! - **Subtraction**: revoking part of a rule splits it into what remains.
//! - **Minimization**: rules that grant nothing are never written.
//!
//! ## Usage
//!
//! ```rust
//! use wac::{AclSession, AgentSet, MemoryAclSource, Permission, PermissionSet, WacConfig};
//! use wac::AddRuleOptions;
//!
//! async fn example() -> wac::Result<()> {
//!     let session = AclSession::new(MemoryAclSource::new(), WacConfig::default());
//!     let alice = AgentSet::from("https://alice.example/profile/card#me");
//!
//!     let doc = session
//!         .modify("https://pod.example/notes/.acl", "https://pod.example/notes/", |doc| {
//!             doc.add_rule(PermissionSet::all(), alice.clone(), AddRuleOptions::default())?;
//!             doc.delete_rule(&PermissionSet::from(Permission::Control), &alice);
//!             Ok(())
//!         })
//!         .await?;
//!
//!     assert!(doc.has_rule(&PermissionSet::from(Permission::Write), &alice));
//!     assert!(!doc.has_rule(&PermissionSet::from(Permission::Control), &alice));
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `wac::core` - Permissions, agents, statements and the rule algebra
//! - `wac::doc` - The rule store
//! - `wac::codec` - Turtle and statement boundary

pub mod config;
pub mod error;
pub mod session;
pub mod source;

// Re-export component crates
pub use wac_codec as codec;
pub use wac_core as core;
pub use wac_doc as doc;

// Re-export main types for convenience
pub use config::WacConfig;
pub use error::{Result, WacError};
pub use session::AclSession;
pub use source::{AclSource, MemoryAclSource};

pub use wac_codec::{AclParser, ParserConfig};
pub use wac_core::{AclRule, AgentSet, Permission, PermissionSet, Quad, Term};
pub use wac_doc::{AclDoc, AddRuleOptions};
