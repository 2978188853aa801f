//! # WAC Core
//!
//! Pure primitives for Web Access Control documents: permissions, agents,
//! statements, and the rule algebra.
//!
//! This crate contains no I/O, no parsing, no storage. It is pure computation
//! over value types.
//!
//! ## Key Types
//!
//! - [`Permission`] / [`PermissionSet`] - Access modes (read, write, append, control)
//! - [`AgentSet`] - WebIDs, groups, and the public/authenticated agent classes
//! - [`AclRule`] - A grant of a permission set to an agent set over a scope
//! - [`Quad`] / [`Term`] - Foreign statements carried along for round-tripping
//!
//! ## Rule Algebra
//!
//! A rule is a rectangle in (permission × agent) space. [`AclRule::subtract`]
//! removes one rectangle from another and returns at most two rectangles
//! covering the remainder. Everything else in the workspace (coverage queries,
//! partial deletion) is built on top of it.
//!
//! ```rust
//! use wac_core::{AclRule, AgentSet, Permission, PermissionSet};
//!
//! let first = AclRule::new(
//!     PermissionSet::from_iter([Permission::Read, Permission::Write]),
//!     AgentSet::from_web_ids(["https://a.example/#me", "https://b.example/#me"]),
//! );
//! let second = AclRule::new(
//!     PermissionSet::from(Permission::Read),
//!     AgentSet::from_web_ids(["https://a.example/#me"]),
//! );
//!
//! // Rules without an accessTo have no effect; give both a scope first.
//! let first = first.with_access_to("https://pod.example/file");
//! let second = second.with_access_to("https://pod.example/file");
//!
//! let rest = AclRule::subtract(&first, &second);
//! assert_eq!(rest.len(), 2);
//! ```

pub mod agents;
pub mod error;
pub mod permission;
pub mod quad;
pub mod rule;
pub mod vocab;

pub use agents::AgentSet;
pub use error::{CoreError, Result};
pub use permission::{Permission, PermissionSet};
pub use quad::{Quad, Term};
pub use rule::AclRule;
