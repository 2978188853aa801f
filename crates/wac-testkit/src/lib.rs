//! # WAC Testkit
//!
//! Testing utilities for WAC documents.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden samples**: ACL resources from the WAC specification and common
//!   server defaults, each with the document it must parse into
//! - **Generators**: Proptest strategies for permissions, agents, rules and
//!   documents
//! - **Fixtures**: Small ready-made documents for scenario tests
//!
//! ## Golden Samples
//!
//! ```rust
//! use wac_codec::AclParser;
//! use wac_testkit::samples::all_samples;
//!
//! for sample in all_samples() {
//!     let parser = AclParser::new(sample.file_url, sample.acl_url).unwrap();
//!     let parsed = parser.turtle_to_acl_doc(sample.turtle).unwrap();
//!     assert_eq!(parsed, sample.expected_doc().unwrap(), "{}", sample.description);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use wac_core::AclRule;
//! use wac_testkit::generators::scoped_rule;
//!
//! proptest! {
//!     #[test]
//!     fn subtract_self_cancels(rule in scoped_rule()) {
//!         prop_assert!(AclRule::subtract(&rule, &rule.clone()).is_empty());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod samples;

pub use fixtures::{sibling_fixtures, DocFixture};
pub use samples::{all_samples, Sample};
