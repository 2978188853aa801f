//! # WAC Codec
//!
//! The boundary between access-control documents and their serialized form.
//!
//! ## Overview
//!
//! Reading an ACL resource runs three stages:
//!
//! 1. [`turtle::parse`] reads Turtle text into [`Quad`](wac_core::Quad)s
//!    with `sophia_turtle`, resolving relative IRIs against the ACL
//!    resource's own IRI.
//! 2. [`decode`] groups the statements by subject and turns every
//!    `acl:Authorization` subject into an [`AclRule`](wac_core::AclRule).
//! 3. [`Decoded::into_doc`] stores the rules in an [`AclDoc`](wac_doc::AclDoc).
//!
//! Writing runs [`encode`] and [`turtle::write`]. [`AclParser`] wires both
//! directions together for one file/ACL pair.
//!
//! ## Relativization
//!
//! On output, IRIs that share an origin with the ACL resource are shortened
//! with [`make_relative_if_possible`]. IRIs the `url` crate would respell
//! (uppercase hosts, default ports, non-ASCII paths) are written as they are,
//! so the reader resolves every short form back to the same string.

pub mod decode;
pub mod encode;
pub mod error;
pub mod iri;
pub mod parser;
pub mod turtle;

pub use decode::{decode, Decoded};
pub use encode::{encode, subject_term};
pub use error::{CodecError, Result};
pub use iri::make_relative_if_possible;
pub use parser::{AclParser, ParserConfig};
