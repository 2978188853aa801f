//! Turtle reading and writing.
//!
//! Parsing and serialization are done by `sophia_turtle`. This module only
//! converts between sophia's terms and [`Term`], so nothing past the codec
//! sees RDF library types.
//!
//! Every term is validated before it is written: an IRI that is not a valid
//! IRI reference, a blank node label or a language tag that Turtle cannot
//! express fails with [`CodecError::InvalidIri`] or
//! [`CodecError::InvalidTerm`] instead of producing unreadable output.

use std::borrow::Borrow;

use indexmap::IndexMap;
use sophia_api::parser::TripleParser;
use sophia_api::prefix::Prefix;
use sophia_api::serializer::{Stringifier, TripleSerializer};
use sophia_api::source::{StreamError, TripleSource};
use sophia_api::term::{BnodeId, LanguageTag, SimpleTerm, Term as RdfTerm, TermKind};
use sophia_api::triple::Triple;
use sophia_iri::{Iri, IriRef};
use sophia_turtle::parser::turtle::TurtleParser;
use sophia_turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};
use url::Url;

use wac_core::vocab::XSD;
use wac_core::{Quad, Term};

use crate::error::{CodecError, Result};
use crate::iri::make_relative_if_possible;

/// Read Turtle text into statements, resolving relative IRIs against `base`.
pub fn parse(text: &str, base: &Url) -> Result<Vec<Quad>> {
    let base = Iri::new(base.as_str().to_string())
        .map_err(|_| CodecError::InvalidIri(base.to_string()))?;
    let parser = TurtleParser { base: Some(base) };

    let mut quads = Vec::new();
    parser
        .parse_str(text)
        .try_for_each_triple(|triple| {
            quads.push(Quad::new(
                from_rdf(triple.s())?,
                from_rdf(triple.p())?.value(),
                from_rdf(triple.o())?,
            ));
            Ok::<_, CodecError>(())
        })
        .map_err(|err| match err {
            StreamError::SourceError(err) => CodecError::Syntax(err.to_string()),
            StreamError::SinkError(err) => err,
        })?;

    Ok(quads)
}

/// Options for [`write`].
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions<'a> {
    /// Prefixes declared in the output.
    pub prefixes: &'a IndexMap<String, String>,
    /// Shorten IRIs relative to this IRI where possible.
    pub base: Option<&'a str>,
    /// Group statements by subject and abbreviate IRIs with `prefixes`.
    /// Statement order is not kept.
    pub pretty: bool,
}

/// Write statements as Turtle.
///
/// Without `pretty`, statements are written in the order given.
pub fn write(quads: &[Quad], options: WriteOptions<'_>) -> Result<String> {
    let triples = quads
        .iter()
        .map(|quad| {
            Ok([
                to_rdf(&quad.subject, options.base)?,
                SimpleTerm::Iri(checked_iri(&quad.predicate)?),
                to_rdf(&quad.object, options.base)?,
            ])
        })
        .collect::<Result<Vec<[SimpleTerm<'static>; 3]>>>()?;

    let prefix_map = options
        .prefixes
        .iter()
        .map(|(prefix, namespace)| {
            let prefix = Prefix::new(prefix.clone().into_boxed_str())
                .map_err(|_| CodecError::InvalidTerm(format!("prefix {prefix}")))?;
            let namespace = Iri::new(namespace.clone().into_boxed_str())
                .map_err(|_| CodecError::InvalidIri(namespace.clone()))?;
            Ok((prefix, namespace))
        })
        .collect::<Result<Vec<_>>>()?;

    let config = TurtleConfig::new()
        .with_own_prefix_map(prefix_map)
        .with_pretty(options.pretty);
    let mut stringifier = TurtleSerializer::new_stringifier_with_config(config);
    stringifier
        .serialize_graph(&triples)
        .map_err(|err| CodecError::Serialize(err.to_string()))?;

    Ok(stringifier.as_str().to_string())
}

fn from_rdf<T: RdfTerm>(term: T) -> Result<Term> {
    let converted = match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::iri(iri.as_str())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::blank(id.as_str())),
        TermKind::Literal => term.lexical_form().map(|value| {
            let language = term.language_tag().map(|tag| tag.as_str().to_string());
            let datatype = match &language {
                Some(_) => None,
                None => term
                    .datatype()
                    .map(|datatype| datatype.as_str().to_string())
                    .filter(|datatype| *datatype != xsd_string()),
            };
            Term::Literal {
                value: value.to_string(),
                datatype,
                language,
            }
        }),
        _ => None,
    };

    converted.ok_or_else(|| CodecError::Syntax(format!("unsupported term: {:?}", term.kind())))
}

fn to_rdf(term: &Term, base: Option<&str>) -> Result<SimpleTerm<'static>> {
    Ok(match term {
        Term::Iri(iri) => {
            let written = match base {
                Some(base) => make_relative_if_possible(base, iri),
                None => iri.clone(),
            };
            SimpleTerm::Iri(checked_iri(&written)?)
        }
        Term::BlankNode(label) => SimpleTerm::BlankNode(
            BnodeId::new(label.clone().into())
                .map_err(|_| CodecError::InvalidTerm(format!("_:{label}")))?,
        ),
        Term::Literal {
            value,
            language: Some(language),
            ..
        } => SimpleTerm::LiteralLanguage(
            value.clone().into(),
            LanguageTag::new(language.clone().into())
                .map_err(|_| CodecError::InvalidTerm(format!("@{language}")))?,
        ),
        Term::Literal {
            value, datatype, ..
        } => {
            let datatype = datatype.clone().unwrap_or_else(xsd_string);
            SimpleTerm::LiteralDatatype(value.clone().into(), checked_iri(&datatype)?)
        }
    })
}

fn checked_iri<T: Borrow<str> + From<String>>(iri: &str) -> Result<IriRef<T>> {
    IriRef::new(T::from(iri.to_string())).map_err(|_| CodecError::InvalidIri(iri.to_string()))
}

fn xsd_string() -> String {
    format!("{XSD}string")
}
