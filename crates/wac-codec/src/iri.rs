//! Base IRIs and relativization.
//!
//! Absolute IRIs are kept exactly as written. An IRI is only shortened when
//! the `url` crate would not change its spelling, so reading the short form
//! back yields the same string.

use url::{Position, Url};

use crate::error::{CodecError, Result};

/// Parse an absolute IRI to use as a base.
pub fn parse_base(iri: &str) -> Result<Url> {
    Url::parse(iri).map_err(|e| CodecError::InvalidIri(format!("{iri}: {e}")))
}

/// Shorten `iri` relative to `base` when both share an origin.
///
/// - different origin: `iri` unchanged
/// - not in canonical form (case, default port, non-ASCII): `iri` unchanged
/// - inside the folder of `base`: `./rest`
/// - anywhere else on the origin: the root-relative path
///
/// ```rust
/// use wac_codec::make_relative_if_possible;
///
/// let base = "https://example.org/foo/";
/// assert_eq!(make_relative_if_possible(base, "https://example.org/foo/file.ext"), "./file.ext");
/// assert_eq!(make_relative_if_possible(base, "https://example.org/other/"), "/other/");
/// assert_eq!(make_relative_if_possible(base, "https://other.org/foo/"), "https://other.org/foo/");
/// ```
pub fn make_relative_if_possible(base: &str, iri: &str) -> String {
    let (Ok(base_url), Ok(url)) = (Url::parse(base), Url::parse(iri)) else {
        return iri.to_string();
    };
    if url.as_str() != iri || base_url.as_str() != base {
        return iri.to_string();
    }
    if url.cannot_be_a_base() || !url.origin().is_tuple() || base_url.origin() != url.origin() {
        return iri.to_string();
    }

    let base_path = base_url.path();
    let folder = match base_path.rfind('/') {
        Some(end) => &base_path[..=end],
        None => "/",
    };

    let rest = &url[Position::BeforePath..];
    match rest.strip_prefix(folder) {
        Some(inside) => format!("./{inside}"),
        // would read back as a network-path reference
        None if rest.starts_with("//") => iri.to_string(),
        None => rest.to_string(),
    }
}
