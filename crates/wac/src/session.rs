//! The session: load an ACL resource, edit its document, save it back.

use std::sync::Arc;

use tracing::{debug, info};

use wac_codec::AclParser;
use wac_doc::AclDoc;

use crate::config::WacConfig;
use crate::error::{Result, WacError};
use crate::source::AclSource;

/// Reads and writes ACL documents through an [`AclSource`].
///
/// Provides:
/// - Loading a resource into an [`AclDoc`]
/// - Saving a document as Turtle, minimized first when configured
/// - Load, edit and save in one call
pub struct AclSession<S: AclSource> {
    source: Arc<S>,
    config: WacConfig,
}

impl<S: AclSource> AclSession<S> {
    /// Create a session over a source.
    pub fn new(source: S, config: WacConfig) -> Self {
        Self {
            source: Arc::new(source),
            config,
        }
    }

    /// Get the source reference.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &WacConfig {
        &self.config
    }

    /// A parser for one file/ACL pair using the session's parser config.
    pub fn parser(&self, file_url: &str, acl_url: &str) -> Result<AclParser> {
        Ok(AclParser::new(file_url, acl_url)?.with_config(self.config.parser.clone()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load / Save
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the document stored at `acl_url` governing `file_url`.
    ///
    /// Fails with [`WacError::NotFound`] if the source has no such resource.
    pub async fn load(&self, acl_url: &str, file_url: &str) -> Result<AclDoc> {
        let turtle = self
            .source
            .get(acl_url)
            .await?
            .ok_or_else(|| WacError::NotFound(acl_url.to_string()))?;

        let doc = self.parser(file_url, acl_url)?.turtle_to_acl_doc(&turtle)?;
        debug!(acl_url, file_url, rules = doc.len(), "loaded acl document");
        Ok(doc)
    }

    /// Like [`load`](Self::load), but a missing resource yields an empty
    /// document.
    pub async fn load_or_new(&self, acl_url: &str, file_url: &str) -> Result<AclDoc> {
        match self.load(acl_url, file_url).await {
            Err(WacError::NotFound(_)) => {
                debug!(acl_url, "no acl resource, starting empty document");
                Ok(AclDoc::new(file_url)?.with_strict(self.config.parser.strict))
            }
            other => other,
        }
    }

    /// Write `doc` to `acl_url`.
    ///
    /// With `minimize_on_save` the document itself is minimized, so the caller
    /// sees the rules that were written.
    pub async fn save(&self, acl_url: &str, doc: &mut AclDoc) -> Result<()> {
        let removed = if self.config.minimize_on_save {
            doc.minimize_rules()
        } else {
            0
        };

        let turtle = self.parser(doc.access_to(), acl_url)?.acl_doc_to_turtle(doc)?;
        self.source.put(acl_url, turtle).await?;

        info!(acl_url, rules = doc.len(), removed, "saved acl document");
        Ok(())
    }

    /// Load (or start) the document at `acl_url`, apply `edit` and save it.
    ///
    /// Nothing is written if `edit` fails. Returns the saved document.
    pub async fn modify<F>(&self, acl_url: &str, file_url: &str, edit: F) -> Result<AclDoc>
    where
        F: FnOnce(&mut AclDoc) -> Result<()>,
    {
        let mut doc = self.load_or_new(acl_url, file_url).await?;
        edit(&mut doc)?;
        self.save(acl_url, &mut doc).await?;
        Ok(doc)
    }

    /// Remove the ACL resource at `acl_url`. Returns whether it existed.
    pub async fn delete(&self, acl_url: &str) -> Result<bool> {
        let existed = self.source.delete(acl_url).await?;
        info!(acl_url, existed, "deleted acl resource");
        Ok(existed)
    }
}
