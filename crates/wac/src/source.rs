//! AclSource trait: where ACL resources are read from and written to.
//!
//! A pod server, an HTTP client or a test map can all serve as a source. The
//! session only ever exchanges whole Turtle documents with it.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;

/// Async access to ACL resources by IRI.
#[async_trait]
pub trait AclSource: Send + Sync {
    /// Fetch the Turtle of an ACL resource, or `None` if it does not exist.
    async fn get(&self, acl_url: &str) -> Result<Option<String>>;

    /// Create or replace an ACL resource.
    async fn put(&self, acl_url: &str, turtle: String) -> Result<()>;

    /// Remove an ACL resource. Returns whether it existed.
    async fn delete(&self, acl_url: &str) -> Result<bool>;
}

/// In-memory source.
///
/// All resources are lost when the source is dropped.
#[derive(Debug, Default)]
pub struct MemoryAclSource {
    resources: RwLock<HashMap<String, String>>,
}

impl MemoryAclSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a resource before the source is shared.
    #[must_use]
    pub fn with_resource(mut self, acl_url: impl Into<String>, turtle: impl Into<String>) -> Self {
        self.resources.get_mut().insert(acl_url.into(), turtle.into());
        self
    }

    /// Number of stored resources.
    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }
}

#[async_trait]
impl AclSource for MemoryAclSource {
    async fn get(&self, acl_url: &str) -> Result<Option<String>> {
        Ok(self.resources.read().await.get(acl_url).cloned())
    }

    async fn put(&self, acl_url: &str, turtle: String) -> Result<()> {
        self.resources.write().await.insert(acl_url.to_string(), turtle);
        Ok(())
    }

    async fn delete(&self, acl_url: &str) -> Result<bool> {
        Ok(self.resources.write().await.remove(acl_url).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACL_URL: &str = "https://pod.example/docs/.acl";

    #[tokio::test]
    async fn test_put_then_get() {
        let source = MemoryAclSource::new();
        assert!(source.get(ACL_URL).await.unwrap().is_none());

        source.put(ACL_URL, "# empty".to_string()).await.unwrap();
        assert_eq!(source.get(ACL_URL).await.unwrap().as_deref(), Some("# empty"));
        assert_eq!(source.len().await, 1);
    }

    #[tokio::test]
    async fn test_put_replaces() {
        let source = MemoryAclSource::new().with_resource(ACL_URL, "first");
        source.put(ACL_URL, "second".to_string()).await.unwrap();

        assert_eq!(source.get(ACL_URL).await.unwrap().as_deref(), Some("second"));
        assert_eq!(source.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let source = MemoryAclSource::new().with_resource(ACL_URL, "");

        assert!(source.delete(ACL_URL).await.unwrap());
        assert!(!source.delete(ACL_URL).await.unwrap());
        assert!(source.is_empty().await);
    }
}
