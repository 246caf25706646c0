use crate::Credential;
use apisign_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;

/// StaticCredentialProvider provides a fixed signing credential.
///
/// This provider is used when the caller holds the secret key and its
/// labels directly and wants to sign without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    key: String,
    identifier: String,
    bearer: Option<String>,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with the secret key and the
    /// identifier prefix. Either may be empty.
    pub fn new(key: &str, identifier: &str) -> Self {
        Self {
            key: key.to_string(),
            identifier: identifier.to_string(),
            bearer: None,
        }
    }

    /// Set the bearer token.
    pub fn with_bearer(mut self, bearer: &str) -> Self {
        self.bearer = Some(bearer.to_string());
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            key: self.key.clone(),
            identifier: self.identifier.clone(),
            bearer: self.bearer.clone(),
        }))
    }
}
