use crate::constants::*;
use crate::Credential;
use apisign_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use log::debug;

/// EnvCredentialProvider loads the signing credential from environment
/// variables.
///
/// This provider looks for the following environment variables:
/// - `APISIGN_KEY`: the HMAC secret key
/// - `APISIGN_IDENTIFIER`: the prefix label (optional, defaults to empty)
/// - `APISIGN_BEARER`: the bearer token (optional)
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(key) = ctx.env_var(APISIGN_KEY) else {
            return Ok(None);
        };

        debug!("loaded signing credential from environment");
        Ok(Some(Credential {
            key,
            identifier: ctx.env_var(APISIGN_IDENTIFIER).unwrap_or_default(),
            bearer: ctx.env_var(APISIGN_BEARER),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apisign_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (APISIGN_KEY.to_string(), "test_key".to_string()),
            (APISIGN_IDENTIFIER.to_string(), "ACME".to_string()),
            (APISIGN_BEARER.to_string(), "test_token".to_string()),
        ]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.key, "test_key");
        assert_eq!(cred.identifier, "ACME");
        assert_eq!(cred.bearer, Some("test_token".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_key_only() -> anyhow::Result<()> {
        let envs = HashMap::from([(APISIGN_KEY.to_string(), "test_key".to_string())]);
        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.key, "test_key");
        assert_eq!(cred.identifier, "");
        assert!(cred.bearer.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_missing_key() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv::default());

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
