use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential, SigningRequest};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Sign a resolved request, returning the formatted signature string.
    pub async fn sign(&self, req: &SigningRequest) -> Result<String> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref())
            .await
    }

    /// Fetch a stored request by id, resolve its template variables, and
    /// sign it.
    ///
    /// Store and renderer failures propagate unchanged.
    pub async fn sign_by_id(&self, id: &str) -> Result<String> {
        let desc = self.ctx.request_fetch(id).await?;
        let req = SigningRequest::resolve(&self.ctx, desc).await?;

        self.sign(&req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind, RequestDescriptor, StaticRequestFetch};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct Token(String);

    impl SigningCredential for Token {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    /// Counts loads so tests can observe credential caching.
    #[derive(Debug, Default)]
    struct CountingProvider {
        loads: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for CountingProvider {
        type Credential = Token;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Some(Token("tok".to_string())))
        }
    }

    #[derive(Debug)]
    struct EchoBuilder;

    #[async_trait::async_trait]
    impl SignRequest for EchoBuilder {
        type Credential = Token;

        async fn sign_request(
            &self,
            _: &Context,
            req: &SigningRequest,
            credential: Option<&Self::Credential>,
        ) -> Result<String> {
            let token = credential
                .map(|c| c.0.as_str())
                .ok_or_else(|| Error::credential_invalid("no credential loaded"))?;

            Ok(format!("{} {} {}", token, req.method, req.path_and_query()))
        }
    }

    #[tokio::test]
    async fn test_sign_loads_credential_once() -> anyhow::Result<()> {
        let loads = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingProvider {
                loads: loads.clone(),
            },
            EchoBuilder,
        );

        let req = SigningRequest::build("GET", "https://example.com/a?b=c", None)?;
        assert_eq!(signer.sign(&req).await?, "tok GET /a?b=c");
        assert_eq!(signer.sign(&req).await?, "tok GET /a?b=c");
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_by_id_propagates_store_errors() {
        let ctx = Context::new().with_request_fetch(StaticRequestFetch::new());
        let signer = Signer::new(ctx, CountingProvider::default(), EchoBuilder);

        let err = signer.sign_by_id("missing").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[tokio::test]
    async fn test_sign_by_id_resolves_descriptor() -> anyhow::Result<()> {
        let store = StaticRequestFetch::new().with_request(
            "list-users",
            RequestDescriptor::new("GET", "https://api.example.com/v1/users?active=true#frag"),
        );
        let ctx = Context::new()
            .with_request_fetch(store)
            .with_template_render(crate::LiteralTemplateRender);
        let signer = Signer::new(ctx, CountingProvider::default(), EchoBuilder);

        assert_eq!(
            signer.sign_by_id("list-users").await?,
            "tok GET /v1/users?active=true"
        );

        Ok(())
    }
}
