use crate::{Context, Result, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is still valid for signing.
    ///
    /// Signers reload the credential through [`ProvideCredential`] when this
    /// returns false.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential.
///
/// Schemes may require different credentials to sign the request; for this
/// workspace's HMAC scheme it is a shared secret plus its prefix label and
/// optional bearer token.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load the credential from the current context.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer; the
    /// signer then signs without a credential or fails, at the scheme's
    /// discretion.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to produce the signature.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Compute the signature string for the given resolved request.
    ///
    /// The whole pipeline runs here: timestamp capture, canonicalization,
    /// digesting, and output formatting. The result is returned to the
    /// caller as-is; placing it into a header is the caller's business.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<String>;
}
