use apisign_core::utils::Redact;
use apisign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the shared secret and its presentation labels.
#[derive(Default, Clone)]
pub struct Credential {
    /// Shared secret keying the HMAC. The scheme permits an empty key.
    pub key: String,
    /// Prefix label placed before the algorithm name in the output. May be
    /// empty, in which case the output starts with `-`.
    pub identifier: String,
    /// Optional bearer token carried verbatim in the output.
    pub bearer: Option<String>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key", &Redact::from(&self.key))
            .field("identifier", &self.identifier)
            .field("bearer", &Redact::from(&self.bearer))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        // Empty keys and identifiers are legal inputs to the scheme, so any
        // loaded credential stays usable indefinitely.
        true
    }
}
