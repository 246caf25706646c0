use crate::{Algorithm, Credential, DigestEncoding};
use apisign_core::hash;
use apisign_core::time::{format_unix_millis, now, DateTime};
use apisign_core::{Context, Error, Result, SignRequest, SigningRequest};
use async_trait::async_trait;
use log::debug;

/// RequestSigner that implements the prefixed HMAC bearer-signature scheme.
///
/// The signature covers a capture-once timestamp, the method, the canonical
/// uri, and a digest of the body when one is present, and is rendered as:
///
/// ```text
/// <identifier>-<ALGORITHM> [Bearer <bearer> ]Signature=<timestamp>:<digest>
/// ```
#[derive(Debug)]
pub struct RequestSigner {
    algorithm: Algorithm,
    encoding: DigestEncoding,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given algorithm and digest encoding.
    pub fn new(algorithm: Algorithm, encoding: DigestEncoding) -> Self {
        Self {
            algorithm,
            encoding,

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<String> {
        let now = self.time.unwrap_or_else(now);
        let timestamp = format_unix_millis(now);

        let Some(cred) = credential else {
            return Err(Error::credential_invalid("no credential loaded for signing"));
        };

        let canonical_uri = req.path_and_query();
        debug!("calculated canonical uri: {canonical_uri}");

        // 128 is specially chosen to avoid reallocation for most requests.
        let mut content = String::with_capacity(128);
        content.push_str(&timestamp);
        content.push_str(&req.method);
        content.push_str(&canonical_uri);
        if let Some(body) = req.body.as_deref() {
            content.push_str(&body_digest(body, self.encoding)?);
        }
        debug!("calculated canonical string: {content}");

        let digest = self
            .encoding
            .encode(&self.algorithm.hmac(cred.key.as_bytes(), content.as_bytes()));

        Ok(format_signature(
            &cred.identifier,
            self.algorithm,
            cred.bearer.as_deref(),
            &timestamp,
            &digest,
        ))
    }
}

/// Digest of the body content: canonical compact JSON hashed with MD5.
///
/// The body is reserialized before hashing so that whitespace and key-order
/// differences between what the client displays and what it transmits cannot
/// change the digest. MD5 is fixed here independent of the signature
/// algorithm; verifiers recompute the content hash with MD5 no matter which
/// outer algorithm the client picked. The encoded digest is stripped of
/// whitespace in case an encoding ever renders with line breaks.
fn body_digest(body: &str, encoding: DigestEncoding) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        Error::body_invalid(format!("request body is not valid json: {e}")).with_source(e)
    })?;
    let canonical = serde_json::to_string(&value)
        .map_err(|e| Error::unexpected("failed to reserialize request body").with_source(e))?;

    let mut digest = encoding.encode(&hash::md5(canonical.as_bytes()));
    digest.retain(|c| !c.is_whitespace());

    Ok(digest)
}

/// Assemble the signature line.
///
/// The identifier prefix and its trailing `-` are always present, so an
/// empty identifier yields a leading `-`. The bearer clause appears, with a
/// single trailing space, only for a non-empty bearer.
fn format_signature(
    identifier: &str,
    algorithm: Algorithm,
    bearer: Option<&str>,
    timestamp: &str,
    digest: &str,
) -> String {
    let algorithm = algorithm.as_str().to_uppercase();

    match bearer {
        Some(bearer) if !bearer.is_empty() => {
            format!("{identifier}-{algorithm} Bearer {bearer} Signature={timestamp}:{digest}")
        }
        _ => format!("{identifier}-{algorithm} Signature={timestamp}:{digest}"),
    }
}
