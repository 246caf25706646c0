//! Prefixed HMAC signature scheme.
//!
//! Signs a request's capture-once timestamp, method, canonical uri, and an
//! MD5 content digest of its json body into a single header-ready line:
//!
//! ```text
//! ACME-SHA256 Bearer tok Signature=1585068666450:6839a3e...
//! ```

mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::EnvCredentialProvider;
pub use provide_credential::StaticCredentialProvider;

mod scheme;
pub use scheme::Algorithm;
pub use scheme::DigestEncoding;

mod sign_request;
pub use sign_request::RequestSigner;
