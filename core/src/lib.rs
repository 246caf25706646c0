//! Core components for signing API requests.
//!
//! This crate provides the foundational types and traits for the apisign
//! workspace. It defines the abstractions that let a signature scheme stay a
//! pure function while the host supplies everything environmental.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: a container holding the host collaborators for template
//!   rendering, request lookup, and environment access
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and signature computation ([`SignRequest`])
//! - **SigningRequest**: the resolved request decomposed into exactly the
//!   fields that take part in signing
//! - **Signer**: the orchestrator that coordinates credential loading,
//!   request resolution, and signature computation
//!
//! ## Example
//!
//! ```no_run
//! use apisign_core::{
//!     Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
//!     SigningRequest,
//! };
//! use async_trait::async_trait;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement a credential provider
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! // Implement a signature scheme
//! #[derive(Debug)]
//! struct MyScheme;
//!
//! #[async_trait]
//! impl SignRequest for MyScheme {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &SigningRequest,
//!         _credential: Option<&Self::Credential>,
//!     ) -> Result<String> {
//!         // Compute your signature here
//!         Ok(format!("signed {}", req.path_and_query()))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::default();
//! let signer = Signer::new(ctx, MyProvider, MyScheme);
//!
//! let req = SigningRequest::build("GET", "https://api.example.com/v1/users", None)?;
//! let signature = signer.sign(&req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`TemplateRender`]: resolves template variables in urls and bodies
//! - [`RequestFetch`]: looks up stored request descriptors by id
//! - [`Env`]: environment variable access
//! - [`ProvideCredential`]: loads credentials from various sources
//! - [`SignRequest`]: computes scheme-specific signatures
//! - [`SigningCredential`]: validates credentials for reuse
//!
//! ## Utilities
//!
//! - [`hash`]: cryptographic hashing utilities
//! - [`time`]: time manipulation utilities
//! - [`utils`]: general utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod render;
pub use render::{LiteralTemplateRender, NoopTemplateRender, TemplateRender};
mod store;
pub use store::{NoopRequestFetch, RequestDescriptor, RequestFetch, StaticRequestFetch};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
