use crate::env::{Env, NoopEnv};
use crate::render::{NoopTemplateRender, TemplateRender};
use crate::store::{NoopRequestFetch, RequestDescriptor, RequestFetch};
use crate::Result;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the host collaborators for request signing.
///
/// ## Important
///
/// apisign provides NO default implementations. Users MAY configure the
/// components they need. Any unconfigured component uses a no-op
/// implementation that returns errors or empty values when called.
///
/// ## Example
///
/// ```
/// use apisign_core::{Context, LiteralTemplateRender, OsEnv};
///
/// let ctx = Context::new()
///     .with_template_render(LiteralTemplateRender)
///     .with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    render: Arc<dyn TemplateRender>,
    store: Arc<dyn RequestFetch>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("render", &self.render)
            .field("store", &self.store)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    ///
    /// Use the `with_*` methods to configure the components you need.
    pub fn new() -> Self {
        Self {
            render: Arc::new(NoopTemplateRender),
            store: Arc::new(NoopRequestFetch),
            env: Arc::new(NoopEnv),
        }
    }

    /// Replace the template renderer implementation.
    pub fn with_template_render(mut self, render: impl TemplateRender) -> Self {
        self.render = Arc::new(render);
        self
    }

    /// Replace the request store implementation.
    pub fn with_request_fetch(mut self, store: impl RequestFetch) -> Self {
        self.store = Arc::new(store);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Resolve template variables in `text` into final literal text.
    #[inline]
    pub async fn template_render(&self, text: &str) -> Result<String> {
        self.render.template_render(text).await
    }

    /// Fetch the request descriptor for the given id.
    #[inline]
    pub async fn request_fetch(&self, id: &str) -> Result<RequestDescriptor> {
        self.store.request_fetch(id).await
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}
