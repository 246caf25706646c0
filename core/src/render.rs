use crate::{Error, Result};
use std::fmt::Debug;

/// TemplateRender resolves embedded template variables in request fields.
///
/// Hosts that let users write placeholders inside the url or body supply an
/// implementation of this trait; the signer calls it on the url and on the
/// body before any canonicalization, so the signature always covers the
/// literal text that will be transmitted. Errors returned here are
/// propagated to the caller unchanged.
#[async_trait::async_trait]
pub trait TemplateRender: Debug + Send + Sync + 'static {
    /// Resolve all template variables in `text` into final literal text.
    async fn template_render(&self, text: &str) -> Result<String>;
}

/// NoopTemplateRender is a no-op implementation that always returns an error.
///
/// This is used when no template renderer is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTemplateRender;

#[async_trait::async_trait]
impl TemplateRender for NoopTemplateRender {
    async fn template_render(&self, _text: &str) -> Result<String> {
        Err(Error::unexpected(
            "template rendering not supported: no template renderer configured",
        ))
    }
}

/// LiteralTemplateRender returns the input unchanged.
///
/// For hosts whose requests carry no template variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralTemplateRender;

#[async_trait::async_trait]
impl TemplateRender for LiteralTemplateRender {
    async fn template_render(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
