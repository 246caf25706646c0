use crate::{Context, RequestDescriptor, Result};
use http::uri::PathAndQuery;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// AsciiSet for the canonical uri transform.
///
/// Escapes every byte except ASCII alphanumerics and
/// `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #`, so reserved uri structure
/// survives while unsafe and non-ASCII characters are escaped bytewise.
/// `%` itself is escaped, which means already-encoded input is encoded
/// again; verifiers rely on the transform being applied to the raw uri
/// exactly once.
static URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Signing context for request.
///
/// Holds the fully resolved request fields in the canonical form the signing
/// schemes consume. The url is canonicalized at build time: scheme,
/// authority, and fragment are discarded, and unsafe characters in the
/// surviving path and query are percent-encoded.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method, exactly as supplied.
    pub method: String,
    /// Canonical path. Empty when the url carries no path segment.
    pub path: String,
    /// Canonical query string without the leading `?`, when present.
    pub query: Option<String>,
    /// Resolved body text. `None` when the request has no body or the body
    /// resolved to the empty string.
    pub body: Option<String>,
}

impl SigningRequest {
    /// Build a signing context from a resolved url string.
    ///
    /// The url is truncated at the first `#` (RFC 3986 reserves everything
    /// after it for the fragment, which never takes part in signing), the
    /// scheme and authority are stripped, and the surviving path and query
    /// are percent-encoded with the conservative escape set before the
    /// structured path/query split. Encoding only the path and query keeps
    /// urls with raw spaces or non-ASCII characters signable while leaving
    /// hosts, including bracketed IPv6 literals, untouched. A url without a
    /// path segment, such as `https://example.com`, yields an empty path
    /// rather than an error.
    pub fn build(method: &str, url: &str, body: Option<String>) -> Result<Self> {
        let without_fragment = url.split_once('#').map_or(url, |(u, _)| u);
        let encoded =
            utf8_percent_encode(strip_authority(without_fragment), &URI_ENCODE_SET).to_string();

        let (path, query) = if encoded.is_empty() {
            (String::new(), None)
        } else {
            let paq: PathAndQuery = encoded.parse()?;
            match paq.as_str().split_once('?') {
                None => (paq.as_str().to_string(), None),
                Some((p, q)) => (p.to_string(), Some(q.to_string())),
            }
        };

        Ok(Self {
            method: method.to_string(),
            path,
            query,
            body: body.filter(|b| !b.is_empty()),
        })
    }

    /// Resolve a stored descriptor into a signing context.
    ///
    /// Renders the url, and the body when the descriptor carries non-empty
    /// body text, through the context's template renderer before
    /// canonicalization. Renderer failures propagate unchanged.
    pub async fn resolve(ctx: &Context, desc: RequestDescriptor) -> Result<Self> {
        let url = ctx.template_render(&desc.url).await?;

        let body = match desc.body.filter(|b| !b.is_empty()) {
            Some(text) => Some(ctx.template_render(&text).await?),
            None => None,
        };

        Self::build(&desc.method, &url, body)
    }

    /// The canonical uri: path joined with the query, the form that gets
    /// signed.
    ///
    /// ```shell
    /// path: "/v1/users", query: "active=true" => "/v1/users?active=true"
    /// ```
    pub fn path_and_query(&self) -> String {
        match &self.query {
            None => self.path.clone(),
            Some(q) => {
                let mut s = String::with_capacity(self.path.len() + q.len() + 1);
                s.push_str(&self.path);
                s.push('?');
                s.push_str(q);
                s
            }
        }
    }
}

/// Strip the scheme and authority, leaving the path and query.
///
/// Mirrors RFC 3986 appendix B decomposition: an optional scheme is a
/// leading run free of `:/?#` terminated by `:`, and an optional authority
/// follows `//` and runs to the next `/` or `?`. A url whose authority is
/// followed by nothing, such as `https://example.com`, carries no path at
/// all and maps to the empty string.
fn strip_authority(url: &str) -> &str {
    let rest = match url.find([':', '/', '?', '#']) {
        Some(idx) if url.as_bytes()[idx] == b':' => &url[idx + 1..],
        _ => url,
    };

    match rest.strip_prefix("//") {
        None => rest,
        Some(authority) => match authority.find(['/', '?']) {
            Some(idx) => &authority[idx..],
            None => "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LiteralTemplateRender, Result, TemplateRender};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_drops_authority_and_fragment() -> anyhow::Result<()> {
        let req = SigningRequest::build(
            "GET",
            "https://api.example.com/v1/users?active=true#frag",
            None,
        )?;

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/v1/users");
        assert_eq!(req.query.as_deref(), Some("active=true"));
        assert_eq!(req.path_and_query(), "/v1/users?active=true");

        Ok(())
    }

    #[test]
    fn test_build_without_path() -> anyhow::Result<()> {
        let req = SigningRequest::build("GET", "https://example.com", None)?;

        assert_eq!(req.path, "");
        assert_eq!(req.query, None);
        assert_eq!(req.path_and_query(), "");

        Ok(())
    }

    #[test]
    fn test_build_query_without_path() -> anyhow::Result<()> {
        let req = SigningRequest::build("GET", "https://example.com?active=true", None)?;

        assert_eq!(req.path, "");
        assert_eq!(req.path_and_query(), "?active=true");

        Ok(())
    }

    #[test]
    fn test_build_encodes_unsafe_characters() -> anyhow::Result<()> {
        let req = SigningRequest::build(
            "GET",
            "https://example.com/v1/caf\u{e9} menu?name=a b",
            None,
        )?;

        assert_eq!(req.path, "/v1/caf%C3%A9%20menu");
        assert_eq!(req.query.as_deref(), Some("name=a%20b"));

        Ok(())
    }

    #[test]
    fn test_build_reencodes_percent() -> anyhow::Result<()> {
        // The escape set treats `%` as unsafe, so pre-encoded input is
        // encoded again. Verifiers apply the same single-pass transform.
        let req = SigningRequest::build("GET", "https://example.com/a%20b", None)?;

        assert_eq!(req.path, "/a%2520b");

        Ok(())
    }

    #[test]
    fn test_build_preserves_reserved_characters() -> anyhow::Result<()> {
        let req = SigningRequest::build(
            "GET",
            "https://example.com/v1/items?filter=a,b;c&price=$10+tax",
            None,
        )?;

        assert_eq!(req.path_and_query(), "/v1/items?filter=a,b;c&price=$10+tax");

        Ok(())
    }

    #[test]
    fn test_build_preserves_method_case() -> anyhow::Result<()> {
        let req = SigningRequest::build("patch", "https://example.com/x", None)?;

        assert_eq!(req.method, "patch");

        Ok(())
    }

    #[test]
    fn test_build_filters_empty_body() -> anyhow::Result<()> {
        let req = SigningRequest::build("POST", "https://example.com/x", Some("".to_string()))?;

        assert_eq!(req.body, None);

        Ok(())
    }

    #[test]
    fn test_build_ipv6_host() -> anyhow::Result<()> {
        let req = SigningRequest::build("GET", "https://[::1]:8080/v1/users?active=true", None)?;

        assert_eq!(req.path, "/v1/users");
        assert_eq!(req.query.as_deref(), Some("active=true"));

        Ok(())
    }

    #[test]
    fn test_build_path_only_url() -> anyhow::Result<()> {
        // No scheme and no authority; `://` inside the query must not be
        // mistaken for one.
        let req = SigningRequest::build("GET", "/redirect?to=https://example.com", None)?;

        assert_eq!(req.path, "/redirect");
        assert_eq!(req.query.as_deref(), Some("to=https://example.com"));

        Ok(())
    }

    /// Renderer that rewrites `{{host}}` so tests can observe that
    /// resolution ran before canonicalization.
    #[derive(Debug)]
    struct HostRender;

    #[async_trait::async_trait]
    impl TemplateRender for HostRender {
        async fn template_render(&self, text: &str) -> Result<String> {
            Ok(text.replace("{{host}}", "api.example.com"))
        }
    }

    #[tokio::test]
    async fn test_resolve_renders_url_and_body() -> anyhow::Result<()> {
        let ctx = Context::new().with_template_render(HostRender);
        let desc = RequestDescriptor::new("PUT", "https://{{host}}/v1/users?active=true")
            .with_body(r#"{"host":"{{host}}"}"#);

        let req = SigningRequest::resolve(&ctx, desc).await?;

        assert_eq!(req.path, "/v1/users");
        assert_eq!(req.query.as_deref(), Some("active=true"));
        assert_eq!(req.body.as_deref(), Some(r#"{"host":"api.example.com"}"#));

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_skips_render_without_body() -> anyhow::Result<()> {
        // LiteralTemplateRender passes the url through; a missing body must
        // not reach the renderer at all.
        let ctx = Context::new().with_template_render(LiteralTemplateRender);
        let desc = RequestDescriptor::new("GET", "https://example.com/v1/users");

        let req = SigningRequest::resolve(&ctx, desc).await?;

        assert_eq!(req.body, None);

        Ok(())
    }
}
