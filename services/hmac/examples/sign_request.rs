use anyhow::Result;
use apisign_core::{
    Context, LiteralTemplateRender, OsEnv, ProvideCredential, RequestDescriptor, Signer,
    StaticRequestFetch,
};
use apisign_hmac::{
    Algorithm, DigestEncoding, EnvCredentialProvider, RequestSigner, StaticCredentialProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    // A small in-memory request store standing in for the host application.
    let store = StaticRequestFetch::new()
        .with_request(
            "list-users",
            RequestDescriptor::new("GET", "https://api.example.com/v1/users?active=true"),
        )
        .with_request(
            "create-user",
            RequestDescriptor::new("POST", "https://api.example.com/v1/users")
                .with_body(r#"{"name": "ferris", "admin": false}"#),
        );

    let ctx = Context::new()
        .with_request_fetch(store)
        .with_template_render(LiteralTemplateRender)
        .with_env(OsEnv);

    // Prefer credentials from APISIGN_KEY / APISIGN_IDENTIFIER /
    // APISIGN_BEARER, falling back to demo values.
    let loader = EnvCredentialProvider::new();
    let signer = if loader.provide_credential(&ctx).await?.is_none() {
        println!("No credentials found in environment, using demo credentials");
        Signer::new(
            ctx,
            StaticCredentialProvider::new("demo-secret-key", "ACME").with_bearer("demo-token"),
            RequestSigner::new(Algorithm::Sha256, DigestEncoding::Hex),
        )
    } else {
        Signer::new(
            ctx,
            loader,
            RequestSigner::new(Algorithm::Sha256, DigestEncoding::Hex),
        )
    };

    // Sign a stored GET request.
    let signature = signer.sign_by_id("list-users").await?;
    println!("list-users:  {signature}");

    // Sign a stored POST request; the body digest is part of the signature.
    let signature = signer.sign_by_id("create-user").await?;
    println!("create-user: {signature}");

    Ok(())
}
