//! Builds a mailto link and prints it as an HTML anchor.
//!
//! Run with: `cargo run --example href_link`

use mailto_uri::{MailtoBuilder, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .init();

    let mut builder = MailtoBuilder::new();
    builder
        .to("support@example.com, sales@example.com")?
        .bcc("archive@example.com")?
        .subject("Question about my order")
        .body("Hi,\n\nWhere is my package?\n");

    println!(r#"<a href="{builder}">Contact us</a>"#);

    Ok(())
}
