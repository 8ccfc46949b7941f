//! # mailto-uri
//!
//! Fluent builder for RFC 6068 `mailto:` URIs.
//!
//! ## Features
//!
//! - **Recipient groups**: to, cc, and bcc lists with email address validation
//! - **Flexible input**: single addresses, comma-separated strings, or sequences
//! - **Strict encoding**: RFC 3986 percent-encoding, spaces as `%20` never `+`
//! - **href-safe output**: query parameters joined with `&amp;`, ready for
//!   direct use in an HTML `href` attribute
//!
//! ## Quick Start
//!
//! ```
//! use mailto_uri::MailtoBuilder;
//!
//! let mut builder = MailtoBuilder::new();
//! builder
//!     .to("a@example.com")?
//!     .cc("b@example.com")?
//!     .subject("Hi there")
//!     .body("Hello, world!");
//!
//! assert_eq!(
//!     builder.compile_uri(),
//!     "mailto:a%40example.com?cc=b%40example.com&amp;subject=Hi%20there&amp;body=Hello%2C%20world%21"
//! );
//! # Ok::<(), mailto_uri::Error>(())
//! ```
//!
//! ## Validation
//!
//! Recipient batches are validated in full before any address is
//! appended, so a failing call leaves the builder exactly as it was:
//!
//! ```
//! use mailto_uri::{Error, MailtoBuilder};
//!
//! let mut builder = MailtoBuilder::new();
//! let err = builder.to("not-an-email").unwrap_err();
//! assert_eq!(err, Error::InvalidRecipient("not-an-email".to_string()));
//! assert!(builder.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod address;
mod builder;
pub mod encode;
mod error;
mod recipients;
pub mod shared;

pub use builder::{MailtoBuilder, RecipientGroup};
pub use error::{Error, Result};
pub use recipients::Recipients;
