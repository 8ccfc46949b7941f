//! The mailto URI builder.

use std::fmt;

use crate::address;
use crate::encode::percent_encode;
use crate::error::Result;
use crate::recipients::Recipients;

/// The three recipient groups of a mailto URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientGroup {
    /// Primary recipients, carried in the URI path.
    To,
    /// Carbon-copy recipients, carried in the `cc` query parameter.
    Cc,
    /// Blind-carbon-copy recipients, carried in the `bcc` query parameter.
    Bcc,
}

impl RecipientGroup {
    /// Returns the query parameter key for this group.
    ///
    /// The `to` group has no key; it lives in the URI path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::To => "to",
            Self::Cc => "cc",
            Self::Bcc => "bcc",
        }
    }
}

/// Fluent builder for RFC 6068 `mailto:` URIs.
///
/// Accumulates recipients, subject, and body, then compiles them into a
/// percent-encoded URI safe for direct use in an `href` attribute
/// (ampersands between query parameters are emitted as `&amp;`).
///
/// ```
/// use mailto_uri::MailtoBuilder;
///
/// let mut builder = MailtoBuilder::new();
/// builder
///     .to("a@example.com")?
///     .cc("b@example.com")?
///     .subject("Hi there")
///     .body("Hello, world!");
///
/// assert_eq!(
///     builder.compile_uri(),
///     "mailto:a%40example.com?cc=b%40example.com&amp;subject=Hi%20there&amp;body=Hello%2C%20world%21"
/// );
/// # Ok::<(), mailto_uri::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailtoBuilder {
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    subject: String,
    body: String,
}

impl MailtoBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds recipients to the `to` group.
    ///
    /// Accepts a single address, a comma-separated string (pieces are
    /// trimmed), or a sequence of addresses. The whole batch is
    /// validated before any of it is appended, so a failing call leaves
    /// the builder untouched. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecipient`](crate::Error::InvalidRecipient)
    /// if any candidate fails validation.
    pub fn to(&mut self, recipients: impl Into<Recipients>) -> Result<&mut Self> {
        self.append(RecipientGroup::To, recipients.into())
    }

    /// Adds recipients to the `cc` group.
    ///
    /// Same input forms and batch validation as [`Self::to`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecipient`](crate::Error::InvalidRecipient)
    /// if any candidate fails validation.
    pub fn cc(&mut self, recipients: impl Into<Recipients>) -> Result<&mut Self> {
        self.append(RecipientGroup::Cc, recipients.into())
    }

    /// Adds recipients to the `bcc` group.
    ///
    /// Same input forms and batch validation as [`Self::to`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecipient`](crate::Error::InvalidRecipient)
    /// if any candidate fails validation.
    pub fn bcc(&mut self, recipients: impl Into<Recipients>) -> Result<&mut Self> {
        self.append(RecipientGroup::Bcc, recipients.into())
    }

    /// Sets the subject, replacing any prior value. Not validated.
    pub fn subject(&mut self, text: impl Into<String>) -> &mut Self {
        self.subject = text.into();
        self
    }

    /// Sets the body, replacing any prior value. Not validated.
    pub fn body(&mut self, text: impl Into<String>) -> &mut Self {
        self.body = text.into();
        self
    }

    /// Returns the addresses stored in a group, in insertion order.
    #[must_use]
    pub fn recipients(&self, group: RecipientGroup) -> &[String] {
        match group {
            RecipientGroup::To => &self.to,
            RecipientGroup::Cc => &self.cc,
            RecipientGroup::Bcc => &self.bcc,
        }
    }

    /// Returns true when no recipients, subject, or body have been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to.is_empty()
            && self.cc.is_empty()
            && self.bcc.is_empty()
            && self.subject.is_empty()
            && self.body.is_empty()
    }

    /// Compiles the accumulated state into a `mailto:` URI.
    ///
    /// The result is safe to drop into an `href` attribute without
    /// further escaping: query parameters are joined with `&amp;` and
    /// everything else is percent-encoded per RFC 3986.
    ///
    /// Compilation reads the builder without consuming or clearing it;
    /// repeated calls yield identical strings. The `?` separator is
    /// always present, even with an empty query string.
    #[must_use]
    pub fn compile_uri(&self) -> String {
        let uri = format!(
            "mailto:{}?{}",
            self.compile_primary_recipients(),
            self.compile_query_string()
        );
        tracing::trace!(len = uri.len(), "compiled mailto URI");
        uri
    }

    /// Joins the `to` group with commas and encodes the joined string
    /// as one opaque unit, so the joining commas become `%2C`.
    fn compile_primary_recipients(&self) -> String {
        percent_encode(&self.to.join(","))
    }

    /// Assembles the query string.
    ///
    /// Parameter order is fixed (`cc`, `bcc`, `subject`, `body`)
    /// regardless of call order; empty values are omitted entirely.
    fn compile_query_string(&self) -> String {
        let mut parameters: Vec<(&str, String)> = Vec::new();

        if !self.cc.is_empty() {
            parameters.push((RecipientGroup::Cc.as_str(), self.cc.join(",")));
        }

        if !self.bcc.is_empty() {
            parameters.push((RecipientGroup::Bcc.as_str(), self.bcc.join(",")));
        }

        if !self.subject.is_empty() {
            parameters.push(("subject", self.subject.clone()));
        }

        if !self.body.is_empty() {
            parameters.push(("body", self.body.clone()));
        }

        parameters
            .iter()
            .map(|(key, value)| format!("{key}={}", percent_encode(value)))
            .collect::<Vec<_>>()
            .join("&amp;")
    }

    /// Validates the full batch, then appends it to the group.
    fn append(&mut self, group: RecipientGroup, recipients: Recipients) -> Result<&mut Self> {
        for candidate in recipients.candidates() {
            if let Err(err) = address::validate(candidate) {
                tracing::debug!(group = group.as_str(), rejected = %candidate, "recipient batch rejected");
                return Err(err);
            }
        }

        let target = match group {
            RecipientGroup::To => &mut self.to,
            RecipientGroup::Cc => &mut self.cc,
            RecipientGroup::Bcc => &mut self.bcc,
        };
        target.extend(recipients.into_vec());

        Ok(self)
    }
}

impl fmt::Display for MailtoBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compile_uri())
    }
}
