//! Process-wide shared builder instance.
//!
//! Hosts that want a single lazily constructed builder (the moral
//! equivalent of registering the builder in an application container)
//! can go through this module instead of owning an instance. The mutex
//! serializes individual accesses; there is no atomicity across
//! separate [`with`] calls, so multi-step mutation from several threads
//! needs coordination by the caller.

use std::sync::{LazyLock, Mutex, PoisonError};

use crate::builder::MailtoBuilder;

static SHARED: LazyLock<Mutex<MailtoBuilder>> =
    LazyLock::new(|| Mutex::new(MailtoBuilder::new()));

/// Runs a closure against the shared builder under its lock.
///
/// ```
/// use mailto_uri::shared;
///
/// shared::reset();
/// shared::with(|builder| builder.to("a@example.com").map(|_| ()))?;
/// assert_eq!(shared::compile_uri(), "mailto:a%40example.com?");
/// # Ok::<(), mailto_uri::Error>(())
/// ```
pub fn with<T>(f: impl FnOnce(&mut MailtoBuilder) -> T) -> T {
    let mut guard = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Compiles the shared builder's current state into a URI.
#[must_use]
pub fn compile_uri() -> String {
    with(|builder| builder.compile_uri())
}

/// Replaces the shared builder with an empty one.
pub fn reset() {
    with(|builder| *builder = MailtoBuilder::new());
}
