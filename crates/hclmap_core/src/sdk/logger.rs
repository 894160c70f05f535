use std::fmt;

/// Logging collaborator injected into the mapper and resource metadata.
///
/// Purely observational: nothing the engine returns depends on it.
pub trait Logger: Send + Sync {
	/// Per-field diagnostics emitted during recursion.
	fn trace(&self, message: fmt::Arguments<'_>);
	/// Informational message from resource functions.
	fn info(&self, message: fmt::Arguments<'_>);
	/// Warning from resource functions.
	fn warn(&self, message: fmt::Arguments<'_>);
}

/// Forwards to `tracing` events under the `hclmap` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
	fn trace(&self, message: fmt::Arguments<'_>) {
		tracing::trace!(target: "hclmap", "{message}");
	}

	fn info(&self, message: fmt::Arguments<'_>) {
		tracing::info!(target: "hclmap", "{message}");
	}

	fn warn(&self, message: fmt::Arguments<'_>) {
		tracing::warn!(target: "hclmap", "{message}");
	}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
	fn trace(&self, _message: fmt::Arguments<'_>) {}

	fn info(&self, _message: fmt::Arguments<'_>) {}

	fn warn(&self, _message: fmt::Arguments<'_>) {}
}
