use std::fmt;

use crate::sdk::{Logger, Registry, TracingLogger};

static TRACING: TracingLogger = TracingLogger;

/// Registry and logger pair that carries the encode and decode entry points.
#[derive(Clone, Copy)]
pub struct Mapper<'a> {
	registry: &'a Registry,
	logger: &'a dyn Logger,
}

impl<'a> Mapper<'a> {
	/// Create a mapper over an explicit registry and logger.
	pub fn new(registry: &'a Registry, logger: &'a dyn Logger) -> Self {
		Self { registry, logger }
	}

	/// Shape registry used for descriptor lookups.
	pub fn registry(&self) -> &'a Registry {
		self.registry
	}

	/// Injected logging collaborator.
	pub fn logger(&self) -> &'a dyn Logger {
		self.logger
	}
}

impl Default for Mapper<'static> {
	fn default() -> Self {
		Self::new(Registry::global(), &TRACING)
	}
}

impl fmt::Debug for Mapper<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Mapper").field("registry", &self.registry).finish_non_exhaustive()
	}
}
