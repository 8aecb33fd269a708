//! Process-wide span carrying the command being run.

use tracing::{Span, span::Entered};

use crate::init::client_version;

/// Keeps the command span entered for the lifetime of the process.
pub struct CommandContextGuard {
    _guard: Entered<'static>,
}

impl CommandContextGuard {
    /// Enter a `command` span tagged with `name` and the client version.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let span: &'static Span = Box::leak(Box::new(tracing::info_span!(
            "command",
            name = %name,
            client_version = %client_version()
        )));
        Self {
            _guard: span.enter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_enters_command_span() {
        let guard = CommandContextGuard::new("version");
        tracing::info!("inside command span");
        drop(guard);
    }
}
