//! Shared application context, error types and the admin gate.

use std::fmt::{self, Display, Formatter};

use domain_trust_client::models::{MetadataFilter, user::role};
use domain_trust_client::{Client, ClientError};
use tokio_util::sync::CancellationToken;

use crate::output::OutputOptions;
use crate::profile::Profile;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(error: ClientError) -> Self {
        let operation = error.operation().unwrap_or("request");
        Self::Failure(anyhow::Error::new(error).context(operation))
    }
}

/// Application context passed to command handlers.
#[derive(Clone, Debug)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) profile: Profile,
    pub(crate) output: OutputOptions,
    /// Paging and creation window from the global flags.
    pub(crate) metadata: MetadataFilter,
    pub(crate) cancel: CancellationToken,
}

impl AppContext {
    /// Reject the command when the profile records a non-admin role.
    ///
    /// An empty role is let through; the service enforces its own checks.
    pub(crate) fn require_admin(&self) -> CliResult<()> {
        let current = self.profile.user_role.as_str();
        if current.is_empty() || current == role::ADMIN {
            Ok(())
        } else {
            Err(CliError::validation("only admins may do this"))
        }
    }

    pub(crate) fn is_admin(&self) -> bool {
        self.profile.user_role == role::ADMIN
    }
}
