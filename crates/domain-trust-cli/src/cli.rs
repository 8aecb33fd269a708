//! Argument parsing, flag-to-filter conversions and command dispatch.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use domain_trust_client::models::{
    ApiKeyFilter, DomainFilter, InviteFilter, MetadataFilter, OrganizationFilter,
    OrganizationUpdate, UserFilter, UserUpdate,
};
use domain_trust_client::{CLIENT_VERSION, Client, ClientConfig, ContentType, DEFAULT_ENDPOINT_URL};
use domain_trust_telemetry::{CommandContextGuard, DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig};
use tokio_util::sync::CancellationToken;

use crate::client::{AppContext, CliError, CliResult};
use crate::commands::{api_keys, config, docs, domains, invites, login, organizations, users, version};
use crate::output::{OutputFormat, OutputOptions};
use crate::profile::{self, Profile, ProfileKey};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Parses CLI arguments, executes the requested command and reports the
/// outcome. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: LogFormat::from_pretty(cli.pretty_log),
        client_version: CLIENT_VERSION,
    };
    if let Err(err) = domain_trust_telemetry::init_logging(&logging) {
        eprintln!("error: unable to set up logging: {err}");
        return 1;
    }
    let _command = CommandContextGuard::new(cli.command.label());

    match execute(cli).await {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

async fn execute(cli: Cli) -> CliResult<()> {
    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());
    let (ctx, command) = cli.into_context(cancel)?;
    dispatch(command, &ctx).await
}

fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling in-flight requests");
            cancel.cancel();
        }
    });
}

pub(crate) async fn dispatch(command: Command, ctx: &AppContext) -> CliResult<()> {
    match command {
        Command::ApiKeys(command) => match command {
            ApiKeysCommand::Create(args) => api_keys::handle_create(ctx, args).await,
            ApiKeysCommand::Delete(args) => api_keys::handle_delete(ctx, &args.id).await,
            ApiKeysCommand::Find(args) => api_keys::handle_find(ctx, args).await,
            ApiKeysCommand::Get(args) => api_keys::handle_get(ctx, &args.id).await,
        },
        Command::Config(command) => match command {
            ConfigCommand::Get(args) => config::handle_get(ctx, args.key),
            ConfigCommand::Set(args) => config::handle_set(ctx, args.key, args.value),
            ConfigCommand::Show => config::handle_show(ctx),
        },
        Command::Docs => docs::handle_docs().await,
        Command::Domains(command) => match command {
            DomainsCommand::Create => domains::handle_create(ctx, io::stdin()).await,
            DomainsCommand::Find(args) => domains::handle_find(ctx, args).await,
        },
        Command::Invites(command) => {
            ctx.require_admin()?;
            match command {
                InvitesCommand::Create(args) => invites::handle_create(ctx, args).await,
                InvitesCommand::Delete(args) => invites::handle_delete(ctx, &args.id).await,
                InvitesCommand::Find(args) => invites::handle_find(ctx, args).await,
                InvitesCommand::Get(args) => invites::handle_get(ctx, &args.id).await,
            }
        }
        Command::Login(args) => login::handle_login(ctx, args).await,
        Command::Organizations(command) => match command {
            OrganizationsCommand::Create(args) => organizations::handle_create(ctx, args).await,
            OrganizationsCommand::Delete(args) => {
                organizations::handle_delete(ctx, &args.id).await
            }
            OrganizationsCommand::Find(args) => organizations::handle_find(ctx, args).await,
            OrganizationsCommand::Get(args) => organizations::handle_get(ctx, &args.id).await,
            OrganizationsCommand::Update(args) => organizations::handle_update(ctx, args).await,
        },
        Command::User => users::handle_session_user(ctx).await,
        Command::Users(command) => {
            ctx.require_admin()?;
            match command {
                UsersCommand::Delete(args) => users::handle_delete(ctx, &args.id).await,
                UsersCommand::Find(args) => users::handle_find(ctx, args).await,
                UsersCommand::Get(args) => users::handle_get(ctx, &args.id).await,
                UsersCommand::Update(args) => users::handle_update(ctx, args).await,
            }
        }
        Command::Version => version::handle_version(ctx).await,
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "domain-trust",
    version = CLIENT_VERSION,
    about = "Interact with the Domain Trust API"
)]
pub(crate) struct Cli {
    /// Base URL of the Domain Trust API.
    #[arg(
        long = "api-url",
        global = true,
        env = "DOMAIN_TRUST_API_URL",
        default_value = DEFAULT_ENDPOINT_URL
    )]
    api_url: String,
    /// API key to use instead of the one stored in the profile.
    #[arg(long = "api-key", global = true, env = "DOMAIN_TRUST_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Body encoding for requests and responses (cbor, json).
    #[arg(
        long = "contentType",
        global = true,
        value_parser = parse_content_type,
        default_value = "cbor"
    )]
    content_type: ContentType,
    /// Directory holding `config.yml` (defaults to ~/.config/domain-trust-client).
    #[arg(long = "profileDir", global = true, env = "DOMAIN_TRUST_PROFILE_DIR")]
    profile_dir: Option<PathBuf>,
    #[command(flatten)]
    metadata: MetadataArgs,
    /// Log every request as a replayable curl command.
    #[arg(short = 'd', long, global = true)]
    debug: bool,
    /// Output format for command results.
    #[arg(
        short = 'f',
        long,
        global = true,
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Yaml
    )]
    format: OutputFormat,
    /// Log level directive (RUST_LOG takes precedence).
    #[arg(long = "logLevel", global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    /// Human-readable logs instead of JSON lines.
    #[arg(
        long = "prettyLog",
        global = true,
        action = ArgAction::Set,
        default_value_t = true
    )]
    pretty_log: bool,
    /// API HTTP timeout in seconds.
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
    /// Write the output to `<unix-timestamp>.<ext>` instead of stdout.
    #[arg(short = 'w', long = "writetofile", global = true)]
    write_to_file: bool,
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn into_context(self, cancel: CancellationToken) -> CliResult<(AppContext, Command)> {
        let profile_dir = match self.profile_dir {
            Some(dir) => dir,
            None => profile::default_dir().map_err(CliError::failure)?,
        };
        let profile = Profile::load_or_create(&profile_dir).map_err(CliError::failure)?;

        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .or_else(|| Some(profile.api_key.clone()).filter(|key| !key.is_empty()));
        let client = Client::new(ClientConfig {
            base_url: self.api_url,
            api_key,
            content_type: self.content_type,
            timeout: Duration::from_secs(self.timeout),
            debug: self.debug,
            ..ClientConfig::default()
        })
        .map_err(|err| CliError::validation(format!("{:#}", anyhow::Error::new(err))))?
        .with_cancellation(cancel.clone());

        let ctx = AppContext {
            client,
            profile,
            output: OutputOptions {
                format: self.format,
                write_to_file: self.write_to_file,
                ..OutputOptions::default()
            },
            metadata: self.metadata.into(),
            cancel,
        };
        Ok((ctx, self.command))
    }
}

/// Paging and creation-window flags shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct MetadataArgs {
    /// Limit the quantity of returned results.
    #[arg(short = 'l', long, global = true)]
    limit: Option<u64>,
    /// Only return results created after this date.
    #[arg(long = "createdAfter", global = true, value_parser = parse_timestamp)]
    created_after: Option<DateTime<Utc>>,
    /// Only return results created before this date.
    #[arg(long = "createdBefore", global = true, value_parser = parse_timestamp)]
    created_before: Option<DateTime<Utc>>,
}

impl From<MetadataArgs> for MetadataFilter {
    fn from(args: MetadataArgs) -> Self {
        Self {
            limit: args.limit.unwrap_or_default(),
            created_after: args.created_after,
            created_before: args.created_before,
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Interact with API keys.
    #[command(subcommand, name = "apikeys", alias = "apiKeys")]
    ApiKeys(ApiKeysCommand),
    /// Read or change the local profile.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Open the API documentation in a browser.
    Docs,
    /// Interact with domains.
    #[command(subcommand)]
    Domains(DomainsCommand),
    /// Interact with invites.
    #[command(subcommand)]
    Invites(InvitesCommand),
    /// Log in with an API key, or with an email and password.
    ///
    /// Email and password are stored in the profile in plaintext for later logins.
    Login(LoginArgs),
    /// Interact with organizations.
    #[command(subcommand)]
    Organizations(OrganizationsCommand),
    /// Show the user behind the current API key.
    User,
    /// Interact with users.
    #[command(subcommand)]
    Users(UsersCommand),
    /// Show the API version.
    Version,
}

impl Command {
    /// Short label recorded on the command span.
    pub(crate) const fn label(&self) -> &'static str {
        match self {
            Self::ApiKeys(command) => match command {
                ApiKeysCommand::Create(_) => "apikeys create",
                ApiKeysCommand::Delete(_) => "apikeys delete",
                ApiKeysCommand::Find(_) => "apikeys find",
                ApiKeysCommand::Get(_) => "apikeys get",
            },
            Self::Config(command) => match command {
                ConfigCommand::Get(_) => "config get",
                ConfigCommand::Set(_) => "config set",
                ConfigCommand::Show => "config show",
            },
            Self::Docs => "docs",
            Self::Domains(command) => match command {
                DomainsCommand::Create => "domains create",
                DomainsCommand::Find(_) => "domains find",
            },
            Self::Invites(command) => match command {
                InvitesCommand::Create(_) => "invites create",
                InvitesCommand::Delete(_) => "invites delete",
                InvitesCommand::Find(_) => "invites find",
                InvitesCommand::Get(_) => "invites get",
            },
            Self::Login(_) => "login",
            Self::Organizations(command) => match command {
                OrganizationsCommand::Create(_) => "organizations create",
                OrganizationsCommand::Delete(_) => "organizations delete",
                OrganizationsCommand::Find(_) => "organizations find",
                OrganizationsCommand::Get(_) => "organizations get",
                OrganizationsCommand::Update(_) => "organizations update",
            },
            Self::User => "user",
            Self::Users(command) => match command {
                UsersCommand::Delete(_) => "users delete",
                UsersCommand::Find(_) => "users find",
                UsersCommand::Get(_) => "users get",
                UsersCommand::Update(_) => "users update",
            },
            Self::Version => "version",
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct IdArg {
    /// Record identifier.
    pub(crate) id: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ApiKeysCommand {
    /// Create an API key.
    Create(ApiKeyCreateArgs),
    /// Delete an API key.
    Delete(IdArg),
    /// Find API keys.
    Find(ApiKeyFindArgs),
    /// Get an API key.
    Get(IdArg),
}

#[derive(Args, Debug)]
pub(crate) struct ApiKeyCreateArgs {
    /// Expiry date (e.g. 2030-01-31).
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) expiry: DateTime<Utc>,
    /// Issue the key for another user (admins only).
    #[arg(long = "userID")]
    pub(crate) user_id: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ApiKeyFindArgs {
    /// Deployment the keys are valid for (production, test).
    #[arg(long)]
    environment: Option<String>,
    /// Keys expiring after this date.
    #[arg(long = "expiryAfter", value_parser = parse_timestamp)]
    expiry_after: Option<DateTime<Utc>>,
    /// Keys expiring before this date.
    #[arg(long = "expiryBefore", value_parser = parse_timestamp)]
    expiry_before: Option<DateTime<Utc>>,
    /// Keys belonging to this user.
    #[arg(long = "userID")]
    user_id: Option<String>,
}

impl From<ApiKeyFindArgs> for ApiKeyFilter {
    fn from(args: ApiKeyFindArgs) -> Self {
        Self {
            environment: args.environment.unwrap_or_default(),
            expiry_after: args.expiry_after,
            expiry_before: args.expiry_before,
            user_id: args.user_id.unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum ConfigCommand {
    /// Print one profile value.
    Get(ConfigGetArgs),
    /// Change one profile value.
    Set(ConfigSetArgs),
    /// Print the whole profile.
    Show,
}

#[derive(Args, Debug)]
pub(crate) struct ConfigGetArgs {
    /// apiKey, userEmail, userPass or userRole.
    #[arg(value_parser = parse_profile_key)]
    key: ProfileKey,
}

#[derive(Args, Debug)]
pub(crate) struct ConfigSetArgs {
    /// apiKey, userEmail, userPass or userRole.
    #[arg(value_parser = parse_profile_key)]
    key: ProfileKey,
    /// New value for the key.
    value: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum DomainsCommand {
    /// Submit domains read as CSV from stdin.
    Create,
    /// Find domains.
    Find(DomainFindArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct DomainFindArgs {
    /// Page through every result.
    #[arg(long)]
    pub(crate) all: bool,
    /// Reporting organization.
    #[arg(long = "organizationID")]
    organization_id: Option<String>,
    /// Fully qualified domain name.
    #[arg(long)]
    domain: Option<String>,
    /// Second-level label.
    #[arg(long)]
    sld: Option<String>,
    /// Top-level label.
    #[arg(long)]
    tld: Option<String>,
    /// Registrable root domain.
    #[arg(long = "rootDomain")]
    root_domain: Option<String>,
    /// Subdomain portion.
    #[arg(long = "subDomain")]
    subdomain: Option<String>,
    /// Domains registered after this date.
    #[arg(long = "registrationDateAfter", value_parser = parse_timestamp)]
    registration_date_after: Option<DateTime<Utc>>,
    /// Domains registered before this date.
    #[arg(long = "registrationDateBefore", value_parser = parse_timestamp)]
    registration_date_before: Option<DateTime<Utc>>,
    /// Provider organization name.
    #[arg(long = "providerName")]
    provider_name: Option<String>,
    /// Provider rating (trial, predictive, low-confidence, med-confidence, high-confidence).
    #[arg(long = "providerRating")]
    provider_rating: Option<String>,
    /// Providers rated above this rating.
    #[arg(long = "providerRatingAbove")]
    provider_rating_above: Option<String>,
    /// Provider role (registrar, registry, reseller, other, icann).
    #[arg(long = "providerRole")]
    provider_role: Option<String>,
    /// Abuse type (botnets, malware, pharming, phishing, spam).
    #[arg(long = "abuseType")]
    abuse_type: Option<String>,
    /// Activity (active, suspended, non-existent, taken-down, blocked).
    #[arg(long)]
    activity: Option<String>,
    /// Classification (definitely-malicious, probably-malicious, possibly-malicious, definitely-clean).
    #[arg(long)]
    classification: Option<String>,
    /// Domains identified as abusive after this date.
    #[arg(long = "dateIdentifiedAfter", value_parser = parse_timestamp)]
    date_identified_after: Option<DateTime<Utc>>,
    /// Domains identified as abusive before this date.
    #[arg(long = "dateIdentifiedBefore", value_parser = parse_timestamp)]
    date_identified_before: Option<DateTime<Utc>>,
    /// Only domains blocked by the resolver.
    #[arg(long = "onlyBlocked", conflicts_with = "only_unblocked")]
    only_blocked: bool,
    /// Only domains not blocked by the resolver.
    #[arg(long = "onlyUnblocked")]
    only_unblocked: bool,
    /// Report type (brand-spoof, fraud).
    #[arg(long = "reportType")]
    report_type: Option<String>,
    /// Source (internal, external).
    #[arg(long)]
    source: Option<String>,
    /// Reported URL.
    #[arg(long)]
    urls: Option<String>,
}

impl From<DomainFindArgs> for DomainFilter {
    fn from(args: DomainFindArgs) -> Self {
        Self {
            organization_id: args.organization_id.unwrap_or_default(),
            domain: args.domain.unwrap_or_default(),
            sld: args.sld.unwrap_or_default(),
            tld: args.tld.unwrap_or_default(),
            root_domain: args.root_domain.unwrap_or_default(),
            subdomain: args.subdomain.unwrap_or_default(),
            registration_date_after: args.registration_date_after,
            registration_date_before: args.registration_date_before,
            provider_name: args.provider_name.unwrap_or_default(),
            provider_rating: args.provider_rating.unwrap_or_default(),
            provider_rating_above: args.provider_rating_above.unwrap_or_default(),
            provider_role: args.provider_role.unwrap_or_default(),
            abuse_type: args.abuse_type.unwrap_or_default(),
            activity: args.activity.unwrap_or_default(),
            classification: args.classification.unwrap_or_default(),
            date_identified_after: args.date_identified_after,
            date_identified_before: args.date_identified_before,
            only_blocked: args.only_blocked,
            only_unblocked: args.only_unblocked,
            report_type: args.report_type.unwrap_or_default(),
            source: args.source.unwrap_or_default(),
            urls: args.urls.unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum InvitesCommand {
    /// Invite a new user.
    Create(InviteCreateArgs),
    /// Delete an invite.
    Delete(IdArg),
    /// Find invites.
    Find(InviteFindArgs),
    /// Get an invite.
    Get(IdArg),
}

#[derive(Args, Debug)]
pub(crate) struct InviteCreateArgs {
    /// Email the invite is sent to.
    #[arg(long)]
    pub(crate) email: String,
    /// Invitee given name.
    #[arg(long = "firstName")]
    pub(crate) first_name: Option<String>,
    /// Invitee family name.
    #[arg(long = "lastName")]
    pub(crate) last_name: Option<String>,
    /// Organization the invitee joins.
    #[arg(long = "organizationID")]
    pub(crate) organization_id: Option<String>,
    /// Role granted on redemption (admin, member, trial).
    #[arg(long)]
    pub(crate) role: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InviteFindArgs {
    /// Invites sent to this email.
    #[arg(long)]
    email: Option<String>,
    /// Invites into this organization.
    #[arg(long = "organizationID")]
    organization_id: Option<String>,
}

impl From<InviteFindArgs> for InviteFilter {
    fn from(args: InviteFindArgs) -> Self {
        Self {
            user_email: args.email.unwrap_or_default(),
            user_organization_id: args.organization_id.unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct LoginArgs {
    /// Existing API key.
    pub(crate) key: Option<String>,
    /// Account email for a password login.
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Account password for a password login.
    #[arg(long)]
    pub(crate) password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum OrganizationsCommand {
    /// Create an organization.
    Create(OrganizationCreateArgs),
    /// Delete an organization.
    Delete(IdArg),
    /// Find organizations.
    Find(OrganizationFindArgs),
    /// Get an organization.
    Get(IdArg),
    /// Update an organization.
    Update(OrganizationUpdateArgs),
}

#[derive(Args, Debug)]
pub(crate) struct OrganizationCreateArgs {
    /// Organization name.
    #[arg(long)]
    pub(crate) name: String,
    /// Rating (trial, predictive, low-confidence, med-confidence, high-confidence).
    #[arg(long)]
    pub(crate) rating: Option<String>,
    /// Role (registrar, registry, reseller, other, icann).
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Status (active, deactivated).
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Maximum number of users in the organization.
    #[arg(long = "userQuota")]
    pub(crate) user_quota: Option<i8>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct OrganizationFindArgs {
    /// Organizations with this name.
    #[arg(long)]
    name: Option<String>,
    /// Organizations with this rating.
    #[arg(long)]
    rating: Option<String>,
    /// Organizations with this role.
    #[arg(long)]
    role: Option<String>,
    /// Organizations with this status.
    #[arg(long)]
    status: Option<String>,
}

impl From<OrganizationFindArgs> for OrganizationFilter {
    fn from(args: OrganizationFindArgs) -> Self {
        Self {
            name: args.name.unwrap_or_default(),
            rating: args.rating.unwrap_or_default(),
            role: args.role.unwrap_or_default(),
            status: args.status.unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct OrganizationUpdateArgs {
    /// Organization to update.
    pub(crate) id: String,
    /// New name.
    #[arg(long)]
    name: Option<String>,
    /// New rating.
    #[arg(long)]
    rating: Option<String>,
    /// New role.
    #[arg(long)]
    role: Option<String>,
    /// New status.
    #[arg(long)]
    status: Option<String>,
    /// New user quota.
    #[arg(long = "userQuota")]
    user_quota: Option<i8>,
}

impl OrganizationUpdateArgs {
    pub(crate) fn into_parts(self) -> (String, OrganizationUpdate) {
        (
            self.id,
            OrganizationUpdate {
                name: self.name,
                rating: self.rating,
                role: self.role,
                status: self.status,
                user_quota: self.user_quota,
            },
        )
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum UsersCommand {
    /// Delete a user.
    Delete(IdArg),
    /// Find users.
    Find(UserFindArgs),
    /// Get a user.
    Get(IdArg),
    /// Update a user.
    Update(UserUpdateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct UserFindArgs {
    /// Users with this email.
    #[arg(long)]
    email: Option<String>,
    /// Users with this given name.
    #[arg(long = "firstName")]
    first_name: Option<String>,
    /// Users with this family name.
    #[arg(long = "lastName")]
    last_name: Option<String>,
    /// Users in this organization.
    #[arg(long = "organizationID")]
    organization_id: Option<String>,
    /// Users with this role (admin, member, trial).
    #[arg(long)]
    role: Option<String>,
}

impl From<UserFindArgs> for UserFilter {
    fn from(args: UserFindArgs) -> Self {
        Self {
            email: args.email.unwrap_or_default(),
            first_name: args.first_name.unwrap_or_default(),
            last_name: args.last_name.unwrap_or_default(),
            organization_id: args.organization_id.unwrap_or_default(),
            role: args.role.unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct UserUpdateArgs {
    /// User to update.
    pub(crate) id: String,
    /// New email.
    #[arg(long)]
    email: Option<String>,
    /// New given name.
    #[arg(long = "firstName")]
    first_name: Option<String>,
    /// New family name.
    #[arg(long = "lastName")]
    last_name: Option<String>,
    /// New password.
    #[arg(long)]
    password: Option<String>,
    /// New role.
    #[arg(long)]
    role: Option<String>,
}

impl UserUpdateArgs {
    pub(crate) fn into_parts(self) -> (String, UserUpdate) {
        (
            self.id,
            UserUpdate {
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
                password: self.password,
                role: self.role,
            },
        )
    }
}

/// Parse a flag timestamp: RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC) or `YYYY-MM-DD`.
pub(crate) fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(parsed.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| format!("invalid date '{input}' (expected RFC 3339 or YYYY-MM-DD)"))
}

fn parse_content_type(input: &str) -> Result<ContentType, String> {
    input.parse()
}

fn parse_profile_key(input: &str) -> Result<ProfileKey, String> {
    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use chrono::TimeZone;
    use clap::CommandFactory;
    use domain_trust_client::models::to_query_string;

    fn parse(args: &[&str]) -> Result<Cli> {
        let mut argv = vec!["domain-trust"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).map_err(|err| anyhow!(err.to_string()))
    }

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    fn undocumented_arguments(command: &clap::Command, path: &str, missing: &mut Vec<String>) {
        for arg in command.get_arguments() {
            let id = arg.get_id().as_str();
            if matches!(id, "help" | "version") {
                continue;
            }
            if arg.get_help().is_none() && arg.get_long_help().is_none() {
                missing.push(format!("{path} {id}"));
            }
        }
        for sub in command.get_subcommands() {
            undocumented_arguments(sub, &format!("{path} {}", sub.get_name()), missing);
        }
    }

    #[test]
    fn every_argument_has_help_text() {
        let mut missing = Vec::new();
        undocumented_arguments(&Cli::command(), "domain-trust", &mut missing);
        assert!(missing.is_empty(), "arguments without help: {missing:?}");
    }

    #[test]
    fn global_flags_have_expected_defaults() -> Result<()> {
        let cli = parse(&["version"])?;
        assert_eq!(cli.api_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(cli.content_type, ContentType::Cbor);
        assert_eq!(cli.format, OutputFormat::Yaml);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(cli.pretty_log);
        assert!(!cli.write_to_file);
        assert_eq!(cli.command.label(), "version");
        Ok(())
    }

    #[test]
    fn global_flags_parse_after_subcommand() -> Result<()> {
        let cli = parse(&[
            "users", "find", "-f", "JSONP", "-w", "--prettyLog", "false", "-l", "5",
        ])?;
        assert_eq!(cli.format, OutputFormat::Jsonp);
        assert!(cli.write_to_file);
        assert!(!cli.pretty_log);
        assert_eq!(MetadataFilter::from(cli.metadata).limit, 5);
        Ok(())
    }

    #[test]
    fn domain_flags_convert_to_filter_query() -> Result<()> {
        let cli = parse(&[
            "domains",
            "find",
            "--rootDomain",
            "example.org",
            "--abuseType",
            "phishing",
            "--onlyBlocked",
            "--dateIdentifiedAfter",
            "2025-03-01",
        ])?;
        let Command::Domains(DomainsCommand::Find(args)) = cli.command else {
            return Err(anyhow!("expected domains find"));
        };
        assert!(!args.all);
        let filter = DomainFilter::from(args);
        assert_eq!(
            to_query_string(&filter),
            "abuseType=phishing&dateIdentifiedAfter=2025-03-01T00%3A00%3A00Z&onlyBlocked=true&rootDomain=example.org"
        );
        Ok(())
    }

    #[test]
    fn blocked_flags_conflict() {
        assert!(parse(&["domains", "find", "--onlyBlocked", "--onlyUnblocked"]).is_err());
    }

    #[test]
    fn invite_flags_convert_to_filter() -> Result<()> {
        let cli = parse(&["invites", "find", "--organizationID", "org-9"])?;
        let Command::Invites(InvitesCommand::Find(args)) = cli.command else {
            return Err(anyhow!("expected invites find"));
        };
        let filter = InviteFilter::from(args);
        assert_eq!(filter.user_organization_id, "org-9");
        assert_eq!(to_query_string(&filter), "userOrganizationID=org-9");
        Ok(())
    }

    #[test]
    fn update_flags_only_carry_changed_fields() -> Result<()> {
        let cli = parse(&["users", "update", "user-1", "--firstName", "Grace"])?;
        let Command::Users(UsersCommand::Update(args)) = cli.command else {
            return Err(anyhow!("expected users update"));
        };
        let (id, update) = args.into_parts();
        assert_eq!(id, "user-1");
        assert_eq!(update.first_name.as_deref(), Some("Grace"));
        assert!(update.email.is_none());
        Ok(())
    }

    #[test]
    fn api_keys_accept_both_spellings() -> Result<()> {
        let cli = parse(&["apiKeys", "create", "--expiry", "2030-01-31"])?;
        let Command::ApiKeys(ApiKeysCommand::Create(args)) = cli.command else {
            return Err(anyhow!("expected apikeys create"));
        };
        assert_eq!(
            Some(args.expiry),
            Utc.with_ymd_and_hms(2030, 1, 31, 0, 0, 0).single()
        );
        assert!(parse(&["apikeys", "create"]).is_err());
        Ok(())
    }

    #[test]
    fn timestamps_accept_several_layouts() -> Result<()> {
        let expected = Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 30, 0)
            .single()
            .ok_or_else(|| anyhow!("valid date"))?;
        assert_eq!(parse_timestamp("2025-06-01T12:30:00Z").ok(), Some(expected));
        assert_eq!(parse_timestamp("2025-06-01T14:30:00+02:00").ok(), Some(expected));
        assert_eq!(parse_timestamp("2025-06-01 12:30:00").ok(), Some(expected));
        assert!(parse_timestamp("2025-06-01").is_ok());
        assert!(parse_timestamp("June 1st").is_err());
        Ok(())
    }

    #[test]
    fn unknown_content_type_is_rejected() {
        assert!(parse(&["--contentType", "xml", "version"]).is_err());
    }
}
