//! The on-disk profile holding credentials between invocations.
//!
//! Stored as YAML at `~/.config/domain-trust-client/config.yml`. The file is
//! created empty on first use and rewritten with owner-only permissions.

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

const PROFILE_DIR: &str = "domain-trust-client";
const PROFILE_FILE: &str = "config.yml";

/// Credentials and role remembered across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Profile {
    pub(crate) api_key: String,
    pub(crate) user_email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) user_pass: String,
    pub(crate) user_role: String,
    #[serde(skip)]
    path: PathBuf,
}

/// Keys addressable through `config get` and `config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileKey {
    ApiKey,
    UserEmail,
    UserPass,
    UserRole,
}

impl ProfileKey {
    /// Field name as written in `config.yml`.
    pub(crate) const fn field(self) -> &'static str {
        match self {
            Self::ApiKey => "apiKey",
            Self::UserEmail => "userEmail",
            Self::UserPass => "userPass",
            Self::UserRole => "userRole",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "api key",
            Self::UserEmail => "user email",
            Self::UserPass => "user pass",
            Self::UserRole => "user role",
        }
    }
}

impl FromStr for ProfileKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "apikey" => Ok(Self::ApiKey),
            "useremail" => Ok(Self::UserEmail),
            "userpass" => Ok(Self::UserPass),
            "userrole" => Ok(Self::UserRole),
            _ => Err(format!(
                "unknown config key '{value}' (expected apiKey, userEmail, userPass or userRole)"
            )),
        }
    }
}

impl Display for ProfileKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Directory holding the profile, under the user's home.
pub(crate) fn default_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to locate home directory"))?;
    Ok(home.join(".config").join(PROFILE_DIR))
}

impl Profile {
    /// Load the profile in `dir`, creating an empty one when missing.
    pub(crate) fn load_or_create(dir: &Path) -> Result<Self> {
        let path = dir.join(PROFILE_FILE);
        if !path.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let profile = Self {
                path,
                ..Self::default()
            };
            profile.save()?;
            tracing::debug!(path = %profile.path.display(), "created empty profile");
            return Ok(profile);
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut profile: Self = if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&raw)
                .with_context(|| format!("{} is not a valid profile", path.display()))?
        };
        profile.path = path;
        Ok(profile)
    }

    /// Persist the profile with owner-only permissions.
    pub(crate) fn save(&self) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("failed to serialise profile")?;
        fs::write(&self.path, yaml)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        restrict_permissions(&self.path)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn get(&self, key: ProfileKey) -> &str {
        match key {
            ProfileKey::ApiKey => &self.api_key,
            ProfileKey::UserEmail => &self.user_email,
            ProfileKey::UserPass => &self.user_pass,
            ProfileKey::UserRole => &self.user_role,
        }
    }

    pub(crate) fn set(&mut self, key: ProfileKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            ProfileKey::ApiKey => self.api_key = value,
            ProfileKey::UserEmail => self.user_email = value,
            ProfileKey::UserPass => self.user_pass = value,
            ProfileKey::UserRole => self.user_role = value,
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("failed to restrict permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
