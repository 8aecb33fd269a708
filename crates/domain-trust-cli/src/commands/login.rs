//! `login`: exchange credentials or verify a key, then remember the result.
//!
//! Resolution order: `--email` with `--password`, then a positional key, then
//! whatever the profile already holds.

use domain_trust_client::models::User;

use crate::cli::LoginArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::profile::Profile;

enum Credentials {
    Key(String),
    Password { email: String, password: String },
}

fn resolve(ctx: &AppContext, args: LoginArgs) -> CliResult<Credentials> {
    match (args.key, args.email, args.password) {
        (_, Some(email), Some(password)) => Ok(Credentials::Password { email, password }),
        (_, Some(_), None) | (_, None, Some(_)) => Err(CliError::validation(
            "both --email and --password are required",
        )),
        (Some(key), None, None) => Ok(Credentials::Key(key)),
        (None, None, None) => {
            let profile = &ctx.profile;
            if !profile.user_email.is_empty() && !profile.user_pass.is_empty() {
                Ok(Credentials::Password {
                    email: profile.user_email.clone(),
                    password: profile.user_pass.clone(),
                })
            } else if !profile.api_key.is_empty() {
                Ok(Credentials::Key(profile.api_key.clone()))
            } else {
                Err(CliError::validation("no key, email or password provided"))
            }
        }
    }
}

pub(crate) async fn handle_login(ctx: &AppContext, args: LoginArgs) -> CliResult<()> {
    let mut profile = ctx.profile.clone();
    let mut client = ctx.client.clone();

    let user = match resolve(ctx, args)? {
        Credentials::Key(key) => {
            client.set_api_key(key.clone());
            let user = client.find_session_user().await?;
            profile.api_key = key;
            user
        }
        Credentials::Password { email, password } => {
            let issued = client.login(&email, &password).await?;
            client.set_api_key(issued.key.clone());
            let user = client.find_session_user().await?;
            profile.api_key = issued.key;
            profile.user_email = email;
            profile.user_pass = password;
            user
        }
    };

    remember(&mut profile, &user);
    profile.save().map_err(CliError::failure)?;
    tracing::info!(
        email = %user.email,
        role = %user.role,
        path = %profile.path().display(),
        "logged in"
    );
    Ok(())
}

fn remember(profile: &mut Profile, user: &User) {
    profile.user_role.clone_from(&user.role);
    if profile.user_email.is_empty() {
        profile.user_email.clone_from(&user.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::context_for;
    use crate::profile::Profile;
    use anyhow::{Result, anyhow};
    use domain_trust_test_support::bodies::JSON;
    use domain_trust_test_support::fixtures::{sample_api_key, sample_user};
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn password_login_stores_key_and_role() -> Result<()> {
        let server = MockServer::start_async().await;
        let login = server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200)
                .header("content-type", JSON)
                .json_body(json!({ "key": sample_api_key() }));
        });
        let session = server.mock(|when, then| {
            when.method(GET)
                .path("/api/user")
                .header("authorization", "Bearer dt_secret");
            then.status(200)
                .header("content-type", JSON)
                .json_body(json!({ "user": sample_user() }));
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_login(
            &ctx,
            LoginArgs {
                email: Some("analyst@example.org".into()),
                password: Some("hunter2".into()),
                ..LoginArgs::default()
            },
        )
        .await?;

        let saved = Profile::load_or_create(dir.path())?;
        assert_eq!(saved.api_key, "dt_secret");
        assert_eq!(saved.user_email, "analyst@example.org");
        assert_eq!(saved.user_pass, "hunter2");
        assert_eq!(saved.user_role, "member");
        login.assert();
        session.assert();
        Ok(())
    }

    #[tokio::test]
    async fn key_login_verifies_the_key() -> Result<()> {
        let server = MockServer::start_async().await;
        let session = server.mock(|when, then| {
            when.method(GET)
                .path("/api/user")
                .header("authorization", "Bearer dt_other");
            then.status(200)
                .header("content-type", JSON)
                .json_body(json!({ "user": sample_user() }));
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_login(
            &ctx,
            LoginArgs {
                key: Some("dt_other".into()),
                ..LoginArgs::default()
            },
        )
        .await?;

        let saved = Profile::load_or_create(dir.path())?;
        assert_eq!(saved.api_key, "dt_other");
        assert_eq!(saved.user_email, "analyst@example.org");
        assert!(saved.user_pass.is_empty());
        session.assert();
        Ok(())
    }

    #[tokio::test]
    async fn rejected_key_leaves_profile_untouched() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/user");
            then.status(401)
                .header("content-type", JSON)
                .json_body(json!({ "status": 401, "detail": "Unauthorized" }));
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        let err = handle_login(
            &ctx,
            LoginArgs {
                key: Some("dt_bad".into()),
                ..LoginArgs::default()
            },
        )
        .await
        .err()
        .ok_or_else(|| anyhow!("rejected key must fail"))?;

        assert_eq!(err.exit_code(), 3);
        assert!(Profile::load_or_create(dir.path())?.api_key.is_empty());
        Ok(())
    }

    #[test]
    fn partial_credentials_are_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let ctx = context_for("http://127.0.0.1:9/api", &dir)?;
        let err = resolve(
            &ctx,
            LoginArgs {
                email: Some("analyst@example.org".into()),
                ..LoginArgs::default()
            },
        )
        .err()
        .ok_or_else(|| anyhow!("email alone must fail"))?;
        assert_eq!(err.display_message(), "both --email and --password are required");
        Ok(())
    }

    #[test]
    fn empty_profile_without_flags_is_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let ctx = context_for("http://127.0.0.1:9/api", &dir)?;
        let err = resolve(&ctx, LoginArgs::default())
            .err()
            .ok_or_else(|| anyhow!("nothing to log in with"))?;
        assert_eq!(err.exit_code(), 2);
        Ok(())
    }

    #[test]
    fn stored_credentials_are_preferred_over_stored_key() -> Result<()> {
        let dir = TempDir::new()?;
        let mut ctx = context_for("http://127.0.0.1:9/api", &dir)?;
        ctx.profile.api_key = "dt_old".into();
        ctx.profile.user_email = "analyst@example.org".into();
        ctx.profile.user_pass = "hunter2".into();
        let resolved = resolve(&ctx, LoginArgs::default())?;
        assert!(matches!(resolved, Credentials::Password { .. }));
        Ok(())
    }
}
