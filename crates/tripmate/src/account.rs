// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session and preference commands: `login`, `logout`, `status`, `settings`.

use clap::ValueEnum;
use serde::Serialize;
use tripmate_core::{AuthState, Language, PluginAdapter, TripmateError};
use tripmate_gateway::{GatewayMode, RemoteGateway};
use tripmate_session::{PreferenceStore, Preferences, SessionStore};

use crate::output::{describe_health, print_json};

/// On/off switch accepted by `settings --sound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

/// Structured output for `tripmate status --json`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub auth: AuthState,
    pub gateway_url: String,
    pub gateway_mode: &'static str,
    pub gateway_health: String,
    pub storage_health: String,
}

pub async fn run_login(
    session: &SessionStore,
    token: &str,
    json: bool,
) -> Result<(), TripmateError> {
    session.resolve().await;
    session.login(token).await?;
    report_auth(session.state(), json)
}

pub async fn run_logout(session: &SessionStore, json: bool) -> Result<(), TripmateError> {
    session.resolve().await;
    session.logout().await?;
    report_auth(session.state(), json)
}

/// Resolve the session and probe both adapters.
pub async fn run_status(
    session: &SessionStore,
    storage: &dyn PluginAdapter,
    gateway: &RemoteGateway,
    json: bool,
) -> Result<(), TripmateError> {
    let report = status_report(session, storage, gateway).await;
    if json {
        return print_json(&report);
    }
    println!("session:  {}", report.auth);
    println!(
        "gateway:  {} ({} mode) {}",
        report.gateway_url, report.gateway_mode, report.gateway_health
    );
    println!("storage:  {}", report.storage_health);
    Ok(())
}

pub async fn status_report(
    session: &SessionStore,
    storage: &dyn PluginAdapter,
    gateway: &RemoteGateway,
) -> StatusReport {
    let auth = session.resolve().await;
    StatusReport {
        auth,
        gateway_url: gateway.base_url().to_string(),
        gateway_mode: match gateway.mode() {
            GatewayMode::Live => "live",
            GatewayMode::Mock => "mock",
        },
        gateway_health: health_line(gateway).await,
        storage_health: health_line(storage).await,
    }
}

async fn health_line(adapter: &dyn PluginAdapter) -> String {
    match adapter.health_check().await {
        Ok(status) => describe_health(&status),
        Err(e) => format!("check failed ({e})"),
    }
}

/// Load preferences, apply any requested changes, then print the result.
pub async fn run_settings(
    prefs: &mut PreferenceStore,
    sound: Option<Switch>,
    language: Option<Language>,
    json: bool,
) -> Result<(), TripmateError> {
    let current = apply_settings(prefs, sound, language).await?;
    if json {
        return print_json(&current);
    }
    println!(
        "sound:    {}",
        if current.sound_enabled { "on" } else { "off" }
    );
    println!("language: {}", current.language);
    Ok(())
}

pub async fn apply_settings(
    prefs: &mut PreferenceStore,
    sound: Option<Switch>,
    language: Option<Language>,
) -> Result<Preferences, TripmateError> {
    prefs.load().await?;
    if let Some(switch) = sound {
        prefs.set_sound_enabled(switch == Switch::On).await?;
    }
    if let Some(language) = language {
        prefs.set_language(language).await?;
    }
    Ok(prefs.current())
}

fn report_auth(state: AuthState, json: bool) -> Result<(), TripmateError> {
    if json {
        return print_json(&serde_json::json!({ "auth": state }));
    }
    println!("session: {state}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tripmate_core::HealthStatus;
    use tripmate_test_utils::{fast_gateway_config, MemoryKvStore};

    use super::*;

    fn mock_gateway() -> RemoteGateway {
        let mut config = fast_gateway_config("http://127.0.0.1:9");
        config.force_mock = true;
        RemoteGateway::new(&config).unwrap()
    }

    #[tokio::test]
    async fn login_then_status_reports_authenticated() {
        let kv = MemoryKvStore::new();
        let session = SessionStore::new(Arc::new(kv.clone()));

        run_login(&session, "t1", true).await.unwrap();
        assert_eq!(kv.peek("auth_token").await.as_deref(), Some("t1"));

        let report = status_report(&session, &kv, &mock_gateway()).await;
        assert_eq!(report.auth, AuthState::Authenticated);
        assert_eq!(report.gateway_mode, "mock");
        assert!(report.gateway_health.starts_with("degraded"));
        assert_eq!(report.storage_health, describe_health(&HealthStatus::Healthy));
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let kv = MemoryKvStore::new();
        let session = SessionStore::new(Arc::new(kv.clone()));
        let err = run_login(&session, "", false).await.unwrap_err();
        assert!(matches!(err, TripmateError::InvalidInput(_)));
        assert_eq!(session.state(), AuthState::Unauthenticated);
        assert_eq!(kv.write_count(), 0);
    }

    #[tokio::test]
    async fn logout_after_restart_clears_token() {
        let kv = MemoryKvStore::with_entries([("auth_token", "t1")]);
        let session = SessionStore::new(Arc::new(kv.clone()));

        run_logout(&session, false).await.unwrap();
        assert_eq!(session.state(), AuthState::Unauthenticated);
        assert_eq!(kv.peek("auth_token").await, None);
    }

    #[tokio::test]
    async fn failed_login_write_is_reported() {
        let kv = MemoryKvStore::new();
        kv.fail_writes(true);
        let session = SessionStore::new(Arc::new(kv.clone()));

        let err = run_login(&session, "t1", false).await.unwrap_err();
        assert!(matches!(err, TripmateError::Persistence { .. }));
        assert_eq!(session.state(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn settings_apply_and_persist() {
        let kv = MemoryKvStore::new();
        let mut prefs = PreferenceStore::new(Arc::new(kv.clone()));

        let updated = apply_settings(&mut prefs, Some(Switch::On), Some(Language::Turkish))
            .await
            .unwrap();
        assert!(updated.sound_enabled);
        assert_eq!(updated.language, Language::Turkish);
        assert_eq!(kv.peek("soundToggle").await.as_deref(), Some("true"));
        assert_eq!(kv.peek("appLanguage").await.as_deref(), Some("turkish"));

        let unchanged = apply_settings(&mut prefs, None, None).await.unwrap();
        assert_eq!(unchanged, updated);
    }
}
