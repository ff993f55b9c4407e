use crate::domain::model::{AlcoholItem, FoodItem, RoleRecord, Session};
use crate::domain::ports::{BackendClient, ConfigProvider, SessionStore};
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::Validate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

pub const ALCOHOL_TABLE: &str = "alcohol";
pub const FOOD_TABLE: &str = "food_menu";
pub const ROLES_TABLE: &str = "user_roles";

/// `BackendClient` over the hosted service's REST surface: PostgREST-style
/// table reads under `/rest/v1` and the auth endpoint under `/auth/v1`.
/// Every request carries the project api key; data requests additionally
/// carry a bearer token (the session's when one is stored, the anon key
/// otherwise).
pub struct RestBackend<S: SessionStore, C: ConfigProvider> {
    store: S,
    config: C,
    client: Client,
}

impl<S: SessionStore, C: ConfigProvider> RestBackend<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self {
            store,
            config,
            client: Client::new(),
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.backend_url().trim_end_matches('/'),
            table
        )
    }

    fn auth_url(&self, action: &str) -> String {
        format!(
            "{}/auth/v1/{}",
            self.config.backend_url().trim_end_matches('/'),
            action
        )
    }

    /// Bearer token for data requests. Falls back to the anon key when no
    /// usable session exists, so the public menu never depends on the
    /// session store being healthy.
    async fn bearer_token(&self) -> String {
        match self.store.load().await {
            Ok(Some(session)) if !session.is_expired() => session.access_token,
            Ok(_) => self.config.anon_key().to_string(),
            Err(e) => {
                tracing::debug!("Session store unavailable, using anon key: {}", e);
                self.config.anon_key().to_string()
            }
        }
    }

    async fn fetch_rows(&self, table: &str, query: &[(&str, &str)]) -> Result<Vec<serde_json::Value>> {
        let url = self.rest_url(table);
        tracing::debug!("Querying backend table: {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("apikey", self.config.anon_key())
            .bearer_auth(self.bearer_token().await)
            .send()
            .await?;

        tracing::debug!("Backend response status: {}", response.status());
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(MenuError::AuthError {
                message: format!("backend rejected credentials for {}", table),
            }),
            StatusCode::FORBIDDEN => Err(MenuError::AuthorizationError {
                message: format!("row-level policy denied access to {}", table),
            }),
            _ => Ok(response.error_for_status()?.json().await?),
        }
    }

    fn parse_row<T>(table: &str, row: serde_json::Value) -> Result<T>
    where
        T: DeserializeOwned + Validate,
    {
        let item: T = serde_json::from_value(row).map_err(|e| MenuError::DataError {
            message: format!("{} row rejected: {}", table, e),
        })?;
        item.validate()?;
        Ok(item)
    }

    async fn fetch_available<T>(&self, table: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Validate,
    {
        let rows = self
            .fetch_rows(
                table,
                &[
                    ("select", "*"),
                    ("available", "eq.true"),
                    ("order", "category.asc"),
                ],
            )
            .await?;

        rows.into_iter()
            .map(|row| Self::parse_row(table, row))
            .collect()
    }
}

#[async_trait::async_trait]
impl<S: SessionStore, C: ConfigProvider> BackendClient for RestBackend<S, C> {
    async fn get_session(&self) -> Result<Option<Session>> {
        let session = self.store.load().await.map_err(|e| MenuError::AuthError {
            message: format!("session store unavailable: {}", e),
        })?;

        match session {
            Some(session) if session.is_expired() => {
                tracing::debug!("Stored session expired at {}", session.expires_at);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn query_role(&self, user_id: &str, role: &str) -> Result<Option<RoleRecord>> {
        let user_filter = format!("eq.{}", user_id);
        let role_filter = format!("eq.{}", role);
        let rows = self
            .fetch_rows(
                ROLES_TABLE,
                &[
                    ("select", "user_id,role"),
                    ("user_id", &user_filter),
                    ("role", &role_filter),
                ],
            )
            .await?;

        let mut records: Vec<RoleRecord> = rows
            .into_iter()
            .map(|row| {
                serde_json::from_value(row).map_err(|e| MenuError::DataError {
                    message: format!("{} row rejected: {}", ROLES_TABLE, e),
                })
            })
            .collect::<Result<_>>()?;

        match records.len() {
            0 => Ok(None),
            1 => Ok(Some(records.remove(0))),
            n => Err(MenuError::DataError {
                message: format!(
                    "expected at most one {} row for user {}, got {}",
                    ROLES_TABLE, user_id, n
                ),
            }),
        }
    }

    async fn fetch_available_alcohol(&self) -> Result<Vec<AlcoholItem>> {
        self.fetch_available(ALCOHOL_TABLE).await
    }

    async fn fetch_available_food(&self) -> Result<Vec<FoodItem>> {
        self.fetch_available(FOOD_TABLE).await
    }

    async fn sign_out(&self) -> Result<()> {
        // Remote revocation is best-effort; the local session is always
        // cleared so the client ends up signed out either way.
        if let Ok(Some(session)) = self.store.load().await {
            let result = self
                .client
                .post(self.auth_url("logout"))
                .header("apikey", self.config.anon_key())
                .bearer_auth(&session.access_token)
                .send()
                .await
                .and_then(|r| r.error_for_status());
            if let Err(e) = result {
                tracing::warn!("Backend sign-out failed, clearing local session anyway: {}", e);
            }
        }
        self.store.clear().await
    }
}
