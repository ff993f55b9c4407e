use crate::domain::model::{AlcoholItem, FoodItem, RoleRecord, Session};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Local persistence for the active session, the hosted SDK's local-storage
/// equivalent. `load` returns `None` when no session has been stored.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Option<Session>>> + Send;
    fn save(&self, session: &Session) -> impl std::future::Future<Output = Result<()>> + Send;
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn anon_key(&self) -> &str;
    fn session_file(&self) -> &str;
}

/// The hosted database-and-auth service, as seen by this crate. Reads are
/// filtered to `available = true` and ordered by category on the server.
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn get_session(&self) -> Result<Option<Session>>;
    async fn query_role(&self, user_id: &str, role: &str) -> Result<Option<RoleRecord>>;
    async fn fetch_available_alcohol(&self) -> Result<Vec<AlcoholItem>>;
    async fn fetch_available_food(&self) -> Result<Vec<FoodItem>>;
    async fn sign_out(&self) -> Result<()>;
}
