use crate::domain::model::Session;
use crate::domain::ports::BackendClient;

pub const ADMIN_ROLE: &str = "admin";

/// Why the gate denied entry. Each cause carries its own redirect target:
/// "not logged in" goes back to sign-in, "logged in but not admin" goes to
/// the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NotSignedIn,
    NotAuthorized,
    AuthCheckFailed,
}

impl Denial {
    pub fn redirect_target(&self) -> &'static str {
        match self {
            Denial::NotSignedIn | Denial::AuthCheckFailed => "/auth",
            Denial::NotAuthorized => "/",
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Denial::NotSignedIn => None,
            Denial::NotAuthorized => Some("You need admin privileges to access this page"),
            Denial::AuthCheckFailed => Some("Authentication error"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AccessState {
    Checking,
    Granted(Session),
    Denied(Denial),
}

impl AccessState {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessState::Granted(_))
    }
}

/// Admin page entry gate: session check, then role lookup.
///
/// The role query needs the session's user id, so the two steps never
/// reorder. A role-query error is treated the same as a permanent denial;
/// the only recovery is re-entering the page.
pub struct AdminGate<'a, B: BackendClient> {
    backend: &'a B,
    state: AccessState,
}

impl<'a, B: BackendClient> AdminGate<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            state: AccessState::Checking,
        }
    }

    pub fn state(&self) -> &AccessState {
        &self.state
    }

    pub async fn check(&mut self) -> &AccessState {
        self.state = self.resolve().await;
        &self.state
    }

    async fn resolve(&self) -> AccessState {
        let session = match self.backend.get_session().await {
            Ok(Some(session)) => session,
            Ok(None) => return AccessState::Denied(Denial::NotSignedIn),
            Err(e) => {
                tracing::error!("Session check failed: {}", e);
                return AccessState::Denied(Denial::AuthCheckFailed);
            }
        };

        match self.backend.query_role(&session.user_id, ADMIN_ROLE).await {
            Ok(Some(_)) => AccessState::Granted(session),
            Ok(None) => AccessState::Denied(Denial::NotAuthorized),
            Err(e) => {
                tracing::error!("Role lookup failed: {}", e);
                AccessState::Denied(Denial::AuthCheckFailed)
            }
        }
    }
}
