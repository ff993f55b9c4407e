use crate::app::pages::{Notice, PageView};
use crate::core::admin::{AccessState, AdminGate};
use crate::domain::ports::BackendClient;

/// Shown while the gate is still checking; privileged content never
/// occupies that window.
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// The admin dashboard page. Privileged content renders only after the gate
/// grants access; every denial comes back as an empty body plus a redirect.
pub struct AdminPage<'a, B: BackendClient> {
    backend: &'a B,
}

impl<'a, B: BackendClient> AdminPage<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub async fn enter(&self) -> PageView {
        let mut gate = AdminGate::new(self.backend);
        match gate.check().await {
            AccessState::Granted(session) => PageView {
                body: render_dashboard(&session.user_id),
                notice: None,
                redirect: None,
            },
            AccessState::Denied(denial) => PageView {
                body: String::new(),
                notice: denial.notice().map(Notice::error),
                redirect: Some(denial.redirect_target()),
            },
            // check() always settles; a page never observes this.
            AccessState::Checking => PageView {
                body: LOADING_PLACEHOLDER.to_string(),
                notice: None,
                redirect: None,
            },
        }
    }

    pub async fn sign_out(&self) -> PageView {
        match self.backend.sign_out().await {
            Ok(()) => PageView {
                body: String::new(),
                notice: Some(Notice::info("Logged out successfully")),
                redirect: Some("/"),
            },
            Err(e) => {
                tracing::error!("Sign-out failed: {}", e);
                PageView {
                    body: String::new(),
                    notice: Some(Notice::error(e.user_message())),
                    redirect: None,
                }
            }
        }
    }
}

fn render_dashboard(user_id: &str) -> String {
    [
        "Admin Dashboard".to_string(),
        format!("Signed in as {}", user_id),
        String::new(),
        "Sections: Alcohol | Food | QR Code".to_string(),
        "Menu editing and QR generation live in the web dashboard.".to_string(),
    ]
    .join("\n")
}
