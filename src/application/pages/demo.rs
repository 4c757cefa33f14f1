use crate::application::context::AppContext;
use crate::application::pages::{FormState, Navigation, Route};
use crate::error::AppError;
use crate::session::auth::Auth;

/// Shown when the backend rejects the demo login
pub const DEMO_REJECTED: &str = "Failed to launch demo. The server might be offline.";
/// Shown when the backend cannot be reached
pub const DEMO_NETWORK_ERROR: &str = "Network error. Is the backend server running?";

/// Inline message for a failed demo launch
#[must_use]
pub fn demo_error_message(error: &AppError) -> &'static str {
    if error.is_transport() {
        DEMO_NETWORK_ERROR
    } else {
        DEMO_REJECTED
    }
}

/// One-click login with the demo account
pub struct DemoPage {
    auth: Auth,
    form: FormState,
}

impl DemoPage {
    /// Demo launcher over the context's backend and store
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            auth: Auth::new(ctx.api.clone(), ctx.store.clone(), ctx.config.clone()),
            form: FormState::default(),
        }
    }

    /// Form state
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Logs in with the demo account and navigates to the dashboard
    pub async fn launch(&mut self) -> Navigation {
        self.form.error = None;
        self.form.loading = true;

        let outcome = self.auth.login_demo().await;
        self.form.loading = false;

        match outcome {
            Ok(_) => Navigation::GoTo(Route::Dashboard),
            Err(e) => {
                self.form.error = Some(demo_error_message(&e).to_string());
                Navigation::Stay
            }
        }
    }
}
