use crate::application::context::AppContext;
use crate::application::pages::{FormState, Navigation, Route};
use crate::error::AppError;
use crate::model::auth::Credentials;
use crate::session::auth::Auth;

/// Fallback shown when the backend rejects a login without a detail
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown when the backend cannot be reached
pub const LOGIN_NETWORK_ERROR: &str = "Network error. Please try again.";

/// Inline message for a failed login
///
/// Backend rejections show the backend's own detail verbatim.
#[must_use]
pub fn login_error_message(error: &AppError) -> String {
    match error {
        AppError::Network(_) => LOGIN_NETWORK_ERROR.to_string(),
        AppError::InvalidInput(msg) => msg.clone(),
        other => other
            .detail()
            .map(str::to_string)
            .unwrap_or_else(|| LOGIN_FAILED.to_string()),
    }
}

/// Email/password login form
pub struct LoginPage {
    auth: Auth,
    form: FormState,
}

impl LoginPage {
    /// Login form over the context's backend and store
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

    /// Submits the form
    ///
    /// Success stores the token and navigates to the dashboard; failure stays
    /// on the page with an inline error.
    pub async fn submit(&mut self, email: &str, password: &str) -> Navigation {
        self.form.error = None;
        self.form.loading = true;

        let outcome = self.auth.login(&Credentials::new(email, password)).await;
        self.form.loading = false;

        match outcome {
            Ok(_) => Navigation::GoTo(Route::Dashboard),
            Err(e) => {
                self.form.error = Some(login_error_message(&e));
                Navigation::Stay
            }
        }
    }
}
