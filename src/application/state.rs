//! Application state shared by the dashboard widgets

use crate::model::portfolio::RiskLevel;
use serde::{Deserialize, Serialize};

/// Default investment amount shown before onboarding
pub const DEFAULT_AMOUNT: f64 = 124_500.0;
/// Default investment goal
pub const DEFAULT_GOAL: &str = "Wealth Generation";

/// Investor profile entered at onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Amount invested
    pub amount: f64,
    /// Risk appetite
    pub risk: RiskLevel,
    /// Investment goal
    pub goal: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            risk: RiskLevel::Medium,
            goal: DEFAULT_GOAL.to_string(),
        }
    }
}

/// Onboarding form; empty or invalid fields keep the current value
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    /// Raw amount as typed
    pub amount: Option<String>,
    /// Raw risk level as selected
    pub risk: Option<String>,
    /// Goal as typed
    pub goal: Option<String>,
}

impl UserProfile {
    /// Merges `input` into the profile
    pub fn apply(&mut self, input: &ProfileInput) {
        if let Some(amount) = input
            .amount
            .as_deref()
            .and_then(|a| a.replace(',', "").trim().parse::<f64>().ok())
            .filter(|a| a.is_finite() && *a > 0.0)
        {
            self.amount = amount;
        }
        if let Some(risk) = input.risk.as_deref().and_then(|r| r.parse::<RiskLevel>().ok()) {
            self.risk = risk;
        }
        if let Some(goal) = input.goal.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            self.goal = goal.to_string();
        }
    }

    /// Payload sent to the quantum shield
    #[must_use]
    pub fn shield_payload(&self) -> String {
        format!("state_{}_{}", self.risk, self.amount)
    }
}

/// Explicit state handed to a dashboard; independent instances do not interact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Investor profile
    pub profile: UserProfile,
}

impl AppState {
    /// State for `profile`
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}
