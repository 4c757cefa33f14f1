use crate::application::commands::{CommandKind, Control, ControlHandle};
use crate::application::context::AppContext;
use crate::application::pages::normalize_symbol;
use crate::application::widget::Widget;
use crate::constants::{
    COMPARE_BUSY_LABEL, COMPARE_IDLE_LABEL, COMPARE_PATH, PREDICT_BUSY_LABEL, PREDICT_IDLE_LABEL,
    PREDICT_PATH,
};
use crate::error::AppError;
use crate::model::analysis::{CompareRequest, Comparison, Prediction};
use crate::transport::http_client::decode;
use tracing::{info, warn};

/// Stock prediction and comparison page; open to anonymous users
pub struct AnalysisPage {
    ctx: AppContext,
    prediction: Widget<Prediction>,
    comparison: Widget<Comparison>,
    predict: ControlHandle,
    compare: ControlHandle,
}

impl AnalysisPage {
    /// Builds the page; nothing is fetched until a command runs
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        let policy = ctx.config.apply_policy;
        Self {
            ctx: ctx.clone(),
            prediction: Widget::new("prediction", policy),
            comparison: Widget::new("comparison", policy),
            predict: ControlHandle::new(CommandKind::Predict, PREDICT_IDLE_LABEL),
            compare: ControlHandle::new(CommandKind::Compare, COMPARE_IDLE_LABEL),
        }
    }

    /// Prediction widget
    #[must_use]
    pub fn prediction(&self) -> &Widget<Prediction> {
        &self.prediction
    }

    /// Comparison widget
    #[must_use]
    pub fn comparison(&self) -> &Widget<Comparison> {
        &self.comparison
    }

    /// State of the predict button
    pub async fn predict_control(&self) -> Control {
        self.predict.snapshot().await
    }

    /// State of the compare button
    pub async fn compare_control(&self) -> Control {
        self.compare.snapshot().await
    }

    /// Fetches the forecast for `symbol`
    pub async fn predict(&self, symbol: &str) -> Result<Prediction, AppError> {
        let symbol = normalize_symbol(symbol)?;
        self.predict.begin(PREDICT_BUSY_LABEL, None).await?;

        let path = format!("{PREDICT_PATH}/{symbol}");
        let outcome = self
            .ctx
            .api
            .get(&path, None)
            .await
            .and_then(decode::<Prediction>);
        self.predict.reset().await;

        match outcome {
            Ok(prediction) => {
                self.prediction.set(prediction.clone()).await;
                info!("Prediction for {}: {}", symbol, prediction.prediction);
                Ok(prediction)
            }
            Err(e) => {
                warn!("Prediction for {} failed: {}", symbol, e);
                Err(e)
            }
        }
    }

    /// Compares two stocks
    pub async fn compare(&self, stock_a: &str, stock_b: &str) -> Result<Comparison, AppError> {
        let request = CompareRequest {
            stock_a: normalize_symbol(stock_a)?,
            stock_b: normalize_symbol(stock_b)?,
        };
        let body = serde_json::to_value(&request)?;
        self.compare.begin(COMPARE_BUSY_LABEL, None).await?;

        let outcome = self
            .ctx
            .api
            .post_json(COMPARE_PATH, &body, None)
            .await
            .and_then(decode::<Comparison>);
        self.compare.reset().await;

        match outcome {
            Ok(comparison) => {
                self.comparison.set(comparison.clone()).await;
                info!(
                    "{} vs {}: {} wins",
                    request.stock_a, request.stock_b, comparison.winner
                );
                Ok(comparison)
            }
            Err(e) => {
                warn!("Comparison failed: {}", e);
                Err(e)
            }
        }
    }
}
