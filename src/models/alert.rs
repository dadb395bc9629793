use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ActionalyzeError, Result};
use crate::models::action::ActionType;

/// User-defined notification trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub ticker: String,
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCondition {
    Above,
    Below,
}

impl PriceCondition {
    fn as_str(&self) -> &'static str {
        match self {
            PriceCondition::Above => "above",
            PriceCondition::Below => "below",
        }
    }
}

/// In-memory alert list, newest first
#[derive(Debug, Clone, Default)]
pub struct AlertBook {
    alerts: Vec<Alert>,
}

impl AlertBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alerts(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.active).count()
    }

    pub fn paused_count(&self) -> usize {
        self.len() - self.active_count()
    }

    /// Adds a "Price above/below $X" alert
    pub fn create_price_alert(
        &mut self,
        ticker: &str,
        condition: PriceCondition,
        target_price: f64,
        active: bool,
    ) -> Result<&Alert> {
        let ticker = normalize_ticker(ticker)?;
        if !target_price.is_finite() {
            return Err(ActionalyzeError::InvalidAlert(format!(
                "Target price must be a number, got {}",
                target_price
            )));
        }

        let alert = Alert {
            id: new_alert_id(),
            ticker,
            condition: format!("Price {} ${}", condition.as_str(), target_price),
            target_price: Some(target_price),
            action_type: None,
            active,
        };
        Ok(self.push_front(alert))
    }

    /// Adds a "<Action> Announced" alert
    pub fn create_action_alert(
        &mut self,
        ticker: &str,
        action_type: ActionType,
        active: bool,
    ) -> Result<&Alert> {
        let ticker = normalize_ticker(ticker)?;

        let alert = Alert {
            id: new_alert_id(),
            ticker,
            condition: format!("{} Announced", action_type),
            target_price: None,
            action_type: Some(action_type),
            active,
        };
        Ok(self.push_front(alert))
    }

    /// Flips the active flag; returns the new state, or None for an unknown id
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let alert = self.alerts.iter_mut().find(|a| a.id == id)?;
        alert.active = !alert.active;
        debug!("Alert {} ({}) is now {}", alert.id, alert.ticker, if alert.active { "active" } else { "paused" });
        Some(alert.active)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        before != self.alerts.len()
    }

    fn push_front(&mut self, alert: Alert) -> &Alert {
        debug!("Created alert {} for {}: {}", alert.id, alert.ticker, alert.condition);
        self.alerts.insert(0, alert);
        &self.alerts[0]
    }
}

fn normalize_ticker(ticker: &str) -> Result<String> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(ActionalyzeError::InvalidAlert("Ticker is required".to_string()));
    }
    Ok(ticker.to_uppercase())
}

fn new_alert_id() -> String {
    Uuid::new_v4().simple().to_string()
}
