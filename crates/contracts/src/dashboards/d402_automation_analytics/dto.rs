use serde::{Deserialize, Serialize};

/// Период отчёта о производительности
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
        }
    }
}

/// The analytics endpoints have no fixed schema; payloads stay JSON.
pub type AutomationMetrics = serde_json::Value;
pub type PerformanceReport = serde_json::Value;
pub type SystemHealth = serde_json::Value;
