use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    pub services: u32,
    pub replicas: u32,
    pub usage_hours_per_week: f64,
    pub cost_per_unit_hour: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentCosts {
    pub unit_hours_per_week: f64,
    pub cost_per_week: f64,
    pub cost_per_month: f64,
    pub cost_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub per_week: f64,
    pub per_month: f64,
    pub per_year: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub inputs: CostInputs,
    pub always_on: DeploymentCosts,
    pub scale_to_zero: DeploymentCosts,
    pub savings: Savings,
}

impl CostReport {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// 批次檔案的記錄格式（snake_case 欄位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub services: u32,
    pub replicas: u32,
    pub usage_hours: f64,
    pub cost_per_hour: f64,
}

impl Scenario {
    pub fn into_inputs(self) -> CostInputs {
        CostInputs {
            services: self.services,
            replicas: self.replicas,
            usage_hours_per_week: self.usage_hours,
            cost_per_unit_hour: self.cost_per_hour,
        }
    }
}
