use crate::domain::model::{CostReport, Scenario};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn services(&self) -> Option<u32>;
    fn replicas(&self) -> Option<u32>;
    fn usage_hours(&self) -> Option<f64>;
    fn cost_per_hour(&self) -> Option<f64>;
    fn batch_file(&self) -> Option<&str>;
    fn output_file(&self) -> Option<&str>;
    fn json_output(&self) -> bool;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<Scenario>>;
    fn transform(&self, scenarios: Vec<Scenario>) -> Result<Vec<CostReport>>;
    fn load(&self, reports: Vec<CostReport>) -> Result<Option<String>>;
}
