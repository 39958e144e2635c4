pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{
    batch::{run_batch, BatchPipeline},
    calculator::compute_cost_report,
    engine::ReportEngine,
    pipeline::SinglePipeline,
};
pub use crate::domain::model::{CostInputs, CostReport, DeploymentCosts, Savings, Scenario};
pub use crate::utils::error::{CalcError, Result};
