pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "knative-cost-calc")]
#[command(about = "Calculate Knative scale-to-zero cost savings with YOUR actual numbers")]
pub struct CliConfig {
    #[arg(long, help = "Number of services")]
    pub services: Option<u32>,

    #[arg(long, help = "Replicas per service")]
    pub replicas: Option<u32>,

    #[arg(long, help = "Actual usage hours per week")]
    pub usage_hours: Option<f64>,

    #[arg(long, help = "Cloud cost per pod-hour ($)")]
    pub cost_per_hour: Option<f64>,

    #[arg(long, help = "JSON file with multiple scenarios")]
    pub batch: Option<String>,

    #[arg(long, help = "Output results as JSON")]
    pub json: bool,

    #[arg(long, help = "Export results to CSV file")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn services(&self) -> Option<u32> {
        self.services
    }

    fn replicas(&self) -> Option<u32> {
        self.replicas
    }

    fn usage_hours(&self) -> Option<f64> {
        self.usage_hours
    }

    fn cost_per_hour(&self) -> Option<f64> {
        self.cost_per_hour
    }

    fn batch_file(&self) -> Option<&str> {
        self.batch.as_deref()
    }

    fn output_file(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn json_output(&self) -> bool {
        self.json
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 批次模式下忽略單次計算的旗標
        if self.batch.is_some() {
            return Ok(());
        }

        let mut missing = Vec::new();
        if self.services.is_none() {
            missing.push("--services");
        }
        if self.replicas.is_none() {
            missing.push("--replicas");
        }
        if self.usage_hours.is_none() {
            missing.push("--usage-hours");
        }
        if self.cost_per_hour.is_none() {
            missing.push("--cost-per-hour");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CalcError::MissingArguments {
                message: format!(
                    "single calculation requires --services, --replicas, --usage-hours and --cost-per-hour (missing: {})",
                    missing.join(", ")
                ),
            })
        }
    }
}
