use crate::core::calculator::compute_cost_report;
use crate::domain::model::{CostReport, Scenario};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::output;
use crate::utils::error::{CalcError, Result};

pub struct SinglePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SinglePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SinglePipeline<S, C> {
    fn extract(&self) -> Result<Vec<Scenario>> {
        match (
            self.config.services(),
            self.config.replicas(),
            self.config.usage_hours(),
            self.config.cost_per_hour(),
        ) {
            (Some(services), Some(replicas), Some(usage_hours), Some(cost_per_hour)) => {
                Ok(vec![Scenario {
                    name: None,
                    services,
                    replicas,
                    usage_hours,
                    cost_per_hour,
                }])
            }
            _ => Err(CalcError::MissingArguments {
                message: "single calculation requires --services, --replicas, --usage-hours and --cost-per-hour".to_string(),
            }),
        }
    }

    fn transform(&self, scenarios: Vec<Scenario>) -> Result<Vec<CostReport>> {
        scenarios
            .into_iter()
            .map(|scenario| compute_cost_report(scenario.into_inputs()))
            .collect()
    }

    fn load(&self, reports: Vec<CostReport>) -> Result<Option<String>> {
        let report = reports.first().ok_or_else(|| CalcError::MissingArguments {
            message: "no calculation result to report".to_string(),
        })?;

        if self.config.json_output() {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            print!("{}", output::text::render_report(report));
        }

        if let Some(path) = self.config.output_file() {
            let data = output::csv::single_report(report)?;
            self.storage.write_file(path, &data)?;
            return Ok(Some(path.to_string()));
        }

        Ok(None)
    }
}
