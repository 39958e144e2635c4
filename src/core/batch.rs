use crate::core::calculator::compute_cost_report;
use crate::domain::model::{CostReport, Scenario};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::output;
use crate::utils::error::{CalcError, Result};

pub const UNNAMED_SCENARIO: &str = "Unnamed";

pub fn load_scenarios(data: &[u8]) -> Result<Vec<Scenario>> {
    serde_json::from_slice::<Vec<Scenario>>(data)
        .map_err(|e| CalcError::MalformedScenarioSource {
            message: e.to_string(),
        })
}

// 依檔案順序逐一計算，遇到第一個無效情境即中止
pub fn run_batch(scenarios: Vec<Scenario>) -> Result<Vec<CostReport>> {
    let mut reports = Vec::with_capacity(scenarios.len());

    for (index, scenario) in scenarios.into_iter().enumerate() {
        let name = scenario
            .name
            .clone()
            .unwrap_or_else(|| UNNAMED_SCENARIO.to_string());

        let report = compute_cost_report(scenario.into_inputs()).map_err(|e| {
            CalcError::InvalidScenario {
                index,
                name: name.clone(),
                source: Box::new(e),
            }
        })?;

        reports.push(report.with_name(name));
    }

    Ok(reports)
}

pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Scenario>> {
        let path = self
            .config
            .batch_file()
            .ok_or_else(|| CalcError::MissingArguments {
                message: "batch mode requires --batch FILE".to_string(),
            })?;

        tracing::debug!("Reading scenario file: {}", path);
        let data = self.storage.read_file(path)?;
        load_scenarios(&data)
    }

    fn transform(&self, scenarios: Vec<Scenario>) -> Result<Vec<CostReport>> {
        run_batch(scenarios)
    }

    fn load(&self, reports: Vec<CostReport>) -> Result<Option<String>> {
        if self.config.json_output() {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                print!("{}", output::text::render_scenario(report));
            }
        }

        if let Some(path) = self.config.output_file() {
            let data = output::csv::batch_report(&reports)?;
            self.storage.write_file(path, &data)?;
            return Ok(Some(path.to_string()));
        }

        Ok(None)
    }
}
