use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Option<String>> {
        tracing::debug!("Loading scenarios...");
        let scenarios = self.pipeline.extract()?;
        tracing::debug!("Loaded {} scenario(s)", scenarios.len());

        tracing::debug!("Computing cost reports...");
        let reports = self.pipeline.transform(scenarios)?;
        tracing::debug!("Computed {} report(s)", reports.len());

        self.pipeline.load(reports)
    }
}
