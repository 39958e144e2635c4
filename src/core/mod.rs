pub mod batch;
pub mod calculator;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{CostInputs, CostReport, Scenario};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
