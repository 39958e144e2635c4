use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Scenario {index} ('{name}'): {source}")]
    InvalidScenario {
        index: usize,
        name: String,
        source: Box<CalcError>,
    },

    #[error("Malformed scenario file: {message}")]
    MalformedScenarioSource { message: String },

    #[error("Missing required arguments: {message}")]
    MissingArguments { message: String },
}

pub type Result<T> = std::result::Result<T, CalcError>;
