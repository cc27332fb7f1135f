use mf_core::{BotId, Chip, OutputId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{0} holds two chips but has no routing rule")]
    MissingRule(BotId),

    #[error("{output} already holds chip {existing}; refusing to overwrite with {incoming}")]
    OutputOccupied {
        output:   OutputId,
        existing: Chip,
        incoming: Chip,
    },

    #[error("no quiescence after {0} passes; the routing graph likely cycles")]
    PassLimit(u64),
}

pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur when writing an output report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}
