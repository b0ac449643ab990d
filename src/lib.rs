pub mod engine;
pub mod group;
pub mod orchestrator;
pub mod persistence;
pub mod storage;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
    #[error("Insufficient Students: {0}")]
    InsufficientStudents(String),
    #[error("Missing Vector: {0}")]
    MissingVector(String),
    #[error("Source Error: {0}")]
    SourceError(String),
    #[error("Persistence Error: {0}")]
    PersistenceError(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GroupingError>;

// Re-export main types for convenience
pub use engine::{GroupFormationEngine, GroupingConfig, PersonaKernel, ScoreMetric};
pub use group::{GroupAssignment, GroupingReport};
pub use orchestrator::GroupingOrchestrator;
pub use persistence::ReportFile;
pub use storage::{CohortSource, InMemoryCohort, InMemoryReportSink, ReportSink};
pub use utils::{
    cosine_similarity, mean_absolute_difference, mean_squared_difference, rbf_similarity,
};
pub use vector::StudentVector;
