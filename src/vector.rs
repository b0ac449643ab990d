use ndarray::Array1;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One student's grouping inputs: a normalized per-question score vector for
/// the cohort's latest assignment and a personality-trait embedding produced
/// externally from the student's free-text description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentVector {
    pub id: Uuid,
    pub scores: Array1<f32>,
    pub persona: Array1<f32>,
}

impl StudentVector {
    pub fn new(scores: Array1<f32>, persona: Array1<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            scores,
            persona,
        }
    }

    pub fn with_id(id: Uuid, scores: Array1<f32>, persona: Array1<f32>) -> Self {
        Self {
            id,
            scores,
            persona,
        }
    }

    pub fn score_dimension(&self) -> usize {
        self.scores.len()
    }

    pub fn persona_dimension(&self) -> usize {
        self.persona.len()
    }
}
