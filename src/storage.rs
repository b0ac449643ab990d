use crate::group::GroupingReport;
use crate::{GroupingError, Result};
use std::collections::HashMap;
use uuid::Uuid;

/// Read side of the outside world: score rows and persona embeddings for a
/// cohort. Persona generation (the language-model call) hides behind
/// `persona_vectors`; by the time the engine runs, every embedding must
/// already exist.
pub trait CohortSource {
    fn latest_assignment_id(&self, cohort_id: &Uuid) -> Result<Uuid>;
    fn score_vectors(
        &self,
        cohort_id: &Uuid,
        assignment_id: &Uuid,
    ) -> Result<HashMap<Uuid, Vec<f32>>>;
    fn persona_vectors(&self, cohort_id: &Uuid) -> Result<HashMap<Uuid, Vec<f32>>>;
}

/// Write side: receives the finished report for storage.
pub trait ReportSink {
    fn persist_report(&mut self, report: &GroupingReport) -> Result<()>;
}

pub struct InMemoryCohort {
    cohort_id: Uuid,
    assignment_id: Uuid,
    scores: HashMap<Uuid, Vec<f32>>,
    personas: HashMap<Uuid, Vec<f32>>,
}

impl InMemoryCohort {
    pub fn new(cohort_id: Uuid) -> Self {
        Self {
            cohort_id,
            assignment_id: Uuid::new_v4(),
            scores: HashMap::new(),
            personas: HashMap::new(),
        }
    }

    pub fn assignment_id(&self) -> Uuid {
        self.assignment_id
    }

    pub fn add_student(&mut self, id: Uuid, scores: Vec<f32>, persona: Vec<f32>) {
        self.scores.insert(id, scores);
        self.personas.insert(id, persona);
    }

    /// Insert a score row without a persona embedding, as happens before the
    /// embedding service has processed a student's description.
    pub fn add_scores_only(&mut self, id: Uuid, scores: Vec<f32>) {
        self.scores.insert(id, scores);
    }

    pub fn student_count(&self) -> usize {
        self.scores.len()
    }
}

impl CohortSource for InMemoryCohort {
    fn latest_assignment_id(&self, cohort_id: &Uuid) -> Result<Uuid> {
        if *cohort_id != self.cohort_id {
            return Err(GroupingError::SourceError(format!(
                "unknown cohort {}",
                cohort_id
            )));
        }
        Ok(self.assignment_id)
    }

    fn score_vectors(
        &self,
        cohort_id: &Uuid,
        assignment_id: &Uuid,
    ) -> Result<HashMap<Uuid, Vec<f32>>> {
        if *cohort_id != self.cohort_id {
            return Err(GroupingError::SourceError(format!(
                "unknown cohort {}",
                cohort_id
            )));
        }
        if *assignment_id != self.assignment_id {
            return Err(GroupingError::SourceError(format!(
                "unknown assignment {} for cohort {}",
                assignment_id, cohort_id
            )));
        }
        Ok(self.scores.clone())
    }

    fn persona_vectors(&self, cohort_id: &Uuid) -> Result<HashMap<Uuid, Vec<f32>>> {
        if *cohort_id != self.cohort_id {
            return Err(GroupingError::SourceError(format!(
                "unknown cohort {}",
                cohort_id
            )));
        }
        Ok(self.personas.clone())
    }
}

pub struct InMemoryReportSink {
    reports: Vec<GroupingReport>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    pub fn reports(&self) -> &[GroupingReport] {
        &self.reports
    }

    pub fn count(&self) -> usize {
        self.reports.len()
    }
}

impl ReportSink for InMemoryReportSink {
    fn persist_report(&mut self, report: &GroupingReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}

impl Default for InMemoryReportSink {
    fn default() -> Self {
        Self::new()
    }
}
