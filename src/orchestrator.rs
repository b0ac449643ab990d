use crate::engine::{GroupFormationEngine, GroupingConfig};
use crate::group::GroupingReport;
use crate::storage::{CohortSource, ReportSink};
use crate::vector::StudentVector;
use crate::{GroupingError, Result};
use ndarray::Array1;
use rand::Rng;
use uuid::Uuid;

/// Boundary layer: joins the cohort's data into StudentVectors, runs the
/// engine, and hands the stamped report to a sink.
pub struct GroupingOrchestrator<'a> {
    source: &'a dyn CohortSource,
}

impl<'a> GroupingOrchestrator<'a> {
    pub fn new(source: &'a dyn CohortSource) -> Self {
        Self { source }
    }

    /// Joins the latest assignment's score rows with the cohort's persona
    /// embeddings. Every scored student must already have an embedding; a
    /// missing one fails the whole attempt rather than silently shrinking
    /// the cohort and skewing group sizes.
    pub fn resolve_students(&self, cohort_id: &Uuid) -> Result<(Uuid, Vec<StudentVector>)> {
        let assignment_id = self.source.latest_assignment_id(cohort_id)?;
        let scores = self.source.score_vectors(cohort_id, &assignment_id)?;
        if scores.is_empty() {
            return Err(GroupingError::MissingVector(format!(
                "no scores recorded for assignment {} in cohort {}",
                assignment_id, cohort_id
            )));
        }
        let mut personas = self.source.persona_vectors(cohort_id)?;

        // Sort ids so resolution order does not depend on map iteration.
        let mut ids: Vec<Uuid> = scores.keys().copied().collect();
        ids.sort();

        let mut students = Vec::with_capacity(ids.len());
        for id in ids {
            let score = scores[&id].clone();
            let persona = personas.remove(&id).ok_or_else(|| {
                GroupingError::MissingVector(format!("student {} has no persona embedding", id))
            })?;
            students.push(StudentVector::with_id(
                id,
                Array1::from_vec(score),
                Array1::from_vec(persona),
            ));
        }

        Ok((assignment_id, students))
    }

    pub fn run<R: Rng>(
        &self,
        cohort_id: &Uuid,
        config: &GroupingConfig,
        rng: &mut R,
        sink: &mut dyn ReportSink,
    ) -> Result<GroupingReport> {
        let (assignment_id, students) = self.resolve_students(cohort_id)?;

        let engine = GroupFormationEngine::new(*config);
        let groups = engine.form_groups(&students, rng)?;

        let report = GroupingReport::new(*cohort_id, assignment_id, config, groups);
        sink.persist_report(&report)?;

        Ok(report)
    }
}
