use crate::engine::GroupingConfig;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

fn current_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        .to_string()
}

/// One formed group: member ids in join order plus the accumulated affinity
/// of every greedy pick (seeds contribute nothing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupAssignment {
    pub members: Vec<Uuid>,
    pub affinity_score: f32,
}

impl GroupAssignment {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The persistable outcome of one grouping run over a cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingReport {
    pub id: Uuid,
    pub cohort_id: Uuid,
    pub assignment_id: Uuid,
    pub created_at: String,
    pub group_size: usize,
    pub alpha: f32,
    pub beta: f32,
    pub groups: Vec<GroupAssignment>,
}

impl GroupingReport {
    pub fn new(
        cohort_id: Uuid,
        assignment_id: Uuid,
        config: &GroupingConfig,
        groups: Vec<GroupAssignment>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            cohort_id,
            assignment_id,
            created_at: current_timestamp(),
            group_size: config.group_size,
            alpha: config.alpha,
            beta: config.beta,
            groups,
        }
    }

    pub fn student_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }
}
