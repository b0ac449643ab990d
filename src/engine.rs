use crate::group::GroupAssignment;
use crate::utils::{
    cosine_similarity, mean_absolute_difference, mean_squared_difference, rbf_similarity,
};
use crate::vector::StudentVector;
use crate::{GroupingError, Result};
use rand::Rng;

pub const DEFAULT_RBF_GAMMA: f32 = 4.5;

/// Distance applied to academic score vectors. Larger means further apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreMetric {
    MeanSquared,
    MeanAbsolute,
}

/// Similarity kernel applied to persona vectors. Larger means more alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PersonaKernel {
    Cosine,
    Rbf { gamma: f32 },
}

#[derive(Debug, Clone, Copy)]
pub struct GroupingConfig {
    pub group_size: usize,
    pub alpha: f32,
    pub beta: f32,
    pub score_metric: ScoreMetric,
    pub persona_kernel: PersonaKernel,
}

impl GroupingConfig {
    pub fn new(group_size: usize, alpha: f32, beta: f32) -> Self {
        Self {
            group_size,
            alpha,
            beta,
            score_metric: ScoreMetric::MeanSquared,
            persona_kernel: PersonaKernel::Rbf {
                gamma: DEFAULT_RBF_GAMMA,
            },
        }
    }
}

/// Partitions a cohort into groups by seeded greedy chaining: each group is
/// seeded with a random student, then grows by repeatedly pulling the pooled
/// student with the highest affinity to the group's most-recently-added
/// member. The RNG is injected so callers can fix a seed and reproduce a run.
pub struct GroupFormationEngine {
    config: GroupingConfig,
}

impl GroupFormationEngine {
    pub fn new(config: GroupingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Weighted affinity between two students: score distance plus persona
    /// similarity. High-affinity pairs mix academic levels while keeping
    /// compatible personalities together.
    pub fn affinity(&self, a: &StudentVector, b: &StudentVector) -> Result<f32> {
        let score_distance = match self.config.score_metric {
            ScoreMetric::MeanSquared => mean_squared_difference(&a.scores, &b.scores)?,
            ScoreMetric::MeanAbsolute => mean_absolute_difference(&a.scores, &b.scores)?,
        };
        let persona_similarity = match self.config.persona_kernel {
            PersonaKernel::Cosine => cosine_similarity(&a.persona, &b.persona)?,
            PersonaKernel::Rbf { gamma } => rbf_similarity(&a.persona, &b.persona, gamma)?,
        };
        Ok(self.config.alpha * score_distance + self.config.beta * persona_similarity)
    }

    pub fn form_groups<R: Rng>(
        &self,
        students: &[StudentVector],
        rng: &mut R,
    ) -> Result<Vec<GroupAssignment>> {
        let n = students.len();
        let group_size = self.config.group_size;

        if group_size < 2 {
            return Err(GroupingError::InsufficientStudents(format!(
                "group size must be at least 2, got {}",
                group_size
            )));
        }
        if n < group_size {
            return Err(GroupingError::InsufficientStudents(format!(
                "{} students cannot fill a group of {}",
                n, group_size
            )));
        }
        validate_cohort(students)?;

        // Ceiling division: no group ever exceeds group_size, trailing
        // groups run short when the cohort does not divide evenly.
        let num_groups = (n + group_size - 1) / group_size;

        // Remaining pool held as indices; swap_remove keeps removal O(1).
        let mut pool: Vec<usize> = (0..n).collect();
        let mut members: Vec<Vec<usize>> = Vec::with_capacity(num_groups);
        let mut tails: Vec<usize> = Vec::with_capacity(num_groups);
        let mut totals: Vec<f32> = vec![0.0; num_groups];

        // Seed every group with a random student before any growth.
        for _ in 0..num_groups {
            let seed = pool.swap_remove(rng.gen_range(0..pool.len()));
            members.push(vec![seed]);
            tails.push(seed);
        }

        // Round-robin growth: each group extends its chain by the pooled
        // student with the highest affinity to its last-added member. Ties
        // go to the first pool index encountered.
        while !pool.is_empty() {
            for g in 0..num_groups {
                if pool.is_empty() {
                    break;
                }
                let tail = &students[tails[g]];
                let mut best = 0;
                let mut best_affinity = self.affinity(tail, &students[pool[0]])?;
                for (i, &candidate) in pool.iter().enumerate().skip(1) {
                    let affinity = self.affinity(tail, &students[candidate])?;
                    if affinity > best_affinity {
                        best = i;
                        best_affinity = affinity;
                    }
                }
                let chosen = pool.swap_remove(best);
                members[g].push(chosen);
                tails[g] = chosen;
                totals[g] += best_affinity;
            }
        }

        Ok(members
            .into_iter()
            .zip(totals)
            .map(|(indices, affinity_score)| GroupAssignment {
                members: indices.into_iter().map(|i| students[i].id).collect(),
                affinity_score,
            })
            .collect())
    }
}

fn validate_cohort(students: &[StudentVector]) -> Result<()> {
    let first = &students[0];
    for student in &students[1..] {
        if student.score_dimension() != first.score_dimension() {
            return Err(GroupingError::ShapeMismatch(format!(
                "student {} has a {}-dimensional score vector, expected {}",
                student.id,
                student.score_dimension(),
                first.score_dimension()
            )));
        }
        if student.persona_dimension() != first.persona_dimension() {
            return Err(GroupingError::ShapeMismatch(format!(
                "student {} has a {}-dimensional persona vector, expected {}",
                student.id,
                student.persona_dimension(),
                first.persona_dimension()
            )));
        }
    }
    Ok(())
}
