use crate::vector::StudentVector;
use crate::{GroupingError, Result};
use ndarray::Array1;

fn check_shape(v1: &Array1<f32>, v2: &Array1<f32>) -> Result<()> {
    if v1.len() != v2.len() {
        return Err(GroupingError::ShapeMismatch(format!(
            "vectors have lengths {} and {}",
            v1.len(),
            v2.len()
        )));
    }
    if v1.is_empty() {
        return Err(GroupingError::ShapeMismatch(
            "vectors must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Mean squared elementwise difference. Zero iff the vectors are identical.
pub fn mean_squared_difference(v1: &Array1<f32>, v2: &Array1<f32>) -> Result<f32> {
    check_shape(v1, v2)?;
    let diff = v1 - v2;
    Ok(diff.dot(&diff) / v1.len() as f32)
}

/// Mean absolute elementwise difference. Less sensitive to single-question
/// outliers than the squared variant.
pub fn mean_absolute_difference(v1: &Array1<f32>, v2: &Array1<f32>) -> Result<f32> {
    check_shape(v1, v2)?;
    let diff = v1 - v2;
    Ok(diff.iter().map(|x| x.abs()).sum::<f32>() / v1.len() as f32)
}

/// Cosine of the angle between two vectors. Returns 0.0 when either vector
/// has zero magnitude, since the angle is undefined there.
pub fn cosine_similarity(v1: &Array1<f32>, v2: &Array1<f32>) -> Result<f32> {
    check_shape(v1, v2)?;
    let dot_product = v1.dot(v2);
    let norm1 = v1.dot(v1).sqrt();
    let norm2 = v2.dot(v2).sqrt();

    if norm1 == 0.0 || norm2 == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm1 * norm2))
    }
}

/// Gaussian kernel averaged over dimensions. Every term lies in (0, 1], so
/// the result saturates instead of letting one divergent trait dominate.
/// Identical vectors score exactly 1.0 for any gamma.
pub fn rbf_similarity(v1: &Array1<f32>, v2: &Array1<f32>, gamma: f32) -> Result<f32> {
    check_shape(v1, v2)?;
    let sum: f32 = v1
        .iter()
        .zip(v2.iter())
        .map(|(a, b)| (-gamma * (a - b) * (a - b)).exp())
        .sum();
    Ok(sum / v1.len() as f32)
}

pub fn generate_random_students(
    score_dim: usize,
    persona_dim: usize,
    num: usize,
) -> Vec<StudentVector> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            let scores = Array1::from_vec(
                (0..score_dim)
                    .map(|_| rng.gen_range(0.0..1.0))
                    .collect::<Vec<f32>>(),
            );
            let persona = Array1::from_vec(
                (0..persona_dim)
                    .map(|_| rng.gen_range(0.0..1.0))
                    .collect::<Vec<f32>>(),
            );
            StudentVector::new(scores, persona)
        })
        .collect()
}
