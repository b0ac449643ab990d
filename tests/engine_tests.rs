use grouping_engine::{
    engine::{GroupFormationEngine, GroupingConfig},
    utils::{
        cosine_similarity, mean_absolute_difference, mean_squared_difference, rbf_similarity,
    },
    vector::StudentVector,
    GroupingError,
};
use ndarray::Array1;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

fn student(scores: Vec<f32>, persona: Vec<f32>) -> StudentVector {
    StudentVector::new(Array1::from_vec(scores), Array1::from_vec(persona))
}

#[test]
fn test_mean_squared_difference() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(mean_squared_difference(&a, &a).unwrap(), 0.0);

    let b = Array1::from_vec(vec![0.0, 0.0]);
    let c = Array1::from_vec(vec![1.0, 1.0]);
    assert_eq!(mean_squared_difference(&b, &c).unwrap(), 1.0);
}

#[test]
fn test_mean_absolute_difference() {
    let a = Array1::from_vec(vec![0.0, 0.5]);
    let b = Array1::from_vec(vec![1.0, 0.5]);
    assert_eq!(mean_absolute_difference(&a, &b).unwrap(), 0.5);
}

#[test]
fn test_cosine_similarity_axes() {
    let x = Array1::from_vec(vec![1.0, 0.0]);
    let y = Array1::from_vec(vec![0.0, 1.0]);

    assert_eq!(cosine_similarity(&x, &x).unwrap(), 1.0); // Same direction
    assert_eq!(cosine_similarity(&x, &y).unwrap(), 0.0); // Perpendicular vectors
}

#[test]
fn test_cosine_similarity_zero_vector() {
    let zero = Array1::from_vec(vec![0.0, 0.0]);
    let x = Array1::from_vec(vec![1.0, 0.0]);

    assert_eq!(cosine_similarity(&zero, &x).unwrap(), 0.0);
}

#[test]
fn test_rbf_similarity_identical_vectors() {
    let v = Array1::from_vec(vec![0.2, 0.9, 0.4]);

    assert_eq!(rbf_similarity(&v, &v, 4.5).unwrap(), 1.0);
    assert_eq!(rbf_similarity(&v, &v, 0.1).unwrap(), 1.0);
}

#[test]
fn test_rbf_similarity_decays_with_distance() {
    let origin = Array1::from_vec(vec![0.0, 0.0]);
    let near = Array1::from_vec(vec![0.1, 0.1]);
    let far = Array1::from_vec(vec![0.9, 0.9]);

    let sim_near = rbf_similarity(&origin, &near, 4.5).unwrap();
    let sim_far = rbf_similarity(&origin, &far, 4.5).unwrap();

    assert!(sim_near > sim_far);
    assert!(sim_far > 0.0);
    assert!(sim_near < 1.0);
}

#[test]
fn test_shape_mismatch_rejected() {
    let two = Array1::from_vec(vec![1.0, 2.0]);
    let three = Array1::from_vec(vec![1.0, 2.0, 3.0]);

    assert!(matches!(
        mean_squared_difference(&two, &three),
        Err(GroupingError::ShapeMismatch(_))
    ));
    assert!(matches!(
        mean_absolute_difference(&two, &three),
        Err(GroupingError::ShapeMismatch(_))
    ));
    assert!(matches!(
        cosine_similarity(&two, &three),
        Err(GroupingError::ShapeMismatch(_))
    ));
    assert!(matches!(
        rbf_similarity(&two, &three, 4.5),
        Err(GroupingError::ShapeMismatch(_))
    ));
}

#[test]
fn test_insufficient_students() {
    let students: Vec<_> = (0..3).map(|_| student(vec![0.5; 4], vec![0.5; 4])).collect();
    let engine = GroupFormationEngine::new(GroupingConfig::new(5, 0.7, 0.3));
    let mut rng = StdRng::seed_from_u64(1);

    let err = engine.form_groups(&students, &mut rng).unwrap_err();
    assert!(matches!(err, GroupingError::InsufficientStudents(_)));
}

#[test]
fn test_group_size_below_two() {
    let students: Vec<_> = (0..6).map(|_| student(vec![0.5; 4], vec![0.5; 4])).collect();
    let engine = GroupFormationEngine::new(GroupingConfig::new(1, 0.7, 0.3));
    let mut rng = StdRng::seed_from_u64(1);

    let err = engine.form_groups(&students, &mut rng).unwrap_err();
    assert!(matches!(err, GroupingError::InsufficientStudents(_)));
}

#[test]
fn test_mismatched_cohort_rejected() {
    let mut students: Vec<_> = (0..5).map(|_| student(vec![0.5; 4], vec![0.5; 4])).collect();
    students.push(student(vec![0.5; 3], vec![0.5; 4]));

    let engine = GroupFormationEngine::new(GroupingConfig::new(2, 0.7, 0.3));
    let mut rng = StdRng::seed_from_u64(1);

    let err = engine.form_groups(&students, &mut rng).unwrap_err();
    assert!(matches!(err, GroupingError::ShapeMismatch(_)));
}

#[test]
fn test_completeness_and_group_count() {
    // 10 students into groups of 3: ceiling rounding gives 4 groups whose
    // sizes sum to 10, none larger than 3.
    let students: Vec<_> = (0..10)
        .map(|i| {
            let t = i as f32 / 10.0;
            student(vec![t, 1.0 - t, t * t, 0.5], vec![0.5, t, 1.0 - t, 0.25])
        })
        .collect();

    let engine = GroupFormationEngine::new(GroupingConfig::new(3, 0.7, 0.3));
    let mut rng = StdRng::seed_from_u64(99);
    let groups = engine.form_groups(&students, &mut rng).unwrap();

    assert_eq!(groups.len(), 4);
    assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), 10);
    for group in &groups {
        assert!(group.len() <= 3);
        assert!(!group.is_empty());
    }

    let input_ids: HashSet<_> = students.iter().map(|s| s.id).collect();
    let output_ids: HashSet<_> = groups.iter().flat_map(|g| g.members.clone()).collect();
    assert_eq!(input_ids, output_ids);
    assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), output_ids.len());
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let students: Vec<_> = (0..15)
        .map(|i| {
            let t = i as f32 / 15.0;
            student(
                vec![t, 1.0 - t, 0.5 + t / 2.0, t * t, 0.3],
                vec![1.0 - t, 0.4, t, 0.9 - t, 0.6],
            )
        })
        .collect();

    let engine = GroupFormationEngine::new(GroupingConfig::new(4, 0.6, 0.4));

    let mut rng1 = StdRng::seed_from_u64(2024);
    let mut rng2 = StdRng::seed_from_u64(2024);
    let groups1 = engine.form_groups(&students, &mut rng1).unwrap();
    let groups2 = engine.form_groups(&students, &mut rng2).unwrap();

    assert_eq!(groups1.len(), groups2.len());
    for (g1, g2) in groups1.iter().zip(groups2.iter()) {
        assert_eq!(g1.members, g2.members);
        assert_eq!(g1.affinity_score, g2.affinity_score);
    }
}

#[test]
fn test_pairs_maximize_affinity() {
    // Two archetypes with identical personas: five students scoring all
    // zeros, five scoring all ones. Cross-archetype affinity is
    // 0.7 * 1.0 + 0.3 * 1.0 = 1.0 versus 0.3 within an archetype, so every
    // pair must mix the two regardless of which seeds the RNG draws, and
    // every accumulated affinity must equal the cross-pair value.
    let low: Vec<_> = (0..5).map(|_| student(vec![0.0; 5], vec![0.5; 5])).collect();
    let high: Vec<_> = (0..5).map(|_| student(vec![1.0; 5], vec![0.5; 5])).collect();
    let low_ids: HashSet<_> = low.iter().map(|s| s.id).collect();

    let mut students = low;
    students.extend(high);

    let engine = GroupFormationEngine::new(GroupingConfig::new(2, 0.7, 0.3));
    let mut rng = StdRng::seed_from_u64(7);
    let groups = engine.form_groups(&students, &mut rng).unwrap();

    assert_eq!(groups.len(), 5);
    for group in &groups {
        assert_eq!(group.len(), 2);
        let low_members = group
            .members
            .iter()
            .filter(|id| low_ids.contains(id))
            .count();
        assert_eq!(low_members, 1);
        assert!((group.affinity_score - 1.0).abs() < 1e-5);
    }
}
