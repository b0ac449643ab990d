use grouping_engine::{
    engine::GroupingConfig,
    orchestrator::GroupingOrchestrator,
    persistence::ReportFile,
    storage::InMemoryCohort,
};
use rand::{rngs::StdRng, SeedableRng};
use uuid::Uuid;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎓 Student Grouping Demo");
    println!("========================\n");

    // Build a small cohort with score and persona vectors
    let cohort_id = Uuid::new_v4();
    let mut cohort = InMemoryCohort::new(cohort_id);

    println!("📊 Registering 12 students...");
    for i in 0..12 {
        let t = i as f32 / 12.0;
        cohort.add_student(
            Uuid::new_v4(),
            vec![t, 1.0 - t, 0.5 + t / 2.0, t * t],
            vec![1.0 - t, t, 0.3, 0.8, t / 2.0],
        );
    }
    println!("  Registered {} students", cohort.student_count());

    // Form groups of 3 with a fixed seed so reruns match
    let orchestrator = GroupingOrchestrator::new(&cohort);
    let config = GroupingConfig::new(3, 0.7, 0.3);
    let mut rng = StdRng::seed_from_u64(42);

    let temp_path = std::env::temp_dir().join("demo_grouping_report.json");
    let mut sink = ReportFile::new(&temp_path);

    println!("\n👥 Forming groups of {}...", config.group_size);
    let report = orchestrator.run(&cohort_id, &config, &mut rng, &mut sink)?;

    for (i, group) in report.groups.iter().enumerate() {
        println!(
            "  Group {} ({} members) - Affinity: {:.4}",
            i + 1,
            group.members.len(),
            group.affinity_score
        );
        for member in &group.members {
            println!("    {}", member);
        }
    }

    // Reload the persisted report
    println!("\n💾 Reloading persisted report...");
    let loaded = sink.load()?;
    println!(
        "  Loaded report {} with {} groups covering {} students",
        loaded.id,
        loaded.groups.len(),
        loaded.student_count()
    );
    assert_eq!(loaded.id, report.id);

    // Cleanup
    sink.clear()?;
    println!("\n🧹 Cleaned up temporary files");

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
