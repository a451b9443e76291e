use std::collections::BTreeMap;

use disk_head_sim::{DiskScheduler, DiskSchedulerTrait, Policy, Summary};

fn sample_summary() -> Summary {
    let scheduler = DiskScheduler::new(200, vec![50, 180, 30, 120], 100).unwrap();
    Summary::from_results(&scheduler.run_all()).unwrap()
}

#[test]
fn test_best_and_worst() {
    // FCFS 420, SCAN 230, C-SCAN 348
    let summary = sample_summary();
    assert_eq!(summary.best, Policy::Scan);
    assert_eq!(summary.worst, Policy::Fcfs);
    assert_eq!(summary.best_movement(), 230);
    assert_eq!(summary.worst_movement(), 420);
    assert_eq!(summary.difference, 190);
    assert!((summary.improvement - 190.0 / 420.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_efficiency_relative_to_best() {
    let summary = sample_summary();
    let scan = summary.stats(Policy::Scan).unwrap();
    assert!((scan.efficiency - 100.0).abs() < 1e-9);
    let fcfs = summary.stats(Policy::Fcfs).unwrap();
    assert!((fcfs.efficiency - 230.0 / 420.0 * 100.0).abs() < 1e-9);
    assert!((fcfs.average_movement - 105.0).abs() < 1e-9);
}

#[test]
fn test_ties_keep_first_policy() {
    let scheduler = DiskScheduler::new(10, vec![], 4).unwrap();
    let summary = Summary::from_results(&scheduler.run_all()).unwrap();
    // FCFS and SCAN never move; C-SCAN still seeks to the last cylinder
    assert_eq!(summary.best, Policy::Fcfs);
    assert_eq!(summary.worst, Policy::CScan);
    assert_eq!(summary.stats(Policy::Scan).unwrap().efficiency, 100.0);
}

#[test]
fn test_empty_results() {
    assert!(Summary::from_results(&BTreeMap::new()).is_none());
}

#[test]
fn test_summary_serializes_policy_names() {
    let json = serde_json::to_string(&sample_summary()).unwrap();
    assert!(json.contains("\"best\":\"SCAN\""));
    assert!(json.contains("\"C-SCAN\""));
}

#[test]
fn test_display_lists_every_policy() {
    let text = sample_summary().to_string();
    for policy in Policy::ALL {
        assert!(text.contains(&format!("{}:", policy)));
    }
    assert!(text.contains("Best policy:  SCAN (230 cylinders)"));
}
