use trailmap::store::ProgressCore;
use trailmap::types::NodeStatus;
use trailmap_test_utils::builders::{NodeConfigBuilder, RoadmapFileBuilder};

#[test]
fn two_node_scenario_gives_fifty_percent() {
    let nodes = RoadmapFileBuilder::new()
        .with_node("a", NodeConfigBuilder::required("A").build())
        .with_node("b", NodeConfigBuilder::optional("B").build())
        .build_nodes();

    let mut core = ProgressCore::new(nodes);
    core.set_status("b", NodeStatus::Completed);

    let stats = core.stats();
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.progress_percentage, 50.0);
}

#[test]
fn total_counts_only_required_and_optional_nodes() {
    let nodes = RoadmapFileBuilder::new()
        .with_node("p1", NodeConfigBuilder::phase("Phase 1").build())
        .with_node("p2", NodeConfigBuilder::phase("Phase 2").build())
        .with_node("a", NodeConfigBuilder::required("A").build())
        .with_node("b", NodeConfigBuilder::required("B").build())
        .with_node("c", NodeConfigBuilder::optional("C").build())
        .build_nodes();

    let core = ProgressCore::new(nodes);
    let stats = core.stats();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.required_total, 2);
    assert_eq!(stats.optional_total, 1);
    assert_eq!(stats.pending, 3);
}

#[test]
fn all_phase_roadmap_has_zero_percentage() {
    let nodes = RoadmapFileBuilder::new()
        .with_node("p1", NodeConfigBuilder::phase("Phase 1").build())
        .with_node("p2", NodeConfigBuilder::phase("Phase 2").build())
        .build_nodes();

    let core = ProgressCore::new(nodes);
    let stats = core.stats();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.progress_percentage, 0.0);
}

#[test]
fn per_kind_completion_breakdown() {
    let nodes = RoadmapFileBuilder::new()
        .with_node("a", NodeConfigBuilder::required("A").build())
        .with_node("b", NodeConfigBuilder::required("B").build())
        .with_node("c", NodeConfigBuilder::optional("C").build())
        .with_node("d", NodeConfigBuilder::optional("D").build())
        .build_nodes();

    let mut core = ProgressCore::new(nodes);
    core.set_status("a", NodeStatus::Completed);
    core.set_status("b", NodeStatus::InProgress);
    core.set_status("c", NodeStatus::Completed);
    core.set_status("d", NodeStatus::Skipped);

    let stats = core.stats();
    assert_eq!(stats.required_completed, 1);
    assert_eq!(stats.optional_completed, 1);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.progress_percentage, 50.0);
}

#[test]
fn stats_track_updates_and_resets() {
    let nodes = RoadmapFileBuilder::new()
        .with_node("a", NodeConfigBuilder::required("A").build())
        .with_node("b", NodeConfigBuilder::required("B").build())
        .build_nodes();

    let mut core = ProgressCore::new(nodes);
    core.set_status("a", NodeStatus::Completed);
    core.set_status("b", NodeStatus::Completed);
    assert_eq!(core.stats().progress_percentage, 100.0);

    let requests = core.reset_all();
    assert_eq!(requests.len(), 2);
    assert_eq!(core.stats().completed, 0);
    assert_eq!(core.stats().pending, 2);
}
