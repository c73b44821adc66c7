use tokio::sync::mpsc;

use trailmap::store::{PersistOutcome, ProgressStore};
use trailmap::types::{NodeStatus, StoredStatus};
use trailmap_test_utils::builders::{NodeConfigBuilder, RoadmapFileBuilder};
use trailmap_test_utils::fake_backend::RecordingBackend;
use trailmap_test_utils::{init_tracing, with_timeout};

fn sample_nodes() -> Vec<trailmap::graph::RoadmapNode> {
    RoadmapFileBuilder::new()
        .with_node("basics", NodeConfigBuilder::phase("Basics").build())
        .with_node("html", NodeConfigBuilder::required("HTML").build())
        .with_node(
            "css",
            NodeConfigBuilder::required("CSS").after("html").build(),
        )
        .with_node(
            "sass",
            NodeConfigBuilder::optional("Sass").after("css").build(),
        )
        .build_nodes()
}

fn spawn_store(
    backend: RecordingBackend,
) -> (ProgressStore, mpsc::UnboundedReceiver<PersistOutcome>) {
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let store = ProgressStore::initialize(sample_nodes(), Box::new(backend), outcome_tx);
    (store, outcome_rx)
}

#[tokio::test]
async fn update_is_visible_before_persistence_completes() {
    init_tracing();
    with_timeout(async {
        let (backend, _probe) = RecordingBackend::with_probe();
        let (mut store, _outcomes) = spawn_store(backend);

        for status in [
            NodeStatus::InProgress,
            NodeStatus::Completed,
            NodeStatus::Skipped,
            NodeStatus::Pending,
        ] {
            store.update_node_status("html", status).await;
            // Read back synchronously, without waiting for the worker.
            assert_eq!(store.get_node_by_id("html").unwrap().status, status);
        }

        store.shutdown().await;
    })
    .await;
}

#[tokio::test]
async fn update_eventually_reaches_the_backend() {
    init_tracing();
    with_timeout(async {
        let (backend, probe) = RecordingBackend::with_probe();
        let (mut store, mut outcomes) = spawn_store(backend);

        store.update_node_status("css", NodeStatus::Completed).await;
        store.shutdown().await;

        assert_eq!(
            outcomes.recv().await,
            Some(PersistOutcome::Persisted {
                id: "css".to_string(),
                status: StoredStatus::Completado,
            })
        );
        assert_eq!(probe.stored_status("css"), Some(StoredStatus::Completado));
    })
    .await;
}

#[tokio::test]
async fn unknown_node_update_is_a_noop() {
    init_tracing();
    with_timeout(async {
        let (backend, probe) = RecordingBackend::with_probe();
        let (mut store, _outcomes) = spawn_store(backend);

        let before: Vec<NodeStatus> = store.nodes().iter().map(|n| n.status).collect();
        store
            .update_node_status("missing-id", NodeStatus::Completed)
            .await;
        let after: Vec<NodeStatus> = store.nodes().iter().map(|n| n.status).collect();

        assert_eq!(before, after);
        store.shutdown().await;
        assert!(probe.upserts().is_empty());
    })
    .await;
}

#[tokio::test]
async fn phase_nodes_never_carry_status() {
    init_tracing();
    with_timeout(async {
        let (backend, probe) = RecordingBackend::with_probe();
        let (mut store, _outcomes) = spawn_store(backend);

        store
            .update_node_status("basics", NodeStatus::Completed)
            .await;

        assert_eq!(
            store.get_node_by_id("basics").unwrap().status,
            NodeStatus::Pending
        );
        store.shutdown().await;
        assert!(probe.upserts().is_empty());
    })
    .await;
}

#[tokio::test]
async fn initialize_restores_statuses_from_records() {
    init_tracing();
    with_timeout(async {
        let (backend, probe) = RecordingBackend::with_probe();
        probe.seed("html", StoredStatus::Completado);
        probe.seed("css", StoredStatus::EnProgreso);
        // A record for a node that no longer exists must be ignored.
        probe.seed("flash", StoredStatus::Omitida);

        let (store, _outcomes) = spawn_store(backend);

        assert_eq!(
            store.get_node_by_id("html").unwrap().status,
            NodeStatus::Completed
        );
        assert_eq!(
            store.get_node_by_id("css").unwrap().status,
            NodeStatus::InProgress
        );
        // No record -> default pending.
        assert_eq!(
            store.get_node_by_id("sass").unwrap().status,
            NodeStatus::Pending
        );

        store.shutdown().await;
    })
    .await;
}

#[tokio::test]
async fn reset_pends_tracked_nodes_and_persists_each_one() {
    init_tracing();
    with_timeout(async {
        let (backend, probe) = RecordingBackend::with_probe();
        let (mut store, _outcomes) = spawn_store(backend);

        store.update_node_status("html", NodeStatus::Completed).await;
        store.update_node_status("sass", NodeStatus::Skipped).await;

        store.reset_all_nodes().await;

        for id in ["html", "css", "sass"] {
            assert_eq!(
                store.get_node_by_id(id).unwrap().status,
                NodeStatus::Pending,
                "{id} should be pending after reset"
            );
        }
        // Phase node untouched (it never had a status to begin with).
        assert_eq!(
            store.get_node_by_id("basics").unwrap().status,
            NodeStatus::Pending
        );

        store.shutdown().await;

        // Reset writes one explicit pending record per tracked node and
        // never uses the bulk delete.
        let upserts = probe.upserts();
        let pending_writes = upserts
            .iter()
            .filter(|(_, s)| *s == StoredStatus::Pendiente)
            .count();
        assert_eq!(pending_writes, 3);
        assert_eq!(probe.delete_alls(), 0);
    })
    .await;
}

#[tokio::test]
async fn clear_all_uses_the_bulk_delete() {
    init_tracing();
    with_timeout(async {
        let (backend, probe) = RecordingBackend::with_probe();
        probe.seed("html", StoredStatus::Completado);

        let (mut store, mut outcomes) = spawn_store(backend);
        store.clear_all().await;
        store.shutdown().await;

        assert_eq!(outcomes.recv().await, Some(PersistOutcome::Cleared));
        assert_eq!(probe.record_count(), 0);
        assert_eq!(probe.delete_alls(), 1);
    })
    .await;
}

#[tokio::test]
async fn sequential_updates_apply_in_call_order() {
    init_tracing();
    with_timeout(async {
        let (backend, probe) = RecordingBackend::with_probe();
        let (mut store, _outcomes) = spawn_store(backend);

        store.update_node_status("html", NodeStatus::InProgress).await;
        store.update_node_status("html", NodeStatus::Completed).await;
        assert_eq!(
            store.get_node_by_id("html").unwrap().status,
            NodeStatus::Completed
        );

        store.shutdown().await;

        assert_eq!(
            probe.upserts(),
            vec![
                ("html".to_string(), StoredStatus::EnProgreso),
                ("html".to_string(), StoredStatus::Completado),
            ]
        );
    })
    .await;
}
