// src/lib.rs

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod paths;
pub mod store;
pub mod types;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_and_validate;
use crate::config::model::RoadmapFile;
use crate::db::{MemoryBackend, ProgressBackend, SqliteBackend};
use crate::graph::{RoadmapGraph, RoadmapNode};
use crate::store::{PersistOutcome, ProgressStore};
use crate::types::NodeStatus;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - roadmap loading and validation
/// - backend selection (SQLite / in-memory)
/// - the progress store and its persistence worker
/// - the requested subcommand
pub async fn run(args: CliArgs) -> Result<()> {
    let roadmap = load_and_validate(&args.roadmap)?;

    if let Command::Check = args.command {
        println!(
            "{}: ok ({} nodes)",
            args.roadmap,
            roadmap.node.len()
        );
        return Ok(());
    }

    let nodes = RoadmapNode::list_from_roadmap(&roadmap);
    let graph = RoadmapGraph::from_roadmap(&roadmap);
    let backend = open_backend(&args);

    // Persistence outcomes flow back on this channel; the CLI drains it
    // after shutdown and reports anything that failed to stick.
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<PersistOutcome>();
    let mut store = ProgressStore::initialize(nodes, backend, outcome_tx);

    match args.command {
        Command::Show => print_roadmap(&roadmap, &graph, &store),
        Command::Set { ref node, status } => set_status(&mut store, node, status).await,
        Command::Stats => print_stats(&store),
        Command::Reset { purge } => {
            store.reset_all_nodes().await;
            if purge {
                store.clear_all().await;
            }
            println!("all topics reset to pending{}", if purge { " (records purged)" } else { "" });
        }
        Command::Check => unreachable!("handled above"),
    }

    // Close the request channel and wait for queued writes to be attempted.
    store.shutdown().await;

    while let Ok(outcome) = outcome_rx.try_recv() {
        if let PersistOutcome::Failed { request, error } = outcome {
            warn!(?request, error = %error, "progress was not persisted");
        }
    }

    Ok(())
}

/// Pick the persistence backend for this invocation.
///
/// SQLite open failures degrade to an in-memory backend so that the tool
/// keeps working for the session; the data loss is logged, never fatal.
fn open_backend(args: &CliArgs) -> Box<dyn ProgressBackend> {
    if args.memory {
        info!("using in-memory progress backend");
        return Box::new(MemoryBackend::new());
    }

    let db_path = paths::resolve_db_path(args.db.as_deref());
    match SqliteBackend::open(&db_path) {
        Ok(backend) => Box::new(backend),
        Err(err) => {
            warn!(path = ?db_path, error = %err, "cannot open progress database; progress will not be saved");
            Box::new(MemoryBackend::new())
        }
    }
}

async fn set_status(store: &mut ProgressStore, id: &str, status: NodeStatus) {
    match store.get_node_by_id(id) {
        None => {
            // The store itself treats this as a silent no-op; the CLI is
            // chattier because a typo is the most likely cause.
            println!("no node '{id}' in this roadmap (nothing changed)");
        }
        Some(node) if !node.kind.is_tracked() => {
            println!("'{id}' is a phase marker and does not carry a status");
        }
        Some(node) => {
            let label = node.label.clone();
            store.update_node_status(id, status).await;
            println!("{label}: {status}");
        }
    }
}

/// Render the roadmap as an indented list: roots first, then dependents.
fn print_roadmap(roadmap: &RoadmapFile, graph: &RoadmapGraph, store: &ProgressStore) {
    if let Some(ref title) = roadmap.meta.title {
        println!("{title}");
    }
    if let Some(ref description) = roadmap.meta.description {
        println!("{description}");
    }
    println!();

    for node in store.nodes() {
        let marker = status_marker(node.status);
        let kind = node.kind;
        println!("{marker} {} [{kind}] {}", node.id, node.label);

        if let Some(difficulty) = node.difficulty {
            println!("      difficulty: {difficulty}/5");
        }
        if let Some(ref estimate) = node.estimated_time {
            println!("      estimated: {estimate}");
        }
        if !node.deps.is_empty() {
            println!("      after: {:?}", node.deps);
        }
        let dependents = graph.dependents_of(&node.id);
        if !dependents.is_empty() {
            println!("      unlocks: {dependents:?}");
        }
    }
}

fn status_marker(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Pending => "[ ]",
        NodeStatus::InProgress => "[~]",
        NodeStatus::Completed => "[x]",
        NodeStatus::Skipped => "[-]",
    }
}

fn print_stats(store: &ProgressStore) {
    let stats = store.stats();
    println!("topics:      {}", stats.total);
    println!("  required:  {} ({} completed)", stats.required_total, stats.required_completed);
    println!("  optional:  {} ({} completed)", stats.optional_total, stats.optional_completed);
    println!("completed:   {}", stats.completed);
    println!("in progress: {}", stats.in_progress);
    println!("pending:     {}", stats.pending);
    println!("skipped:     {}", stats.skipped);
    println!("progress:    {:.1}%", stats.progress_percentage);
}
