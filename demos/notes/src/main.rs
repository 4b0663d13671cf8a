//! Creates a few notes through a simulated API and prints the resulting list.
//!
//! Titles are taken from the command line, falling back to a fixed set.
//! The replacement diagnostic is logged at debug level by default; override
//! with `RUST_LOG`.

use all_is_list_core::{CreateReducer, ListState};
use all_is_list_runtime::metrics::register_metrics;
use all_is_list_runtime::{CreateActionConfig, Store, create_action};
use metrics_exporter_prometheus::PrometheusBuilder;
use notes_demo::NotesApi;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,all_is_list_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let metrics = PrometheusBuilder::new().install_recorder()?;
    register_metrics();

    tracing::info!("Starting Notes Demo");

    let api = Arc::new(NotesApi::new(Duration::from_millis(50)));
    let store = Store::new(ListState::new(), CreateReducer::new());

    let create_note = create_action(CreateActionConfig::for_list(store.clone(), move |title: String| {
        let api = Arc::clone(&api);
        async move { api.create_note(title).await }
    }));

    let mut titles: Vec<String> = std::env::args().skip(1).collect();
    if titles.is_empty() {
        titles = ["Buy milk", "Write documentation", "", "Buy milk"]
            .map(String::from)
            .to_vec();
    }

    for title in titles {
        match create_note.call(title.clone()).await {
            Ok(note) => tracing::info!(title = %note.title, id = %note.id, "Created note"),
            Err(error) => tracing::warn!(title = %title, error = %error, "Could not create note"),
        }
    }

    let state = store.snapshot();
    println!("\nNotes ({}), creating: {}", state.len(), state.is_creating);
    for note in &state.items {
        println!("  - {} (saved {})", note.title, note.saved_at.format("%H:%M:%S%.3f"));
    }

    println!("\n=== Metrics ===\n{}", metrics.render());
    Ok(())
}
