use std::path::PathBuf;

use clap::Parser;
use roster_core::{Bot, ListOrder};
use roster_engine::{display_created, DetailProvider, RosterController, StaticSource};

#[derive(Parser)]
#[command(name = "roster", about = "Partitioned, orderable, searchable bot roster")]
struct Args {
    /// JSON file holding the initial bot list.
    #[arg(long, default_value = "bots.json")]
    bots: PathBuf,

    /// Ordering applied to the lists (by_name or by_date).
    #[arg(long, default_value_t = ListOrder::ByName)]
    order: ListOrder,

    /// Optional search term applied after loading.
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // The one-shot external record source.
    let raw = std::fs::read_to_string(&args.bots).expect("Failed to read bot list");
    let bots: Vec<Bot> = serde_json::from_str(&raw).expect("Failed to parse bot list");
    tracing::info!(path = %args.bots.display(), count = bots.len(), "bot list fetched");

    let first = bots.first().cloned();

    let mut controller = RosterController::new();
    let mut favorites_rx = controller.subscribe_favorites();
    let mut others_rx = controller.subscribe_others();
    let list_mode_rx = controller.subscribe_list_mode();

    controller.load(bots);
    controller.set_order(args.order);
    if let Some(term) = &args.search {
        controller.search(term);
    }

    let favorites = drain_latest(&mut favorites_rx).unwrap_or_default();
    let others = drain_latest(&mut others_rx).unwrap_or_default();
    tracing::info!(
        favorites = favorites.len(),
        others = others.len(),
        list_mode = ?*list_mode_rx.borrow(),
        "roster ready"
    );

    println!("Favorites:");
    for bot in &favorites {
        println!("  {}  {}", bot.name, display_created(&bot.created));
    }
    println!("Others:");
    for bot in &others {
        println!("  {}  {}", bot.name, display_created(&bot.created));
    }

    if let Some(bot) = first {
        let provider = DetailProvider::new(StaticSource::new(bot));
        let detail = provider.setup().await.expect("Failed to build bot detail");
        println!(
            "Detail: {} — {} active users, {} received / {} sent, language {}",
            detail.bot.name,
            detail.active_users,
            detail.received_messages,
            detail.sent_messages,
            detail.language
        );
    }
}

/// Keep only the most recent snapshot a channel delivered.
fn drain_latest(rx: &mut tokio::sync::broadcast::Receiver<Vec<Bot>>) -> Option<Vec<Bot>> {
    let mut latest = None;
    while let Ok(v) = rx.try_recv() {
        latest = Some(v);
    }
    latest
}
