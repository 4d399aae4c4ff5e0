//! PitchBridge command line client
//!
//! Browses the startup/investor directories through the filter engine and
//! manages notifications through the reconciliation store.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use client::core::listing::ListingRecord;
use client::{
    ClientConfig, ClientError, ClientResult, DirectoryPage, LoadStatus, NotificationStore, RealDirectoryApi,
    RealNotificationApi, StoreSnapshot,
};
use shared::{ComponentId, ListingKind, component_info, logging};

#[derive(Parser, Debug)]
#[command(name = "pitchbridge")]
#[command(about = "Browse PitchBridge directories and manage notifications")]
struct Args {
    /// API base URL (falls back to PITCHBRIDGE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Bearer token (falls back to PITCHBRIDGE_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List startups matching the query and filters
    Startups(DirectoryArgs),
    /// List investors matching the query and filters
    Investors(DirectoryArgs),
    /// Show AI match results
    Matches,
    /// Notification actions
    #[command(subcommand)]
    Notifications(NotificationCommand),
}

#[derive(clap::Args, Debug)]
struct DirectoryArgs {
    /// Free-text query over name, description and tags
    #[arg(long, short)]
    query: Option<String>,

    /// Filter as dimension=value, repeatable (e.g. --filter stage=Seed)
    #[arg(long = "filter", short = 'f')]
    filters: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum NotificationCommand {
    /// List notifications
    List,
    /// Mark one notification read
    Read { id: String },
    /// Mark every notification read
    ReadAll,
    /// Dismiss one notification
    Dismiss { id: String },
}

#[tokio::main]
async fn main() -> ClientResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ComponentId::init_client();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = ClientConfig::resolve(args.api_url, args.token)?;
    let context = config.app_context()?;
    component_info!(ComponentId::current(), "🌐 Using API at {}", context.api_base());

    match args.command {
        Command::Startups(directory) => browse(RealDirectoryApi::new(context), ListingKind::Startup, directory).await,
        Command::Investors(directory) => browse(RealDirectoryApi::new(context), ListingKind::Investor, directory).await,
        Command::Matches => {
            let page = DirectoryPage::new(Arc::new(RealDirectoryApi::new(context)), ListingKind::Startup);
            for m in page.matches().await {
                println!("{:>5.1}  {}  {}", m.match_score, m.id, m.match_reasons.join("; "));
            }
            Ok(())
        }
        Command::Notifications(command) => {
            let store = NotificationStore::with_config(RealNotificationApi::new(context), config.store_config());
            notifications(&store, command).await
        }
    }
}

async fn browse(api: RealDirectoryApi, kind: ListingKind, args: DirectoryArgs) -> ClientResult<()> {
    let mut page = DirectoryPage::new(Arc::new(api), kind);
    if let LoadStatus::Failed = page.load().await {
        let message = page.error().unwrap_or("unknown error").to_string();
        return Err(ClientError::Http { message });
    }

    let view = page.view_mut();
    if let Some(query) = args.query {
        view.set_query(query);
    }
    for filter in &args.filters {
        let (dimension, value) = filter.split_once('=').ok_or_else(|| ClientError::Config {
            message: format!("filter '{filter}' is not dimension=value"),
        })?;
        view.select(dimension.trim(), value.trim())?;
    }

    let total = page.view().source().len();
    let visible = page.visible();
    for record in &visible {
        print_listing(record);
    }
    println!("{} of {} {}s", visible.len(), total, kind);
    Ok(())
}

fn print_listing(record: &ListingRecord) {
    let details: Vec<String> = record
        .fields
        .iter()
        .map(|(key, value)| format!("{key}={}", value.as_text()))
        .collect();
    println!("{}  {}  [{}]  {}", record.id, record.name, record.tags.join(", "), details.join(" "));
}

async fn notifications(store: &NotificationStore<RealNotificationApi>, command: NotificationCommand) -> ClientResult<()> {
    if let LoadStatus::Failed = store.load().await {
        let snapshot = store.snapshot().await;
        return Err(ClientError::Http {
            message: snapshot.error.unwrap_or_default(),
        });
    }

    let (outcome, target) = match command {
        NotificationCommand::List => (None, None),
        NotificationCommand::Read { id } => (Some(store.mark_read(&id).await), Some(id)),
        NotificationCommand::ReadAll => (Some(store.mark_all_read().await), None),
        NotificationCommand::Dismiss { id } => (Some(store.dismiss(&id).await), Some(id)),
    };
    if let Some(outcome) = outcome {
        println!("→ {outcome:?}");
    }

    let snapshot = store.snapshot().await;
    if let Some(id) = target {
        match snapshot.get(&id) {
            Some(n) => println!("{id}: {}", if n.read { "read" } else { "unread" }),
            None => println!("{id}: gone"),
        }
    }
    print_notifications(&snapshot);
    Ok(())
}

fn print_notifications(snapshot: &StoreSnapshot) {
    for n in &snapshot.notifications {
        let marker = if n.read { " " } else { "●" };
        println!(
            "{marker} {}  [{}]  {}: {}  {}",
            n.unique_id,
            n.kind,
            n.title,
            n.message,
            n.timestamp.as_deref().unwrap_or("")
        );
    }
    println!("{} notifications, {} unread", snapshot.notifications.len(), snapshot.unread_count);
}
