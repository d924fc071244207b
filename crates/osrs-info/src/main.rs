//! osrs-info command line.
//!
//! Prints a player's hiscores, searches tradeable items and shows item prices.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use osrs_hiscores::{ActivityRow, Bucket, StatsSnapshot};
use osrs_info::{Decoder, DecoderConfig, ItemQuery, ModeFlags, SearchOptions};
use osrs_telemetry::Metrics;
use tracing::info;

/// Old School RuneScape hiscores and Grand Exchange prices
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (can also be set via OSRS_INFO_CONFIG env var)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print Prometheus metrics to stderr when done
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a player's skills and activity scores
    Hiscores {
        username: String,
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Search tradeable items by name
    Search {
        query: String,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
        /// Fall back to fuzzy matching when nothing matches
        #[arg(long)]
        fuzzy: bool,
    },
    /// Show metadata and latest price of an item (id or exact name)
    Price { item: String },
}

/// Hiscores leaderboard. The first set flag wins, in the order
/// seasonal, deadman, ultimate, hardcore, ironman.
#[derive(Args, Debug, Default)]
struct ModeArgs {
    #[arg(long)]
    ironman: bool,
    #[arg(long)]
    hardcore: bool,
    #[arg(long)]
    ultimate: bool,
    #[arg(long)]
    deadman: bool,
    #[arg(long)]
    seasonal: bool,
}

impl From<&ModeArgs> for ModeFlags {
    fn from(args: &ModeArgs) -> Self {
        ModeFlags {
            seasonal: args.seasonal,
            deadman: args.deadman,
            ultimate: args.ultimate,
            hardcore: args.hardcore,
            ironman: args.ironman,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let dump_metrics = cli.metrics;

    osrs_telemetry::init_logging()?;

    // Config path: CLI arg > OSRS_INFO_CONFIG env var > built-in defaults
    let config = match cli
        .config
        .or_else(|| std::env::var("OSRS_INFO_CONFIG").ok())
    {
        Some(path) => {
            info!(config_path = %path, "Loading configuration");
            DecoderConfig::from_file(&path)?
        }
        None => DecoderConfig::default(),
    };

    let mut decoder = Decoder::new(config)?;

    match cli.command {
        Command::Hiscores { username, mode } => {
            let modes = ModeFlags::from(&mode);
            info!(username = %username, mode = %modes.resolve(), "Looking up hiscores");
            let stats = decoder.player_snapshot(&username, modes).await?;
            print_hiscores(&username, &stats);
        }
        Command::Search {
            query,
            limit,
            fuzzy,
        } => {
            let options = SearchOptions {
                limit,
                fuzzy,
                ..SearchOptions::default()
            };
            let hits = decoder.items_mut().search(&query, options).await?;
            if hits.is_empty() {
                println!("No tradeable items match '{query}'");
            }
            for item in hits {
                println!("{:>6}  {}", item.id, item.name);
            }
        }
        Command::Price { item } => {
            let query = match item.trim().parse::<u32>() {
                Ok(id) => ItemQuery::Id(id),
                Err(_) => ItemQuery::Name(item),
            };
            let priced = decoder.price(query).await?;
            println!("{} (id {})", priced.meta.name, priced.meta.id);
            if let Some(examine) = &priced.meta.examine {
                println!("  {examine}");
            }
            println!("  high: {}", format_value(priced.price.high));
            println!("  low:  {}", format_value(priced.price.low));
            if let Some(limit) = priced.meta.limit {
                println!("  buy limit: {limit}");
            }
        }
    }

    if dump_metrics {
        eprint!("{}", Metrics::render()?);
    }

    Ok(())
}

fn format_value(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn print_hiscores(username: &str, stats: &StatsSnapshot) {
    println!("{username}");
    println!("Skills");
    for (key, row) in stats.skills() {
        println!(
            "  {:<24} level {:>4}  xp {:>11}  rank {}",
            key,
            format_value(row.level),
            format_value(row.xp),
            row.rank
        );
    }

    for (title, bucket) in [
        ("Clues", stats.clues()),
        ("PvP", stats.pvp()),
        ("Activities", stats.activities()),
        ("Bosses", stats.bosses()),
    ] {
        print_activities(title, bucket);
    }
}

fn print_activities(title: &str, bucket: &Bucket<ActivityRow>) {
    if bucket.is_empty() {
        return;
    }
    println!("{title}");
    for (key, row) in bucket {
        println!(
            "  {:<32} score {:>8}  rank {}",
            key,
            format_value(row.score),
            row.rank
        );
    }
}
