use clap::{Parser, Subcommand};
use pvp_rank_engine::{
    JsonSource, Ladder, LookupOutcome, LuaSource, RankEngine, RecordSource,
};

#[derive(Parser)]
#[command(name = "rank-check")]
#[command(about = "PvP rank history lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset path (region .lua file or .json export)
    #[arg(short, long)]
    dataset: String,

    /// Ladder configuration JSON (defaults to the standard ladder)
    #[arg(short, long)]
    ladder: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one character
    Lookup {
        /// Character identity, e.g. MyChar-MyRealm
        identity: String,

        /// Also print tiers with zero matches
        #[arg(long)]
        all_tiers: bool,
    },

    /// Print dataset and cache statistics
    Stats,
}

fn load_records(path: &str) -> anyhow::Result<Vec<pvp_rank_engine::RawRecord>> {
    let records = if path.ends_with(".json") {
        JsonSource::new(path).load()?
    } else {
        LuaSource::new(path).load()?
    };
    Ok(records)
}

fn load_ladder(path: Option<&str>) -> anyhow::Result<Ladder> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(Ladder::from_json(&text)?)
        }
        None => Ok(Ladder::standard()),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let records = load_records(&cli.dataset)?;
    let ladder = load_ladder(cli.ladder.as_deref())?;
    let engine = RankEngine::new(records, ladder)?;

    match cli.command {
        Commands::Lookup { identity, all_tiers } => {
            let response = engine.lookup(&identity);

            println!("=== Lookup ===");
            println!("Identity: {}", response.identity);
            if let Some(canonical) = &response.canonical_identity {
                println!("Record:   {}", canonical);
            }

            match &response.outcome {
                LookupOutcome::NotSeen => {
                    println!("Outcome:  not seen in dataset");
                }
                LookupOutcome::Classified(result) => {
                    println!("Outcome:  classified");

                    println!("\n=== Tier matches ===");
                    for tier in engine.ladder().tiers() {
                        let count = result.counts.get(&tier.key).copied().unwrap_or(0);
                        if count > 0 || all_tiers {
                            println!("{:<12} {:>4}  {}", tier.key, count, tier.meta.label);
                        }
                    }

                    match &result.highest {
                        Some(rank) => {
                            println!("\nHighest: {} (via \"{}\")", rank.label, rank.match_text);
                        }
                        None => println!("\nHighest: none (no rated history)"),
                    }
                }
            }

            println!("\n{}", response.announcement());
        }

        Commands::Stats => {
            println!("=== Dataset ===");
            println!("Records: {}", engine.index_len());
            println!("Skipped: {}", engine.skipped_records());
            println!("Tiers:   {}", engine.ladder().len());

            let stats = engine.cache_stats();
            println!("\n=== Cache ===");
            println!("Entries:    {}", stats.total_entries);
            println!("Hits:       {}", stats.total_hits);
            println!("Not seen:   {}", stats.not_seen_entries);
            println!("Avg hits:   {:.2}", stats.avg_hit_count);
        }
    }

    Ok(())
}
