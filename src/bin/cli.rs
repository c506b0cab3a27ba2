//! Pulseboard CLI
//!
//! Command-line interface for Pulseboard:
//! - Check server status
//! - Print a dashboard snapshot
//! - Run the simulator offline
//! - Generate a config file

use anyhow::{bail, Context};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use pulseboard::api::dto::HealthResponse;
use pulseboard::api::error::ErrorResponse;
use pulseboard::config::SimulatorConfig;
use pulseboard::dashboard::{stat_cards, DashboardView, Trend, TrendMode};
use pulseboard::metrics::{MetricsSimulator, MetricsUpdate, StdRandom};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulseboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Pulseboard analytics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8086", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show server status
    Status,

    /// Print a dashboard snapshot from the server
    Dashboard {
        /// Active tab (overview, analytics, reports)
        #[arg(short, long)]
        tab: Option<String>,
        /// Time range (24h, 7d, 30d, 90d)
        #[arg(short, long)]
        range: Option<String>,
    },

    /// Run the KPI simulator locally, one line per tick
    Simulate {
        /// Number of ticks to run
        #[arg(short = 'n', long, default_value = "10")]
        ticks: u64,
        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
        /// Trend badges: static or derived
        #[arg(long, default_value = "static")]
        trend_mode: TrendMode,
        /// Interval used to timestamp ticks, in milliseconds
        #[arg(long, default_value = "3000")]
        interval_ms: u64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await
                .with_context(|| format!("Cannot connect to Pulseboard at {}", cli.api_url))?;

            if !response.status().is_success() {
                bail!("Server returned error: {}", response.status());
            }

            let health: HealthResponse = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                println!("Pulseboard v{}", health.version);
                println!();
                println!("Status:       {}", health.status);
                println!("Active views: {}", health.active_views);
                println!("Uptime:       {}", format_duration(health.uptime_seconds));
            }
        }

        Commands::Dashboard { tab, range } => {
            let mut query = Vec::new();
            if let Some(tab) = &tab {
                query.push(("tab", tab.as_str()));
            }
            if let Some(range) = &range {
                query.push(("range", range.as_str()));
            }

            let response = client
                .get(format!("{}/api/v1/dashboard", cli.api_url))
                .query(&query)
                .send()
                .await
                .with_context(|| format!("Cannot connect to Pulseboard at {}", cli.api_url))?;

            if !response.status().is_success() {
                let status = response.status();
                let message = match response.json::<ErrorResponse>().await {
                    Ok(body) => body.error.message,
                    Err(_) => status.to_string(),
                };
                bail!("Dashboard request failed ({}): {}", status, message);
            }

            let view: DashboardView = response.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_dashboard(&view);
            }
        }

        Commands::Simulate {
            ticks,
            seed,
            trend_mode,
            interval_ms,
        } => {
            let settings = SimulatorConfig {
                tick_interval_ms: interval_ms,
                seed,
                trend_mode,
                ..Default::default()
            };
            run_simulation(&settings, ticks, &cli.format)?;
        }

        Commands::Config { output } => {
            let config = pulseboard::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn run_simulation(settings: &SimulatorConfig, ticks: u64, format: &str) -> anyhow::Result<()> {
    let random = StdRandom::from_seed_option(settings.seed);
    let mut simulator = MetricsSimulator::new(settings.initial, Box::new(random))?;
    let start = Utc::now();
    let step = Duration::milliseconds(i64::try_from(settings.tick_interval_ms)?);

    if format != "json" {
        println!(
            "{:<6} {:<20} {:<14} {:<14} {:<14} {}",
            "Tick", "Time", "Revenue", "Users", "Orders", "Conversion"
        );
        println!("{}", "-".repeat(86));
    }

    let mut update = MetricsUpdate::initial(simulator.snapshot());
    for _ in 0..=ticks {
        let at = start + step * i32::try_from(update.tick)?;
        if format == "json" {
            println!("{}", serde_json::to_string(&update)?);
        } else {
            print_tick(&update, settings.trend_mode, &at.format("%Y-%m-%d %H:%M:%S").to_string());
        }

        if update.tick < ticks {
            update = simulator.tick();
        }
    }

    Ok(())
}

fn print_tick(update: &MetricsUpdate, trend_mode: TrendMode, time: &str) {
    let cards = stat_cards(update, trend_mode);
    let cells: Vec<String> = cards
        .iter()
        .map(|card| format!("{} {}", card.value, trend_arrow(card.trend)))
        .collect();

    println!(
        "{:<6} {:<20} {:<14} {:<14} {:<14} {}",
        update.tick, time, cells[0], cells[1], cells[2], cells[3]
    );
}

fn print_dashboard(view: &DashboardView) {
    println!("{} - {}", view.header.title, view.header.subtitle);
    let range = view
        .header
        .time_ranges
        .iter()
        .find(|option| option.id == view.header.time_range)
        .map(|option| option.label.as_str())
        .unwrap_or("-");
    println!("Range: {}", range);

    if let Some(sidebar) = &view.sidebar {
        let tabs: Vec<String> = sidebar
            .items
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    item.label.clone()
                }
            })
            .collect();
        println!("Tabs:  {}", tabs.join("  "));
    }
    println!();

    println!("{:<18} {:<14} {}", "KPI", "Value", "Change");
    println!("{}", "-".repeat(44));
    for card in &view.stats {
        println!(
            "{:<18} {:<14} {} {}",
            card.label,
            card.value,
            trend_arrow(card.trend),
            card.change
        );
    }
    println!();

    println!("{}", view.chart.title);
    for bar in &view.chart.bars {
        println!("  {:<4} {:<20} {}", bar.month, bar_glyphs(bar.height_percent), bar.tooltip);
    }
    println!();

    println!("Recent Activity");
    for item in &view.activity {
        let amount = item.entry.amount.as_deref().unwrap_or("");
        println!(
            "  ({}) {:<16} {:<24} {:<10} {}",
            item.initials, item.entry.user, item.entry.action, amount, item.entry.time
        );
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    }
}

/// One glyph per 5% of bar height
fn bar_glyphs(height_percent: i64) -> String {
    let glyphs = usize::try_from(height_percent.clamp(0, 100) / 5).unwrap_or(0);
    "█".repeat(glyphs)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
