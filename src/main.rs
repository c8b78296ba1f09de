use anyhow::{Context, bail};
use hashtag_stats::benchmark::run_benchmark;
use hashtag_stats::config::{BenchmarkConfig, SimulatorConfig, StreamConfig};
use hashtag_stats::feed::{HttpFeed, MemoryFeed, handlers};
use hashtag_stats::ingestion::run_simulator;
use hashtag_stats::storage::LocalStore;
use hashtag_stats::window::SlidingWindowAggregator;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

const USAGE: &str = "\
Usage: hashtag_stats <command> [options] [--verbose]

Commands:
  benchmark   [--root <dir>] [--input <locator>] [--output <locator>] [--workers <n>]
  serve-feed  --bind <addr:port> [--stream <name>] [--shards <n>]
  simulate    --feed <url> [--root <dir>] [--input <locator>] [--stream <name>] [--delay-ms <ms>]
  stream      --feed <url> [--stream <name>] [--window <secs>] [--duration <secs>]

Example: hashtag_stats serve-feed --bind 127.0.0.1:6000
Example: hashtag_stats stream --feed http://127.0.0.1:6000 --window 5 --duration 60";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let verbose = args.iter().any(|arg| arg == "--verbose");
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let Some((command, options)) = parse_args(&args)? else {
        match args.get(1) {
            Some(name) => eprintln!("Unknown command: {}\n\n{}", name, USAGE),
            None => eprintln!("{}", USAGE),
        }
        std::process::exit(1);
    };

    match command {
        Command::Benchmark => benchmark(options).await,
        Command::ServeFeed => serve_feed(options).await,
        Command::Simulate => simulate(options).await,
        Command::Stream => stream(options).await,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Benchmark,
    ServeFeed,
    Simulate,
    Stream,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "benchmark" => Some(Command::Benchmark),
            "serve-feed" => Some(Command::ServeFeed),
            "simulate" => Some(Command::Simulate),
            "stream" => Some(Command::Stream),
            _ => None,
        }
    }
}

/// Resolves the command before looking at any option.
/// `Ok(None)` means the command is missing or unknown.
fn parse_args(args: &[String]) -> anyhow::Result<Option<(Command, Options)>> {
    let Some(command) = args.get(1).and_then(|name| Command::parse(name)) else {
        return Ok(None);
    };
    Ok(Some((command, Options::parse(&args[2..])?)))
}

/// `--flag value` pairs following the command.
#[derive(Debug, Default)]
struct Options {
    root: Option<String>,
    input: Option<String>,
    output: Option<String>,
    workers: Option<usize>,
    bind: Option<SocketAddr>,
    feed: Option<String>,
    stream: Option<String>,
    shards: Option<u32>,
    delay_ms: Option<u64>,
    window: Option<u64>,
    duration: Option<u64>,
}

impl Options {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut options = Options::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "--verbose" {
                i += 1;
                continue;
            }

            let value = args
                .get(i + 1)
                .with_context(|| format!("{} needs a value", flag))?;
            match flag {
                "--root" => options.root = Some(value.clone()),
                "--input" => options.input = Some(value.clone()),
                "--output" => options.output = Some(value.clone()),
                "--workers" => options.workers = Some(value.parse()?),
                "--bind" => options.bind = Some(value.parse()?),
                "--feed" => options.feed = Some(value.clone()),
                "--stream" => options.stream = Some(value.clone()),
                "--shards" => options.shards = Some(value.parse()?),
                "--delay-ms" => options.delay_ms = Some(value.parse()?),
                "--window" => options.window = Some(value.parse()?),
                "--duration" => options.duration = Some(value.parse()?),
                _ => bail!("unknown option: {}", flag),
            }
            i += 2;
        }

        Ok(options)
    }

    fn store(&self) -> LocalStore {
        LocalStore::new(self.root.clone().unwrap_or_else(|| ".".to_string()))
    }
}

async fn benchmark(options: Options) -> anyhow::Result<()> {
    let mut config = BenchmarkConfig::default();
    if let Some(input) = options.input.clone() {
        config.input = input;
    }
    if let Some(output) = options.output.clone() {
        config.output = output;
    }
    if let Some(workers) = options.workers {
        config.worker_count = workers;
    }

    tracing::info!(
        "Benchmarking {} with {} workers",
        config.input,
        config.worker_count
    );
    let table = run_benchmark(&options.store(), &config).await?;
    tracing::info!("Published {} rows to {}", table.len(), config.output);

    Ok(())
}

async fn serve_feed(options: Options) -> anyhow::Result<()> {
    let bind_addr = options.bind.context("--bind is required")?;
    let stream_name = options
        .stream
        .unwrap_or_else(|| StreamConfig::default().stream_name);

    let feed = Arc::new(MemoryFeed::with_shard_count(options.shards.unwrap_or(1)));
    feed.create_stream(&stream_name);
    tracing::info!("Created stream: {}", stream_name);

    let app = handlers::router(feed);

    tracing::info!("Feed service listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn simulate(options: Options) -> anyhow::Result<()> {
    let feed_url = options.feed.clone().context("--feed is required")?;

    let mut config = SimulatorConfig::default();
    if let Some(input) = options.input.clone() {
        config.input = input;
    }
    if let Some(stream) = options.stream.clone() {
        config.stream_name = stream;
    }
    if let Some(delay) = options.delay_ms {
        config.delay_between = Duration::from_millis(delay);
    }

    let feed = HttpFeed::new(&feed_url);
    let sent = run_simulator(&options.store(), &feed, &config).await?;
    tracing::info!("Simulator finished: {} tweets sent", sent);

    Ok(())
}

async fn stream(options: Options) -> anyhow::Result<()> {
    let feed_url = options.feed.clone().context("--feed is required")?;

    let mut config = StreamConfig::default();
    if let Some(stream) = options.stream {
        config.stream_name = stream;
    }
    if let Some(window) = options.window {
        config.window_size = Duration::from_secs(window);
    }
    if let Some(duration) = options.duration {
        config.run_duration = Duration::from_secs(duration);
    }

    let feed = HttpFeed::new(&feed_url);
    let mut aggregator = SlidingWindowAggregator::new(config);
    let summary = aggregator
        .run(&feed, |report| {
            tracing::debug!(
                "Cycle {}: fetched={} accepted={} skipped={} evicted={} window={}",
                report.cycle,
                report.fetched,
                report.accepted,
                report.skipped,
                report.evicted,
                report.window_len
            );
        })
        .await?;

    tracing::info!("Final top hashtags (all-time): {:?}", summary.all_time_top);
    tracing::info!("Final top hashtags (window): {:?}", summary.window_top);

    Ok(())
}
