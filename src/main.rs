//! Command line front end for the 4x4 Hadamard transforms.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use console::style;
use hadamard_inverse::{Block, forward_transform, golden, inverse_transform};
use log::{Level, LevelFilter, debug, info};
use rayon::prelude::*;
use serde::Deserialize;

/// Runs the 4x4 Hadamard transform over block pairs read as JSON.
#[derive(Parser, Debug)]
#[command(name = "hadamard-inverse", version, about)]
struct CliOptions {
    /// JSON file with an array of `{"r": .., "p": ..}` objects, or `-` for
    /// stdin. In forward mode the first block may be named `c`.
    #[arg(required_unless_present = "speed_test")]
    input: Option<String>,
    /// Which transform to apply to each pair.
    #[arg(long, value_enum, default_value_t = Direction::Inverse)]
    direction: Direction,
    /// How to validate inputs before transforming them.
    #[arg(long, value_enum, default_value_t = RangeCheck::Transform)]
    range_check: RangeCheck,
    /// File to also write pretty-printed results to.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Time this many inverse transforms of a fixed block pair and exit.
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u64).range(1..))]
    speed_test: Option<u64>,
    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Direction {
    /// `C = round(A * (R - P) * A / 16)`
    Inverse,
    /// `R = A * C * A + P`
    Forward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RangeCheck {
    /// Reject inverse inputs with `|R - P| > 2047`, which would overflow.
    Transform,
    /// Require every sample block to hold 8-bit values.
    Samples,
    /// Transform whatever is given; out of range values wrap.
    None,
}

#[derive(Deserialize, Debug)]
struct BlockPair {
    #[serde(alias = "r", alias = "c")]
    data: Block,
    p: Block,
}

fn main() -> anyhow::Result<()> {
    let opts = CliOptions::parse();
    init_logger(if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    })?;

    if let Some(count) = opts.speed_test {
        speed_test(count);
        return Ok(());
    }

    let input = match opts.input.as_deref() {
        Some("-") | None => Box::new(io::stdin()) as Box<dyn Read>,
        Some(f) => Box::new(File::open(f).with_context(|| format!("failed to open {f}"))?)
            as Box<dyn Read>,
    };
    run(&opts, BufReader::new(input), io::stdout().lock())
}

/// Reads block pairs from `input`, transforms them and writes the results
/// as JSON to `output`, and to `opts.output` if given.
fn run(opts: &CliOptions, input: impl Read, output: impl Write) -> anyhow::Result<()> {
    let pairs: Vec<BlockPair> =
        serde_json::from_reader(input).context("input must be a JSON array of block pairs")?;
    debug!("read {} block pairs", pairs.len());

    for (i, pair) in pairs.iter().enumerate() {
        validate(pair, opts.direction, opts.range_check)
            .with_context(|| format!("block pair {i}"))?;
    }

    let start_time = Instant::now();
    let results: Vec<Block> = pairs
        .par_iter()
        .map(|pair| match opts.direction {
            Direction::Inverse => inverse_transform(&pair.data, &pair.p),
            Direction::Forward => forward_transform(&pair.data, &pair.p),
        })
        .collect();
    debug!(
        "transformed {} blocks in {:?}",
        results.len(),
        start_time.elapsed()
    );

    let mut output = BufWriter::new(output);
    serde_json::to_writer(&mut output, &results)?;
    writeln!(output)?;
    output.flush()?;

    if let Some(path) = &opts.output {
        let file = File::create(path)
            .with_context(|| format!("could not create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &results)
            .context("could not convert results into json")?;
        writer.flush()?;
        info!("wrote {} blocks to {}", results.len(), path.display());
    }

    Ok(())
}

fn validate(pair: &BlockPair, direction: Direction, check: RangeCheck) -> anyhow::Result<()> {
    match (check, direction) {
        (RangeCheck::None, _) => {}
        (RangeCheck::Transform, Direction::Inverse) => {
            Block::check_difference_range(&pair.data, &pair.p).context("R - P")?;
        }
        // Forward inputs are only checked in sample mode.
        (RangeCheck::Transform, Direction::Forward) => {}
        (RangeCheck::Samples, direction) => {
            // Forward mode takes signed coefficients, only P is a sample block.
            if direction == Direction::Inverse {
                pair.data.check_sample_range().context("R")?;
            }
            pair.p.check_sample_range().context("P")?;
        }
    }
    Ok(())
}

fn speed_test(count: u64) {
    let start_time = Instant::now();
    let mut c = Block::default();
    for _ in 0..count {
        c = inverse_transform(
            std::hint::black_box(&golden::R),
            std::hint::black_box(&golden::P),
        );
    }
    let elapsed = start_time.elapsed().as_secs_f64();
    debug!("last result:\n{c}");
    info!(
        "{} transforms in {:.3} sec ({:.0} transforms/sec)",
        count,
        elapsed,
        count as f64 / elapsed
    );
}

fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let level = match record.level() {
                Level::Error => style("ERROR").red().bold(),
                Level::Warn => style("WARN").yellow().bold(),
                Level::Info => style("INFO").green(),
                Level::Debug => style("DEBUG").blue(),
                Level::Trace => style("TRACE").dim(),
            };
            out.finish(format_args!("[{}] {}", level, message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("failed to initialize logging")
}
