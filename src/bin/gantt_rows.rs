use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use gantt_rows::api::{
    DEFAULT_MAX_BARS, DEFAULT_MIN_BARS, DEFAULT_ROW_COUNT, DurationPolicy, GenerateConfig,
    RowGenerator, RowStore,
};
use gantt_rows::core::RowLabelPolicy;
use tracing::info;

#[derive(Debug)]
struct CliArgs {
    config: GenerateConfig,
    seed: Option<u64>,
    output: Option<PathBuf>,
    contract: bool,
}

fn main() {
    let _ = gantt_rows::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let mut generator = match args.seed {
        Some(seed) => RowGenerator::seeded(seed),
        None => RowGenerator::from_os_rng(),
    };
    let store = RowStore::generated(&mut generator, &args.config).map_err(|e| e.to_string())?;

    let json = if args.contract {
        store.to_json_contract_v1_pretty()
    } else {
        store.to_json_pretty()
    }
    .map_err(|e| e.to_string())?;

    let summary = store.summary();
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            info!(
                rows = summary.row_count,
                bars = summary.bar_count,
                path = %path.display(),
                "wrote gantt rows"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut row_count = DEFAULT_ROW_COUNT as i64;
    let mut min_bars = DEFAULT_MIN_BARS as i64;
    let mut max_bars = DEFAULT_MAX_BARS as i64;
    let mut seed: Option<u64> = None;
    let mut day: Option<NaiveDate> = None;
    let mut basic = false;
    let mut output: Option<PathBuf> = None;
    let mut contract = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => row_count = parse_count("--rows", args.next())?,
            "--min" => min_bars = parse_count("--min", args.next())?,
            "--max" => max_bars = parse_count("--max", args.next())?,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --seed".to_owned())?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --seed `{value}`: {err}"))?,
                );
            }
            "--day" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --day".to_owned())?;
                day = Some(
                    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                        .map_err(|err| format!("invalid --day `{value}`: {err}"))?,
                );
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--basic" => basic = true,
            "--contract" => contract = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let mut config = GenerateConfig::try_from_signed(row_count, min_bars, max_bars)
        .map_err(|e| e.to_string())?;
    if basic {
        config = config
            .with_duration_policy(DurationPolicy::Fixed)
            .with_row_label_policy(RowLabelPolicy::Sequential);
    }
    if let Some(day) = day {
        config = config.with_day(day);
    }

    Ok(CliArgs {
        config,
        seed,
        output,
        contract,
    })
}

fn parse_count(flag: &str, value: Option<String>) -> Result<i64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|err| format!("invalid {flag} `{value}`: {err}"))
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    "Usage: cargo run --bin gantt_rows -- [options]\n\nOptions:\n  --rows <n>        Row count (default: 100)\n  --min <n>         Minimum bars per row (default: 1)\n  --max <n>         Maximum bars per row (default: 20)\n  --seed <u64>      Seed the random source for reproducible output\n  --day <date>      Bar day as YYYY-MM-DD (default: today, UTC)\n  --basic           One-hour bars and sequential row labels\n  --contract        Wrap rows in the versioned json contract\n  --output <path>   Write json to a file instead of stdout\n  -h, --help        Show this message"
        .to_owned()
}
