use anyhow::Result;
use clap::Parser;
use xferfmt::labels::Labels;
use xferfmt::{clock, flags, plural, ratio, speed, units};

#[derive(Parser, Debug)]
#[command(name = "xferfmt", about = "Human-readable display formatting for transfer dashboards", version = "0.1")]
struct Cli {
    /// Format a byte count as a decimal (base-1000) file/disk size and exit
    #[arg(long, value_name = "BYTES")]
    size: Option<u64>,

    /// Format a byte count as a binary (base-1024) memory size and exit
    #[arg(long, value_name = "BYTES")]
    mem: Option<u64>,

    /// Format a transfer rate given in bytes per second and exit
    #[arg(long, value_name = "BPS")]
    speed: Option<f64>,

    /// Format a percentage value and exit
    #[arg(long, value_name = "X")]
    percent: Option<f64>,

    /// Format a share ratio and exit (-1 = none, -2 = infinite)
    #[arg(long, value_name = "X", allow_hyphen_values = true)]
    ratio: Option<f64>,

    /// Format an elapsed duration in seconds and exit
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,

    /// Format a unix timestamp and exit (0 = unknown)
    #[arg(long, value_name = "UNIX")]
    timestamp: Option<i64>,

    /// Decode a peer status flag string (e.g. "ODE") and exit
    #[arg(long, value_name = "FLAGS")]
    flags: Option<String>,

    /// Format a transfer count with grouping separators and exit
    #[arg(long, value_name = "N")]
    count: Option<u64>,

    /// Print a one-shot JSON snapshot of every formatter applied to VALUE
    #[arg(long, value_name = "VALUE")]
    json: Option<u64>,

    /// Print labels file path and current values, then exit
    #[arg(long)]
    labels: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(bytes) = cli.size {
        println!("{}", units::size(bytes));
        return Ok(());
    }
    if let Some(bytes) = cli.mem {
        println!("{}", units::mem(bytes));
        return Ok(());
    }
    if let Some(bps) = cli.speed {
        println!("{}", speed::speed_bps(bps));
        return Ok(());
    }
    if let Some(x) = cli.percent {
        println!("{}", ratio::percent(x));
        return Ok(());
    }
    if let Some(x) = cli.ratio {
        println!("{}", ratio::ratio(x));
        return Ok(());
    }
    if let Some(secs) = cli.interval {
        println!("{}", clock::time_interval(secs, &Labels::load()));
        return Ok(());
    }
    if let Some(unix) = cli.timestamp {
        println!("{}", clock::timestamp(unix, &Labels::load()));
        return Ok(());
    }
    if let Some(codes) = &cli.flags {
        return run_flags(codes);
    }
    if let Some(n) = cli.count {
        println!("{}", plural::count_string("transfer", "transfers", n));
        return Ok(());
    }
    if let Some(value) = cli.json {
        return run_json_snapshot(value);
    }
    if cli.labels {
        return run_print_labels();
    }

    println!("Nothing to format; pass one of the value flags (see --help).");
    Ok(())
}

/// Decode each status code on its own line; the rendered span string last.
fn run_flags(codes: &str) -> Result<()> {
    let labels = Labels::load();
    for token in flags::decode(codes) {
        match token.tooltip(&labels) {
            Some(tip) => println!("{}", tip),
            None      => println!("{}: (unknown)", token.code),
        }
    }
    println!("{}", flags::peer_status(codes, &labels));
    Ok(())
}

fn run_json_snapshot(value: u64) -> Result<()> {
    use serde_json::json;

    let labels = Labels::load();
    let snapshot = json!({
        "xferfmt_version": "0.1",
        "value":     value,
        "size":      units::size(value),
        "mem":       units::mem(value),
        "speed":     speed::speed_bps(value as f64),
        "percent":   ratio::percent(value as f64),
        "interval":  clock::time_interval(value, &labels),
        "timestamp": clock::timestamp(value as i64, &labels),
    });

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_print_labels() -> Result<()> {
    let labels = Labels::load();
    let path = Labels::labels_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Labels: {}", path);
    println!();
    println!("[time]");
    println!("  day    = {}", labels.time.day);
    println!("  hour   = {}", labels.time.hour);
    println!("  minute = {}", labels.time.minute);
    println!("  second = {}", labels.time.second);
    println!();
    println!("[date]");
    println!("  today       = {}", labels.date.today);
    println!("  yesterday   = {}", labels.date.yesterday);
    println!("  tomorrow    = {}", labels.date.tomorrow);
    println!("  am          = {}", labels.date.am);
    println!("  pm          = {}", labels.date.pm);
    println!("  unavailable = {}", labels.date.unavailable);
    println!();
    println!("[flags]");
    for flag in flags::PeerFlag::ALL {
        println!("  {} = {}", flag.code(), flag.explanation(&labels.flags));
    }
    Ok(())
}
