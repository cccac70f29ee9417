use alternating_disks::{
    check_light_count, expected_swaps, AdjacentSorter, DiskColor, DiskError, DiskRow, DiskSorter,
    LawnmowerSorter, Result,
};
use clap::Parser;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(
    name = "benchmark",
    about = "Time the alternating disks sorters over several row sizes",
    version
)]
struct Args {
    /// Light disk counts to benchmark, comma separated
    #[arg(long, value_delimiter = ',', default_value = "1,3,4,16,64,256")]
    light_counts: Vec<usize>,

    /// Timed runs per light count and algorithm
    #[arg(long, default_value_t = 100)]
    iterations: u32,

    /// Untimed runs before measuring
    #[arg(long, default_value_t = 10)]
    warmup: u32,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Log a summary of each initial row
    #[arg(long)]
    dump: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(DiskError::config("--iterations must be at least 1"));
        }
        if self.light_counts.is_empty() {
            return Err(DiskError::config("--light-counts must name at least one size"));
        }
        for &k in &self.light_counts {
            check_light_count(k)?;
        }
        Ok(())
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    light_count: usize,
    swap_count: usize,
    sorted: bool,
    ops_per_second: f64,
    avg_ns: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

fn verify_sort<S: DiskSorter>(sorter: &S, light_count: usize) -> (usize, bool, bool) {
    let mut row = DiskRow::new(light_count);
    let result = sorter.sort(&mut row);
    let after = result.after();

    let sorted = after.is_sorted();
    let preserved = after.count(DiskColor::Dark) == light_count
        && after.count(DiskColor::Light) == light_count;
    let correct = sorted && preserved && result.swap_count() == expected_swaps(light_count);

    (result.swap_count(), sorted, correct)
}

fn benchmark_sorter<S: DiskSorter>(
    sorter: &S,
    name: &str,
    light_count: usize,
    args: &Args,
) -> BenchmarkResult {
    // Verify correctness first
    let (swap_count, sorted, correct) = verify_sort(sorter, light_count);

    if !correct {
        warn!(algorithm = name, light_count, swap_count, sorted, "sorter produced a wrong result");
        return BenchmarkResult {
            name: name.to_string(),
            light_count,
            swap_count,
            sorted,
            ops_per_second: 0.0,
            avg_ns: f64::INFINITY,
            correct: false,
        };
    }

    // Warmup
    for _ in 0..args.warmup {
        let mut row = DiskRow::new(light_count);
        std::hint::black_box(sorter.sort(&mut row));
    }

    // Benchmark
    let mut total_time = Duration::ZERO;
    for _ in 0..args.iterations {
        let mut row = DiskRow::new(light_count);

        let start = Instant::now();
        std::hint::black_box(sorter.sort(&mut row));
        total_time += start.elapsed();
    }

    let avg_ns = total_time.as_nanos() as f64 / args.iterations as f64;
    let ops_per_second = if avg_ns > 0.0 { 1_000_000_000.0 / avg_ns } else { f64::INFINITY };

    info!(algorithm = name, light_count, swap_count, avg_ns, "benchmarked");

    BenchmarkResult {
        name: name.to_string(),
        light_count,
        swap_count,
        sorted,
        ops_per_second,
        avg_ns,
        correct,
    }
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level());
    args.validate()?;

    let mut results = Vec::new();
    let mut all_correct = true;

    for &light_count in &args.light_counts {
        if args.dump {
            info!("initial row\n{}", DiskRow::new(light_count).summary());
        }

        let adjacent = benchmark_sorter(&AdjacentSorter, "adjacent", light_count, &args);
        all_correct &= adjacent.correct;
        results.push(adjacent);

        let lawnmower = benchmark_sorter(&LawnmowerSorter, "lawnmower", light_count, &args);
        all_correct &= lawnmower.correct;
        results.push(lawnmower);
    }

    let full_results = FullResults {
        results,
        correctness: all_correct,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&full_results)?
    } else {
        serde_json::to_string(&full_results)?
    };
    println!("{}", json);

    Ok(())
}
