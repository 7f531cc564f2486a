use anyhow::{Context, Result};
use clap::Parser;
use u_nqueens::monitor::{LogMonitor, NoopMonitor, SearchMonitor};
use u_nqueens::{solve_with_monitor, Algorithm, SolveConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve N-Queens with local search", long_about = None)]
struct Args {
    /// Board size (number of queens)
    #[clap(long, default_value_t = 100)]
    size: usize,

    /// Algorithm: 0 = hill climbing, 1 = simulated annealing
    #[clap(long, default_value_t = 0)]
    alg: u32,

    /// Hill climbing move cap (0 = unbounded)
    #[clap(long, default_value_t = 0)]
    max_iterations: usize,

    /// Seed of the first iteration
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Print search progress to stderr
    #[clap(short, long)]
    verbose: bool,

    /// Iterations between progress lines
    #[clap(long, default_value_t = 100)]
    log_every: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let algorithm = Algorithm::try_from(args.alg).context("invalid --alg")?;

    let mut config = SolveConfig::default().with_base_seed(args.seed);
    config.hill.max_iterations = args.max_iterations;

    let mut log_monitor;
    let mut noop_monitor = NoopMonitor;
    let monitor: &mut dyn SearchMonitor = if args.verbose {
        log_monitor = LogMonitor::new(args.log_every);
        &mut log_monitor
    } else {
        &mut noop_monitor
    };

    let outcome = solve_with_monitor(args.size, algorithm, &config, monitor)
        .with_context(|| format!("{algorithm} failed on a {}-queens board", args.size))?;

    if !outcome.solved {
        eprintln!(
            "warning: {algorithm} stopped after {} iterations without a solution; printing the best board found",
            outcome.iterations
        );
    }

    println!("{}", outcome.board);
    Ok(())
}
