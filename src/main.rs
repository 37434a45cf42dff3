use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info};

use sparsebench::{
    classical_multiply, classical_multiply_parallel, fill_sparse_seeded, generate_sparse,
    multiply_coo, multiply_coo_parallel, BenchConfig, CoordinateMatrix, DenseMatrix, Error, Result,
    WorkerCount,
};

/// Dense vs. sparse (COO) square matrix multiplication benchmark
#[derive(Debug, Parser)]
#[command(name = "sparsebench", version, about)]
struct Cli {
    /// Matrix dimension n; prompted for on stdin when omitted
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Worker threads per parallel stage [default: available cores]
    #[arg(short, long)]
    workers: Option<usize>,

    /// Seed for matrix generation
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the dense classical baselines
    #[arg(long)]
    no_dense: bool,

    /// Check that every strategy produced the same product
    #[arg(long)]
    verify: bool,

    /// Print the operands and the product
    #[arg(long)]
    print: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> Result<BenchConfig> {
        let workers = match self.workers {
            Some(w) => WorkerCount::new(w)?,
            None => WorkerCount::detect(),
        };

        Ok(BenchConfig {
            size: self.size,
            workers,
            seed: self.seed,
            run_dense: !self.no_dense,
            verify: self.verify,
            print: self.print,
        })
    }
}

/// Setup logging, preferring RUST_LOG over the command line
fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Asks for the matrix size on stdin
fn prompt_size() -> Result<usize> {
    println!("Choose your matrices size");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let answer = line.trim();
    answer
        .parse()
        .map_err(|_| Error::InvalidSize(answer.to_string()))
}

/// Runs `f` and logs how long it took
fn timed<T>(stage: &'static str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    info!(stage, elapsed_ms = elapsed.as_millis() as u64, "{} time: {:?}", stage, elapsed);
    result
}

fn check(
    reference: &(&'static str, CoordinateMatrix),
    candidate: &(&'static str, CoordinateMatrix),
) -> Result<()> {
    if reference.1 != candidate.1 {
        return Err(Error::VerificationFailed {
            left: reference.0,
            right: candidate.0,
        });
    }
    debug!(left = reference.0, right = candidate.0, "products agree");
    Ok(())
}

fn run(config: &BenchConfig) -> Result<()> {
    let n = match config.size {
        Some(n) => n,
        None => prompt_size()?,
    };
    let workers = config.workers;
    info!(n, workers = workers.get(), "starting benchmark");

    let (m1, m2) = timed("generation", || match config.seed {
        Some(seed) => {
            let mut m1 = DenseMatrix::zeros(n);
            let mut m2 = DenseMatrix::zeros(n);
            fill_sparse_seeded(&mut m1, workers, seed);
            fill_sparse_seeded(&mut m2, workers, seed.wrapping_add(1));
            (m1, m2)
        }
        None => (generate_sparse(n, workers), generate_sparse(n, workers)),
    });
    info!(nnz_a = m1.nnz(), nnz_b = m2.nnz(), "generated operands");

    let (a, b) = timed("coo conversion", || (m1.to_coo(workers), m2.to_coo(workers)));

    let mut products = Vec::new();

    if config.run_dense {
        let c = timed("single-threaded classical multiplication", || {
            classical_multiply(&m1, &m2)
        });
        products.push(("classical", c.to_coo(workers)));

        let c = timed("multithreaded classical multiplication", || {
            classical_multiply_parallel(&m1, &m2)
        });
        products.push(("classical-parallel", c.to_coo(workers)));
    }

    let c = timed("coo multiplication", || multiply_coo(&a, &b));
    products.push(("coo", c.to_sorted()));

    let c = timed("multithreaded coo multiplication", || {
        multiply_coo_parallel(&a, &b, workers)
    });
    products.push(("coo-parallel", c.to_sorted()));

    if config.verify {
        if let Some((reference, rest)) = products.split_first() {
            for candidate in rest {
                check(reference, candidate)?;
            }
        }
        info!(strategies = products.len(), "all products agree");
    }

    if config.print {
        println!("A:\n{}", m1);
        println!("B:\n{}", m2);
        if let Some((_, c)) = products.last() {
            println!("A×B:\n{}", c.to_dense(n));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    let config = cli.into_config()?;
    debug!(?config, "configuration");

    run(&config)
}
