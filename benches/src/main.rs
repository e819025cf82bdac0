use abi_bench::{build_corpus, run_dyn_abi, run_ethabi, Mode, EXAMPLES, SIZE_FACTOR};
use clap::Parser;
use eyre::Result;

/// Generates a random ABI corpus and times both decoders over it.
#[derive(Debug, Parser)]
#[command(name = "abi-bench", about)]
struct Args {
    /// Number of examples per corpus.
    #[arg(short = 'n', long = "examples", default_value_t = EXAMPLES)]
    examples: usize,

    /// Generator seed. A random seed is drawn and printed when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Size factor controlling field counts and blob lengths.
    #[arg(long, default_value_t = SIZE_FACTOR)]
    size_factor: f64,

    /// Restrict the run to a single corpus shape.
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("seed: {seed}");

    let modes = match args.mode {
        Some(mode) => vec![mode],
        None => vec![Mode::Simple, Mode::Intricate],
    };
    for mode in modes {
        let corpus = build_corpus(mode, args.examples, seed, args.size_factor)?;
        let ethabi_time = run_ethabi(&corpus)?;
        let dyn_abi_time = run_dyn_abi(&corpus)?;

        let speedup = (ethabi_time.as_secs_f64() / dyn_abi_time.as_secs_f64() - 1.0) * 100.0;
        println!("{mode}: {} examples", corpus.len());
        println!("  ethabi:  {:.4}s", ethabi_time.as_secs_f64());
        println!("  dyn-abi: {:.4}s", dyn_abi_time.as_secs_f64());
        println!("  dyn-abi speedup: {speedup:.1}%");
    }
    Ok(())
}
