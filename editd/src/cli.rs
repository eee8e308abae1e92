use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Raise the log level (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,

    /// Print the run report as a single JSON object
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// The number of characters in each random string
    #[arg(value_name = "LENGTH")]
    pub length: usize,

    /// Seed the random string generator for a reproducible run
    #[arg(short = 's', long = "seed", value_name = "n")]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct SeqArgs {
    /// Arguments that control the random input strings
    #[command(flatten)]
    pub generate_args: GenerateArgs,

    /// Arguments that are common across all editd subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ParArgs {
    /// The number of wavefront worker threads (at most 16)
    #[arg(value_name = "THREAD_COUNT")]
    pub thread_count: usize,

    /// The smallest number of diagonal cells handed to one worker
    #[arg(value_name = "CHUNK_SIZE")]
    pub chunk_size: usize,

    /// Arguments that control the random input strings
    #[command(flatten)]
    pub generate_args: GenerateArgs,

    /// Arguments that are common across all editd subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// The first string
    #[arg(value_name = "A")]
    pub seq_1: String,

    /// The second string
    #[arg(value_name = "B")]
    pub seq_2: String,

    /// The number of wavefront worker threads (at most 16)
    #[arg(short = 't', long = "threads", default_value_t = 4usize, value_name = "n")]
    pub thread_count: usize,

    /// The smallest number of diagonal cells handed to one worker
    #[arg(short = 'c', long = "chunk-size", default_value_t = 1usize, value_name = "n")]
    pub chunk_size: usize,

    /// Arguments that are common across all editd subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Time the sequential solver on two random lowercase strings")]
    Seq(SeqArgs),
    #[command(about = "Time the wavefront solver on two random lowercase strings")]
    Par(ParArgs),
    #[command(about = "Compute the distance between two given strings with both solvers")]
    Pair(PairArgs),
}

impl SubCommands {
    pub fn common_args(&self) -> &CommonArgs {
        match self {
            SubCommands::Seq(args) => &args.common_args,
            SubCommands::Par(args) => &args.common_args,
            SubCommands::Pair(args) => &args.common_args,
        }
    }
}

#[derive(Parser)]
#[command(name = "editd")]
#[command(about = "Compute edit distance sequentially or with a parallel anti-diagonal wavefront")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}
