use std::time::Instant;

use anyhow::{bail, Context};
use libeditd::align::{solve_sequential, Wavefront, WavefrontParams};
use libeditd::structs::Problem;
use libeditd::util::{random_lowercase, seeded_rng};
use log::info;

use crate::cli::{GenerateArgs, PairArgs, ParArgs, SeqArgs};
use crate::report::{Report, Run, Solver};

fn generate_pair(args: &GenerateArgs) -> (Vec<u8>, Vec<u8>) {
    let mut rng = seeded_rng(args.seed);
    let seq_1 = random_lowercase(args.length, &mut rng);
    let seq_2 = random_lowercase(args.length, &mut rng);
    (seq_1, seq_2)
}

pub fn run_seq(args: &SeqArgs) -> anyhow::Result<Report> {
    let (seq_1, seq_2) = generate_pair(&args.generate_args);
    let problem = Problem::new(&seq_1, &seq_2);

    let now = Instant::now();
    let result = solve_sequential(&problem);
    let elapsed = now.elapsed();

    info!("sequential: {} x {} in {:?}", seq_1.len(), seq_2.len(), elapsed);

    Ok(Report {
        length_1: seq_1.len(),
        length_2: seq_2.len(),
        runs: vec![Run::new(Solver::Sequential, None, elapsed, result)],
    })
}

pub fn run_par(args: &ParArgs) -> anyhow::Result<Report> {
    let params = WavefrontParams::new(args.thread_count, args.chunk_size);
    let engine = Wavefront::new(params).context("invalid wavefront configuration")?;

    let (seq_1, seq_2) = generate_pair(&args.generate_args);
    let problem = Problem::new(&seq_1, &seq_2);

    let now = Instant::now();
    let warmup = engine
        .solve(&problem)
        .context("wavefront warm-up run failed")?;
    info!("wavefront warm-up in {:?}", now.elapsed());

    let now = Instant::now();
    let result = engine.solve(&problem).context("wavefront run failed")?;
    let elapsed = now.elapsed();

    if result != warmup {
        bail!("wavefront runs disagree: warm-up {warmup}, timed {result}");
    }

    info!("wavefront: {} x {} in {:?}", seq_1.len(), seq_2.len(), elapsed);

    Ok(Report {
        length_1: seq_1.len(),
        length_2: seq_2.len(),
        runs: vec![Run::new(Solver::Wavefront, Some(params), elapsed, result)],
    })
}

pub fn run_pair(args: &PairArgs) -> anyhow::Result<Report> {
    let params = WavefrontParams::new(args.thread_count, args.chunk_size);
    let engine = Wavefront::new(params).context("invalid wavefront configuration")?;

    let seq_1 = args.seq_1.as_bytes();
    let seq_2 = args.seq_2.as_bytes();
    let problem = Problem::new(seq_1, seq_2);

    let now = Instant::now();
    let sequential = solve_sequential(&problem);
    let sequential_elapsed = now.elapsed();

    let now = Instant::now();
    let wavefront = engine.solve(&problem).context("wavefront run failed")?;
    let wavefront_elapsed = now.elapsed();

    if sequential != wavefront {
        bail!("solvers disagree: sequential {sequential}, wavefront {wavefront}");
    }

    Ok(Report {
        length_1: seq_1.len(),
        length_2: seq_2.len(),
        runs: vec![
            Run::new(Solver::Sequential, None, sequential_elapsed, sequential),
            Run::new(Solver::Wavefront, Some(params), wavefront_elapsed, wavefront),
        ],
    })
}
