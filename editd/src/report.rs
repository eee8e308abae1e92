use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use libeditd::align::WavefrontParams;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Solver {
    Sequential,
    Wavefront,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Sequential => write!(f, "sequential"),
            Solver::Wavefront => write!(f, "wavefront"),
        }
    }
}

/// One timed solve.
#[derive(Serialize, Debug, Clone)]
pub struct Run {
    pub solver: Solver,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<WavefrontParams>,
    pub elapsed_us: u128,
    pub result: usize,
}

impl Run {
    pub fn new(
        solver: Solver,
        params: Option<WavefrontParams>,
        elapsed: Duration,
        result: usize,
    ) -> Self {
        Self {
            solver,
            params,
            elapsed_us: elapsed.as_micros(),
            result,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub length_1: usize,
    pub length_2: usize,
    pub runs: Vec<Run>,
}

impl Report {
    pub fn write(&self, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
        if json {
            serde_json::to_writer(&mut *out, self)?;
            writeln!(out)?;
            return Ok(());
        }

        match self.runs.as_slice() {
            [run] => {
                writeln!(out, "{} us", run.elapsed_us)?;
                writeln!(out, "RESULT: {}", run.result)?;
            }
            runs => {
                for run in runs {
                    writeln!(out, "{}", run.solver.to_string().bold())?;
                    writeln!(out, "{} us", run.elapsed_us)?;
                    writeln!(out, "RESULT: {}", run.result)?;
                }
            }
        }
        Ok(())
    }
}
