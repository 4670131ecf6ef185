//! Command-line front end for the pipelined core.
//!
//! This binary provides two modes. It performs:
//! 1. **Run:** Load a program listing, simulate it under one hazard policy, and
//!    print the final state with an optional pipeline diagram and statistics.
//! 2. **Compare:** Simulate the same program under both policies and check that
//!    they agree on the architectural state.
//!
//! Exit status is 0 for a drained run, 1 when the program or configuration
//! cannot be loaded, and 2 when the cycle limit is hit or the policies diverge.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rvpipe_core::sim::{PipelineDiagram, Program, RunOutcome, load_program_file};
use rvpipe_core::{Config, HazardPolicy, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rvpipe",
    author,
    version,
    about = "Cycle-accurate five-stage RISC-V pipeline simulator",
    long_about = "Simulate a hex program listing on a five-stage pipeline.\n\nEach non-blank line of PROGRAM starts with a 32-bit hex word; the rest of the line is used as its label.\n\nExamples:\n  rvpipe run prog.hex --diagram\n  rvpipe run prog.hex --policy stall --mem 0x0=7 --stats\n  rvpipe compare prog.hex"
)]
struct Cli {
    /// Emit per-stage trace events from the core (default filter `rvpipe_core=trace`).
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program under one hazard policy.
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Hazard policy; overrides the config file.
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Print the per-cycle pipeline diagram.
        #[arg(long)]
        diagram: bool,

        /// Print performance statistics.
        #[arg(long)]
        stats: bool,
    },

    /// Run a program under both policies and compare the results.
    Compare {
        #[command(flatten)]
        sim: SimArgs,
    },
}

/// Program, configuration and initial state shared by every subcommand.
#[derive(Args, Debug)]
struct SimArgs {
    /// Program listing to simulate.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cycle bound; overrides the config file.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Preload a memory word, as ADDR=VALUE (hex with 0x, or decimal).
    #[arg(long = "mem", value_name = "ADDR=VALUE", value_parser = parse_mem)]
    mem: Vec<(u64, u64)>,

    /// Preload a register, as xN=VALUE.
    #[arg(long = "reg", value_name = "xN=VALUE", value_parser = parse_reg)]
    reg: Vec<(usize, u64)>,
}

impl SimArgs {
    /// Reads the config and program, applying command-line overrides.
    fn prepare(&self, trace: bool) -> Option<(Config, Program)> {
        let mut cfg = load_config(self.config.as_deref())?;
        if let Some(max) = self.max_cycles {
            cfg.general.max_cycles = max;
        }
        cfg.general.trace_instructions |= trace;
        let prog = load_program(&self.program)?;
        Some((cfg, prog))
    }

    /// Builds a simulator for `cfg` with the program loaded and seeds applied.
    fn simulator(&self, cfg: &Config, prog: &Program) -> Simulator {
        let mut sim = Simulator::new(cfg);
        sim.load(&prog.words);
        for &(addr, value) in &self.mem {
            sim.memory_mut().write(addr, value);
        }
        for &(idx, value) in &self.reg {
            sim.registers_mut().write(idx, value);
        }
        sim
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Stall,
    Forwarding,
}

impl From<PolicyArg> for HazardPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Stall => Self::Stall,
            PolicyArg::Forwarding => Self::Forwarding,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    match cli.command {
        Commands::Run {
            sim,
            policy,
            diagram,
            stats,
        } => {
            let Some((mut cfg, prog)) = sim.prepare(cli.trace) else {
                return ExitCode::from(1);
            };
            if let Some(policy) = policy {
                cfg.pipeline.hazard_policy = policy.into();
            }
            cmd_run(&sim, &cfg, &prog, diagram, stats)
        }
        Commands::Compare { sim } => {
            let Some((cfg, prog)) = sim.prepare(cli.trace) else {
                return ExitCode::from(1);
            };
            cmd_compare(&sim, &cfg, &prog)
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "warn,rvpipe_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Option<Config> {
    match path.map(Config::from_file) {
        None => Some(Config::default()),
        Some(Ok(cfg)) => Some(cfg),
        Some(Err(e)) => {
            error!("{e}");
            eprintln!("error: {e}");
            None
        }
    }
}

fn load_program(path: &Path) -> Option<Program> {
    match load_program_file(path) {
        Ok(prog) => Some(prog),
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            None
        }
    }
}

/// Runs one simulation and prints its results.
fn cmd_run(args: &SimArgs, cfg: &Config, prog: &Program, diagram: bool, stats: bool) -> ExitCode {
    let mut sim = args.simulator(cfg, prog);

    let mut chart = PipelineDiagram::new(prog);
    let summary = sim.run_traced(&mut chart);

    println!("Policy: {}", sim.policy());
    println!();
    if diagram {
        println!("Pipeline Diagram:");
        print!("{}", chart.render());
        println!();
    }
    print!("{}", sim.final_state());
    if stats {
        println!();
        sim.stats().print();
    }

    match summary.outcome {
        RunOutcome::Drained => ExitCode::SUCCESS,
        RunOutcome::CycleLimit => ExitCode::from(2),
    }
}

/// Runs both policies and reports whether they agree.
fn cmd_compare(args: &SimArgs, cfg: &Config, prog: &Program) -> ExitCode {
    let mut states = Vec::with_capacity(HazardPolicy::ALL.len());
    let mut clean = true;

    for policy in HazardPolicy::ALL {
        let mut run_cfg = cfg.clone();
        run_cfg.pipeline.hazard_policy = policy;
        let mut sim = args.simulator(&run_cfg, prog);
        let summary = sim.run();
        let stats = sim.stats();
        println!(
            "{policy:<10} cycles={:<6} retired={:<6} stalls={:<4} flushes={:<4} forwards={}",
            summary.cycles,
            stats.instructions_retired,
            stats.stalls_data,
            stats.stalls_control,
            stats.forwards
        );
        if summary.outcome == RunOutcome::CycleLimit {
            println!("  {policy}: cycle limit reached");
            clean = false;
        }
        states.push(sim.final_state());
    }

    let agree = states.windows(2).all(|w| w[0].same_architecture(&w[1]));
    if agree {
        println!("Architectural state: identical");
    } else {
        println!("Architectural state: DIVERGENT");
        for (policy, state) in HazardPolicy::ALL.iter().zip(&states) {
            println!();
            println!("[{policy}]");
            print!("{state}");
        }
        clean = false;
    }

    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn parse_number(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text
            .parse::<u64>()
            .or_else(|_| text.parse::<i64>().map(|v| v as u64)),
    };
    parsed.map_err(|e| format!("`{text}`: {e}"))
}

fn parse_mem(text: &str) -> Result<(u64, u64), String> {
    let (addr, value) = text
        .split_once('=')
        .ok_or_else(|| format!("`{text}`: expected ADDR=VALUE"))?;
    Ok((parse_number(addr)?, parse_number(value)?))
}

fn parse_reg(text: &str) -> Result<(usize, u64), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("`{text}`: expected xN=VALUE"))?;
    let idx = name
        .trim()
        .strip_prefix('x')
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&n| n < 32)
        .ok_or_else(|| format!("`{name}`: expected a register x0..x31"))?;
    Ok((idx, parse_number(value)?))
}
