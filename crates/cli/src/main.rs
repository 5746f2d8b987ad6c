//! x87 floating-point environment diagnostic CLI.
//!
//! This binary is a thin consumer of the `fpenv-core` operation surface. It
//! performs:
//! 1. **Inspection:** Print the decoded control or status word (`control`,
//!    `status`), or a full JSON/text snapshot (`dump`).
//! 2. **Classification:** Classify values given in decimal or as raw
//!    MSB-first hex bit patterns (`classify`).
//!
//! On x86/x86_64 the commands read the calling thread's real FPU; elsewhere
//! they fall back to a software register model in its reset state.

mod hex;

use clap::{Parser, Subcommand};
use std::process;

use fpenv_core::{FpEnv, RegisterPort};

#[derive(Parser, Debug)]
#[command(
    name = "fpenv",
    author,
    version,
    about = "Inspect and classify against the x87 floating-point environment",
    long_about = "Print the FPU control and status words, dump the decoded environment, \
or classify double-precision values.\n\nValues for classify may be decimal (1.5, -0.0) or \
sixteen MSB-first hex digits with an 0x prefix (0x7ff0000000000001)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the decoded FPU control word.
    Control,

    /// Print the decoded FPU status word.
    Status,

    /// Dump the full environment (both words plus decoded fields).
    Dump {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Classify one or more double-precision values.
    Classify {
        /// Values in decimal or 0x-prefixed hex bit patterns.
        #[arg(required = true)]
        values: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut env = new_env();

    match cli.command {
        Commands::Control => {
            println!("{}", env.port_mut().read_control());
        }
        Commands::Status => {
            println!("{}", env.port_mut().read_status());
        }
        Commands::Dump { json } => cmd_dump(&mut env, json),
        Commands::Classify { values } => cmd_classify(&mut env, &values),
    }
}

/// Prints the environment snapshot as text or JSON. Exits with code 1 if the
/// hardware words fail to decode.
fn cmd_dump<P: RegisterPort>(env: &mut FpEnv<P>, json: bool) {
    let snapshot = env.snapshot().unwrap_or_else(|e| {
        eprintln!("Error reading environment: {e}");
        process::exit(1);
    });

    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", snapshot.control);
        println!("{}", snapshot.status);
        println!("Rounding: {}", snapshot.rounding);
        println!("Precision: {}", snapshot.precision);
        println!("Enabled exceptions: {}", snapshot.mask);
        println!("Sticky exceptions: {}", snapshot.sticky);
    }
}

/// Classifies each value, printing its hex rendering and category. Exits
/// with code 1 on the first unparseable value or classification failure.
fn cmd_classify<P: RegisterPort>(env: &mut FpEnv<P>, values: &[String]) {
    for text in values {
        let value = parse_value(text).unwrap_or_else(|| {
            eprintln!("Error: '{text}' is neither decimal nor a hex bit pattern");
            process::exit(1);
        });
        match env.classify(value) {
            Ok(class) => println!("{}  {:?}", hex::encode(value), class),
            Err(e) => {
                eprintln!("Error classifying {text}: {e}");
                process::exit(1);
            }
        }
    }
}

/// Parses a value from decimal, the NaN sentinel, or an `0x` hex pattern.
fn parse_value(text: &str) -> Option<f64> {
    if text.starts_with("0x") || text == hex::STR_NAN {
        hex::decode(text)
    } else {
        text.parse().ok()
    }
}

/// Builds an environment over the calling thread's real FPU.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn new_env() -> FpEnv<fpenv_core::port::x87::X87Port> {
    FpEnv::new(fpenv_core::port::x87::X87Port::new())
}

/// Builds an environment over the software register model (reset state).
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn new_env() -> FpEnv<fpenv_core::port::soft::SoftPort> {
    FpEnv::new(fpenv_core::port::soft::SoftPort::new())
}
