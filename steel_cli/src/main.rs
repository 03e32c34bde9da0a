//! # Steel Member CLI
//!
//! Evaluates a member design file: section capacity about both axes, then
//! α_m and effective length for every segment between restraints.
//!
//! ```text
//! steel_cli beam.json
//! steel_cli --json beam.json
//! RUST_LOG=steel_core=debug steel_cli beam.json
//! ```

mod args;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use steel_core::design_input::{load_design_input, MemberDesignResult};
use steel_core::sections::builtin_sections;
use steel_core::CalcResult;

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    if args.list_sections {
        for designation in builtin_sections().designations() {
            println!("{}", designation);
        }
        return ExitCode::SUCCESS;
    }

    let Some(path) = args.input.as_deref() else {
        eprintln!("Error: no design file given");
        return ExitCode::FAILURE;
    };

    info!(path = %path.display(), "loading member design");
    match run(path) {
        Ok(result) => {
            if !args.json {
                print_report(&result);
                println!();
                println!("JSON Output:");
            }
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(path: &std::path::Path) -> CalcResult<MemberDesignResult> {
    load_design_input(path)?.evaluate()
}

fn print_report(result: &MemberDesignResult) {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  MEMBER MOMENT CAPACITY  {}", result.label);
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("Section: {}", result.section);
    println!("  {}", result.major_axis.summary());
    println!("  {}", result.minor_axis.summary());
    println!();
    println!("Segments:");
    println!(
        "  {:>3}  {:>13}  {:>4}  {:>4}  {:>9}  {:>6}  {:>9}",
        "#", "span", "rst", "load", "l (mm)", "α_m", "le (mm)"
    );
    for s in &result.segments {
        println!(
            "  {:>3}  {:>6.3}-{:<6.3}  {:>4}  {:>4}  {:>9.0}  {:>5.2}{}  {:>9.0}",
            s.index,
            s.start_position,
            s.end_position,
            s.restraints,
            s.load_position.code(),
            s.length_mm,
            s.alpha_m,
            if s.alpha_m_overridden { "*" } else { " " },
            s.effective_length_mm
        );
    }
    if result.segments.iter().any(|s| s.alpha_m_overridden) {
        println!("  * α_m supplied in the design file");
    }

    for s in &result.segments {
        println!();
        println!("{}", s.summary());
    }
    println!("═══════════════════════════════════════════════════════════════");
}
