//! # Framecalc CLI Application
//!
//! Analyzes a beam or base frame project and prints a summary followed by
//! the JSON results.
//!
//! ```text
//! frame_cli [PROJECT.bfa] [--save PATH]
//! ```
//!
//! Without a project path the CLI prompts for a demo frame. Set `RUST_LOG`
//! (e.g. `RUST_LOG=debug`) to see solver logging.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};
use serde::Serialize;

use frame_core::calculations::{AnalysisConfiguration, CrossSectionProfile};
use frame_core::engine::{AnalysisInput, AnalysisResults};
use frame_core::errors::{CalcError, CalcResult};
use frame_core::file_io::{load_project, save_project};
use frame_core::loads::Load;
use frame_core::materials::Material;
use frame_core::project::{AnalysisProject, GlobalSettings};
use frame_core::warnings::InputWarning;

const USAGE: &str = "usage: frame_cli [PROJECT.bfa] [--save PATH]";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    project: Option<PathBuf>,
    save: Option<PathBuf>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> CalcResult<Args> {
    let mut args = Args::default();
    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--save" => {
                let path = raw
                    .next()
                    .ok_or_else(|| CalcError::invalid_input("--save", "", "Expected a file path"))?;
                args.save = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                return Err(CalcError::invalid_input("argument", flag, USAGE));
            }
            path => {
                if args.project.is_some() {
                    return Err(CalcError::invalid_input("argument", path, "Only one project file is accepted"));
                }
                args.project = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Interactive demo: a 100×218 mm S235 frame with one central point load
fn demo_project() -> AnalysisProject {
    println!("No project file given. Running demo frame...");
    println!();

    let length_mm = prompt_f64("Enter frame length (mm) [2000]: ", 2000.0);
    let width_mm = prompt_f64("Enter frame width (mm) [1000]: ", 1000.0);
    let load_n = prompt_f64("Enter central point load (N) [5000]: ", 5000.0);

    let input = AnalysisInput {
        label: "CLI-Demo".to_string(),
        configuration: AnalysisConfiguration::BaseFrame { length_mm, width_mm },
        loads: vec![Load::point(load_n, length_mm / 2.0)],
        sections: Vec::new(),
        cross_section: CrossSectionProfile::Rectangular {
            width_mm: 100.0,
            height_mm: 218.0,
        },
        material: Material::SteelS235,
        density_kg_m3: None,
    };

    AnalysisProject::new("", "DEMO", "").with_input(input)
}

fn print_summary(project: &AnalysisProject, results: &AnalysisResults, warnings: &[InputWarning]) {
    let settings: &GlobalSettings = &project.settings;
    let unit = settings.display_unit.symbol();
    let force = |n: f64| settings.display_force(n);
    let input = &project.input;

    println!();
    println!("═══════════════════════════════════════");
    println!("  {} RESULTS", input.configuration.display_name().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    if !input.label.is_empty() {
        println!("  Label:    {}", input.label);
    }
    println!("  Section:  {}", input.cross_section.display_name());
    println!("  Material: {}", input.material.display_name());
    println!("  Loads:    {} (+{} sections)", input.loads.len(), input.sections.len());
    println!();
    println!("Statics:");
    println!("  Total load    = {:.1} {}", force(results.total_applied_load_n), unit);
    println!("  Load per beam = {:.1} {} ({} beams)", force(results.load_per_beam_n), unit, results.total_beams);
    let r = results.corner_reactions;
    println!(
        "  Reactions     = R1 {:.1}, R2 {:.1}, R3 {:.1}, R4 {:.1} {}",
        force(r.r1),
        force(r.r2),
        force(r.r3),
        force(r.r4),
        unit
    );
    println!("  V_max = {:.1} {}", force(results.max_shear_force_n), unit);
    println!("  M_max = {:.1} N·m", results.max_bending_moment_nm);
    println!();
    println!("Stress:");
    println!("  σ = {:.2} MPa", results.max_normal_stress_mpa);
    println!("  τ = {:.2} MPa", results.max_shear_stress_mpa);
    println!("  δ = {:.3} mm", results.max_deflection_m * 1000.0);
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  SAFETY FACTOR: {:.2} {}",
        results.safety_factor,
        if results.safety_factor >= 1.0 { "[OK]" } else { "[FAIL]" }
    );
    println!("═══════════════════════════════════════");

    if !warnings.is_empty() {
        println!();
        println!("Input warnings:");
        for w in warnings {
            println!("  - {}", w);
        }
    }
}

/// JSON payload printed after the summary
#[derive(Serialize)]
struct Report<'a> {
    label: &'a str,
    results: &'a AnalysisResults,
    warnings: &'a [InputWarning],
}

fn run(args: Args) -> CalcResult<()> {
    let project = match &args.project {
        Some(path) => {
            info!("loading {}", path.display());
            load_project(path)?
        }
        None => demo_project(),
    };

    let warnings = project.warnings();
    let analysis = project.analyze();
    print_summary(&project, &analysis.results, &warnings);

    println!();
    println!("JSON Output:");
    let report = Report {
        label: &project.input.label,
        results: &analysis.results,
        warnings: &warnings,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = &args.save {
        save_project(&project, path)?;
        println!();
        println!("Saved to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Framecalc CLI - Beam & Base Frame Analysis");
    println!("==========================================");
    println!();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CalcResult<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_project_and_save() {
        let parsed = args(&["skid.bfa", "--save", "out.bfa"]).unwrap();
        assert_eq!(parsed.project, Some(PathBuf::from("skid.bfa")));
        assert_eq!(parsed.save, Some(PathBuf::from("out.bfa")));
    }

    #[test]
    fn test_parse_empty() {
        let parsed = args(&[]).unwrap();
        assert!(parsed.project.is_none());
        assert!(parsed.save.is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(args(&["--save"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.bfa", "b.bfa"]).is_err());
    }
}
