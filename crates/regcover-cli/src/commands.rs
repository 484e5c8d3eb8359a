//! Subcommand implementations.

use std::path::Path;

use regcover_config::CoverConfig;
use regcover_core::{RegcoverError, RelationStore};
use regcover_solver::{scan_coverage_curve, CurveOptions, Formulation, MicrolpGateway, Weights};
use tracing::{info, warn};

use crate::cli::Command;
use crate::error::CliError;
use crate::mappings::read_mappings;
use crate::output::{write_list, write_lp_file, CurveWriter};

pub fn run(command: Command, config: &CoverConfig) -> Result<(), CliError> {
    info!(event = "command", name = command.name());
    match command {
        Command::Minmax {
            mappings,
            regulator_weight,
            target_weight,
            out_regulators,
            out_targets,
        } => {
            let store = load(&mappings)?;
            let weights = Weights::new(
                parse_weight(&regulator_weight)?,
                parse_weight(&target_weight)?,
            )?;
            let formulation =
                Formulation::weighted_selection(store, MicrolpGateway::new(), weights)?;
            solve_and_write(formulation, config, &out_regulators, &out_targets)
        }
        Command::Maxgene {
            mappings,
            budget,
            out_regulators,
            out_targets,
        } => {
            let store = load(&mappings)?;
            let budget = parse_budget(&budget)?;
            let formulation =
                Formulation::cardinality_constrained(store, MicrolpGateway::new(), budget)?;
            solve_and_write(formulation, config, &out_regulators, &out_targets)
        }
        Command::MaxgeneCurve {
            mappings,
            out_curve,
        } => {
            let store = load(&mappings)?;
            let writer = CurveWriter::create(&out_curve)?;
            let mut formulation =
                Formulation::cardinality_constrained(store, MicrolpGateway::new(), 0)?;
            report_model(&formulation, config)?;

            let options = CurveOptions {
                max_budget: config.curve.max_budget,
                shortcut_on_full_coverage: config.curve.shortcut_on_full_coverage,
            };
            let curve = scan_coverage_curve(&mut formulation, &options)?;
            writer.write(&curve)?;
            println!(
                "Wrote coverage for {} budgets ({} solved) to {}.",
                curve.len(),
                curve.solve_count(),
                out_curve.display()
            );
            Ok(())
        }
        Command::Minmirna { mappings, .. } | Command::MinmirnaCurve { mappings, .. } => {
            load(&mappings)?;
            warn!(event = "unimplemented", name = "minmirna");
            eprintln!("Not yet implemented!");
            Ok(())
        }
    }
}

/// Reads the mapping file and prints its statistics.
fn load(path: &Path) -> Result<RelationStore, CliError> {
    let store = read_mappings(path)?;
    println!(
        "Read {} mappings between {} regulators and {} targets.",
        store.num_mappings(),
        store.num_regulators(),
        store.num_targets()
    );
    Ok(store)
}

fn report_model(
    formulation: &Formulation<MicrolpGateway>,
    config: &CoverConfig,
) -> Result<(), CliError> {
    println!("Created ILP formulation with {}.", formulation.statistics());
    if let Some(path) = &config.export.lp_file {
        write_lp_file(path, &formulation.to_lp())?;
        info!(event = "lp_written", path = %path.display());
    }
    Ok(())
}

fn solve_and_write(
    mut formulation: Formulation<MicrolpGateway>,
    config: &CoverConfig,
    out_regulators: &Path,
    out_targets: &Path,
) -> Result<(), CliError> {
    report_model(&formulation, config)?;
    let selection = formulation.solve()?;
    println!(
        "Solution contains {} regulators and {} targets.",
        selection.regulators.len(),
        selection.targets.len()
    );
    write_list(out_regulators, &selection.regulators)?;
    write_list(out_targets, &selection.targets)?;
    Ok(())
}

fn parse_weight(value: &str) -> Result<f64, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber(value.to_owned()))
}

/// Parses a budget. Negative values are numbers, but not valid budgets.
fn parse_budget(value: &str) -> Result<usize, CliError> {
    let budget: i64 = value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber(value.to_owned()))?;
    usize::try_from(budget).map_err(|_| {
        RegcoverError::Config(format!("budget must not be negative, got {budget}")).into()
    })
}
