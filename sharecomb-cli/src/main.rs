use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::{error, info};

use sharecomb::document::{self, JsonFileSource};
use sharecomb::interpolate::interpolate_at_zero;
use sharecomb::reconstruct::{decode_shares, select_shares};
use sharecomb_traits::orchestration::{CaseSource, SecretSink};
use sharecomb_traits::shares::ReconstructionCase;
use sharecomb_traits::ReconstructionError;

/// Reconstruct shared secrets from JSON case documents.
#[derive(Parser)]
#[command(name = "sharecomb")]
struct Cli {
    /// Case documents to reconstruct. With none given, the bundled sample cases are run.
    files: Vec<PathBuf>,

    /// Write the bundled sample cases as JSON fixtures into this directory and exit.
    #[arg(long, value_name = "DIR")]
    emit_fixtures: Option<PathBuf>,
}

/// Prints every reconstructed secret to standard output.
struct ConsoleSink;

impl SecretSink for ConsoleSink {
    fn publish(&mut self, label: &str, secret: &str) {
        println!("{}: secret = {}", label, secret);
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(directory) = cli.emit_fixtures {
        match document::write_sample_fixtures(&directory) {
            Ok(paths) => {
                for path in paths {
                    info!("Wrote fixture {}", path.display());
                }
            }
            Err(e) => {
                error!("Writing fixtures failed: {}", e);
                exit(1);
            }
        }
        return;
    }

    let (labels, cases) = if cli.files.is_empty() {
        let cases = document::sample_cases();
        let labels: Vec<String> = (1..=cases.len())
            .map(|index| format!("sample case {}", index))
            .collect();
        (labels, cases)
    } else {
        let labels: Vec<String> = cli
            .files
            .iter()
            .map(|path| path.display().to_string())
            .collect();

        let cases = match JsonFileSource::new(cli.files).cases() {
            Ok(cases) => cases,
            Err(e) => {
                error!("{}", e);
                exit(1);
            }
        };
        (labels, cases)
    };

    let mut sink = ConsoleSink;

    for (label, case) in labels.iter().zip(&cases) {
        match run_case(label, case, &mut sink) {
            Ok(()) => {}
            Err(e) => {
                error!("{}: {}", label, e);
                exit(1);
            }
        }
    }
}

/// Reconstructs one case, logging the decoded points along the way, and hands the secret to
/// the sink as a decimal string.
fn run_case(
    label: &str,
    case: &ReconstructionCase,
    sink: &mut dyn SecretSink,
) -> Result<(), ReconstructionError> {
    info!("{}: n = {}, k = {}", label, case.params.n, case.params.k);

    let shares = decode_shares(&case.shares)?;
    for share in &shares {
        info!("{}: decoded point ({}, {})", label, share.x, share.y);
    }

    let selected = select_shares(shares, case.params.k)?;
    let secret = interpolate_at_zero(&selected)?;

    sink.publish(label, &secret.to_string());

    Ok(())
}
