//! Replays a host lifecycle trace through the hook registry and writes the
//! resulting chart snapshots. See [`chart_hooks::host::Trace`] for the
//! trace format.

use chart_hooks::host::Trace;
use chart_hooks::render::{ChartSnapshotsJsonContractV1, RecordingBackend};
use chart_hooks::{HookRegistry, telemetry};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: chart_hook_trace --input <path> [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace = Trace::from_json_str(&raw).map_err(|err| err.to_string())?;

    let backend = RecordingBackend::new();
    let mut registry = HookRegistry::new(backend.clone());
    trace.replay(&mut registry).map_err(|err| err.to_string())?;

    let contract = ChartSnapshotsJsonContractV1::new(backend.snapshots());
    let json = contract.to_json_pretty().map_err(|err| err.to_string())?;
    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
    })
}
