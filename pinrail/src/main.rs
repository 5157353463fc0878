mod error;
mod sim;
mod trace;

use std::env;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use crate::trace::Trace;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let loaded = match env::args().nth(1) {
        Some(path) => Trace::from_file(&path),
        None => Trace::demo(),
    };
    let trace = match loaded {
        Ok(trace) => trace,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        },
    };

    match sim::run(&trace) {
        Some(report) => {
            info!(
                "playback finished: {} transitions, {} style patches, final state {:?}",
                report.transitions, report.patches, report.final_state
            );
            ExitCode::SUCCESS
        },
        None => {
            error!("trace has no sidebar target, nothing to drive");
            ExitCode::FAILURE
        },
    }
}
