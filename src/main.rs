use{
    std::{
        process::ExitCode,
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*
};

pub mod sir_model;
pub mod city_loader;
pub mod misc_types;
pub mod stats_methods;
pub mod trial_runner;
pub mod simulate;
pub mod json_parsing;
pub mod logging;
pub mod error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let start_time = Instant::now();
    let opt = simulate::RingSir::from_args();
    if let Err(e) = logging::init_logging(opt.log_level){
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    log::info!("ring_sir v{VERSION}");

    match opt.execute(){
        Ok(()) => {
            log::info!("Execution took {}", humantime::format_duration(start_time.elapsed()));
            ExitCode::SUCCESS
        },
        Err(e) => {
            // the city never gets simulated if it fails to load
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}
