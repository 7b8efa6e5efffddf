use {
    clap::Parser,
    dex_dashboard::{Cli, run_app},
    std::{panic, process::ExitCode},
};

fn main() -> ExitCode {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("dex_dashboard"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();

    match run_app(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
