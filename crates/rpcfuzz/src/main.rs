use clap::Parser;

use rpcfuzz::AppError;
use rpcfuzz::Application;
use rpcfuzz::RunConfig;
use rpcfuzz::app::render_summary;
use rpcfuzz::commands::Cli;
use rpcfuzz::telemetry;
use rpcfuzz_common::Colors;
use rpcfuzz_common::color_init;

fn main() {
    if let Err(e) = run() {
        if let Some(app_error) = e.downcast_ref::<AppError>() {
            eprintln!("{} {}", Colors::error("Error:"), app_error);
            if let Some(suggestion) = app_error.suggestion() {
                eprintln!("{} {}", Colors::dim("Suggestion:"), suggestion);
            }
            if app_error.is_retryable() {
                eprintln!(
                    "{}",
                    Colors::dim("(This error may be transient - retry may succeed)")
                );
            }
            std::process::exit(app_error.exit_code());
        } else {
            eprintln!("{} {}", Colors::error("Error:"), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    color_init(cli.no_color);
    let _telemetry = telemetry::init_tracing(telemetry::default_level(cli.verbose), cli.log_format);

    let app = Application::new(RunConfig::from_cli(&cli));
    let report = app.run()?;

    println!("{}", render_summary(&report));
    app.finish(&report)?;
    Ok(())
}
