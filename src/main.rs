// cargo watch -x 'fmt' -x 'run -- plan 192.168.1.0 4 --table'

use clap::Parser;
use colored::Colorize;
use std::error::Error;
use uniguru_netcalc::cli::{execute, Cli};
use uniguru_netcalc::config::{OutputFormat, Settings};
use uniguru_netcalc::logging::init_logging;
use uniguru_netcalc::output::error_json;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    init_logging(&settings.log_config)?;
    settings.log_warnings();
    settings.apply_color();
    log::info!("#Start main()");

    let cli = Cli::parse();
    let format = cli.output_format(settings.output);

    match execute(&cli.command, format) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            log::debug!("command failed: {e}");
            match format {
                OutputFormat::Json => eprintln!("{}", error_json(&e.to_string())),
                OutputFormat::Text => eprintln!("{} {e}", "error:".red().bold()),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
