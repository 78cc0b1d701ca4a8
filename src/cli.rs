//! Command-line interface for the calculators.

use crate::config::OutputFormat;
use crate::output::{
    classification_json, plan_json, render_classification, render_plan, render_subnet_table,
};
use crate::processing::{classify, parse_subnet_count, plan};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(
    name = "uniguru-netcalc",
    version,
    about = "IPv4 class and /24 subnet calculator for the CNDC lectures"
)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show class, default mask, range and public/private type of an address
    Classify {
        /// Dotted-decimal IPv4 address, e.g. 192.168.1.1
        ip: String,
    },
    /// Split a /24 into equal subnets
    Plan {
        /// Any address in the /24 to split, e.g. 192.168.1.0
        base_network: String,
        /// Number of subnets needed
        #[arg(allow_negative_numbers = true)]
        subnets: String,
        /// Also list every subnet with its host range
        #[arg(long)]
        table: bool,
    },
}

impl Cli {
    /// `--json` wins over the configured format.
    pub fn output_format(&self, configured: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            configured
        }
    }
}

/// Run one command and return the text to print.
pub fn execute(command: &Command, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    log::info!("#Start execute({command:?})");
    match command {
        Command::Classify { ip } => {
            let result = classify(ip)?;
            Ok(match format {
                OutputFormat::Text => render_classification(&result),
                OutputFormat::Json => classification_json(&result)?,
            })
        }
        Command::Plan {
            base_network,
            subnets,
            table,
        } => {
            let count = parse_subnet_count(subnets)?;
            let plan = plan(base_network, count)?;
            Ok(match format {
                OutputFormat::Text if *table => {
                    format!(
                        "{}\n\n{}",
                        render_plan(&plan),
                        render_subnet_table(&plan.subnets())
                    )
                }
                OutputFormat::Text => render_plan(&plan),
                OutputFormat::Json => plan_json(&plan, *table)?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_parse_classify() {
        let cli = parse(&["uniguru-netcalc", "classify", "10.0.0.1"]);
        assert!(!cli.json);
        assert_eq!(
            cli.command,
            Command::Classify {
                ip: "10.0.0.1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_plan_with_flags() {
        let cli = parse(&[
            "uniguru-netcalc",
            "plan",
            "192.168.1.0",
            "4",
            "--table",
            "--json",
        ]);
        assert!(cli.json);
        assert_eq!(cli.output_format(OutputFormat::Text), OutputFormat::Json);
        assert_eq!(
            cli.command,
            Command::Plan {
                base_network: "192.168.1.0".to_string(),
                subnets: "4".to_string(),
                table: true,
            }
        );
    }

    #[test]
    fn test_parse_negative_count() {
        let cli = parse(&["uniguru-netcalc", "plan", "192.168.1.0", "-3"]);
        assert!(matches!(cli.command, Command::Plan { ref subnets, .. } if subnets == "-3"));
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["uniguru-netcalc"]).is_err());
    }

    #[test]
    fn test_execute_classify_text() {
        let out = execute(
            &Command::Classify {
                ip: "127.0.0.1".to_string(),
            },
            OutputFormat::Text,
        )
        .unwrap();
        assert!(out.contains("Loopback"));
    }

    #[test]
    fn test_execute_plan_json_table() {
        let out = execute(
            &Command::Plan {
                base_network: "192.168.1.0".to_string(),
                subnets: "4".to_string(),
                table: true,
            },
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["subnets"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_execute_plan_text_table() {
        let out = execute(
            &Command::Plan {
                base_network: "192.168.1.0".to_string(),
                subnets: "2".to_string(),
                table: true,
            },
            OutputFormat::Text,
        )
        .unwrap();
        assert!(out.contains("192.168.1.128/25"));
    }

    #[test]
    fn test_execute_errors() {
        let err = execute(
            &Command::Classify {
                ip: "abc.1.1.1".to_string(),
            },
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("malformed IPv4 address"));

        let err = execute(
            &Command::Plan {
                base_network: "192.168.1.0".to_string(),
                subnets: "3.5".to_string(),
                table: false,
            },
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid subnet count '3.5'"));
    }
}
