use clap::{ArgAction, Parser};
use relief_board::application::dto::{ListingRequest, OutputFormat};
use std::path::PathBuf;

/// Show the authority and request listings of a disaster-relief registry contract
#[derive(Parser, Debug)]
#[command(name = "relief-board")]
#[command(version)]
#[command(about = "Show the listings of a disaster-relief registry contract", long_about = None)]
pub struct Args {
    /// Listing to show: state, ground, supply, demand or all
    /// Can be specified multiple times: -l state -l supply
    #[arg(short, long = "listing", value_name = "LISTING", value_parser = parse_listing_name)]
    pub listings: Vec<String>,

    /// Output format: table, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// JSON-RPC endpoint of the chain node
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Address of the registry contract
    #[arg(long, value_name = "ADDRESS")]
    pub contract: Option<String>,

    /// Read listings from a JSON snapshot instead of the chain
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["rpc_url", "contract"])]
    pub snapshot: Option<PathBuf>,

    /// Path to a config file (defaults to relief-board.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable coloured table headers
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_listing_name(name: &str) -> Result<String, String> {
    ListingRequest::parse(&[name])?;
    Ok(name.to_string())
}
