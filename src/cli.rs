use clap::Parser;

use crate::lookup::DEFAULT_ENDPOINT;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Nickname to check once. Starts the interactive prompt when omitted
    #[arg(value_name = "NAME", conflicts_with = "generate")]
    pub name: Option<String>,

    /// Generate a random nickname, check it once and exit
    #[arg(short, long)]
    pub generate: bool,

    /// Base URL of the profile lookup service
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Write the log to this file as well
    #[arg(long, value_name = "FILE")]
    pub log: Option<String>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
