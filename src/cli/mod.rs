pub mod commands;

use crate::config::DEFAULT_BATCH_SIZE;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ecsfind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Find the EC2 hosts running the tasks of matching ECS services",
    long_about = None
)]
pub struct Cli {
    #[arg(short, long, help = "Substring matched against service ARNs")]
    pub query: String,

    #[arg(short, long, help = "AWS region (defaults to the ambient configuration)")]
    pub region: Option<String>,

    #[arg(short, long, help = "AWS shared config profile")]
    pub profile: Option<String>,

    #[arg(
        long,
        default_value_t = DEFAULT_BATCH_SIZE,
        help = "Identifiers per describe call (1-100)"
    )]
    pub batch_size: usize,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
