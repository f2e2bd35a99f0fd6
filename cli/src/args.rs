use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "bazinga",
    about = "Replace every run of vowels with \"bazinga\"",
    version
)]
pub struct Cli {
    /// Words to transform; reads standard input when none are given
    pub words: Vec<String>,

    /// Treat uppercase A, E, I, O, U as vowels too
    #[arg(long, short = 'i')]
    pub ignore_case: bool,

    /// Config file to use instead of ~/.bazinga/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
