use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Member design file (JSON).
    #[arg(value_name = "PATH", required_unless_present = "list_sections")]
    pub input: Option<PathBuf>,

    /// Print only the JSON result.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// List the built-in section designations and exit.
    #[arg(long, default_value_t = false)]
    pub list_sections: bool,
}
