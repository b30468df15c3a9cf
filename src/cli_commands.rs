use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run command lines without the TUI and print the transcript
    Run(RunArgs),

    /// List the portfolio commands
    Commands,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Command lines to run, in order (reads stdin lines when omitted)
    #[arg(value_name = "LINE")]
    pub(crate) lines: Vec<String>,
}
