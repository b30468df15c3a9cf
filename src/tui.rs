use std::path::PathBuf;

use anyhow::Result;

use crate::model::PortfolioConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub trace: Option<PathBuf>,
    pub config: PortfolioConfig,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
