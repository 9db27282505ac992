use clap::{Parser, Subcommand};

/// SSH host alias of the crawl box. Key-based trust is assumed; crawlfetch
/// never prompts for or manages credentials.
pub const DEFAULT_HOST: &str = "crawler";
pub const DEFAULT_DATA_ROOT: &str = "data";
pub const DEFAULT_FRONTIER_SCRIPT: &str = "frontier-size.py";
pub const DEFAULT_STATE_GLOB: &str = ".scrapy/*";

#[derive(Parser, Debug)]
#[command(name = "crawlfetch", version, about = "Crawl artifact fetcher")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Enable debug logging")]
    pub debug: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_HOST,
        help = "SSH host alias of the remote crawler"
    )]
    pub host: String,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DATA_ROOT,
        help = "Local directory that run directories are created under"
    )]
    pub data_root: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy remote crawl artifacts into the run directory and snapshot the frontier
    Fetch {
        /// Run label; used verbatim as the run directory name
        label: String,
        #[arg(
            long,
            default_value = DEFAULT_FRONTIER_SCRIPT,
            help = "Remote path of the frontier inventory script"
        )]
        frontier_script: String,
        #[arg(
            long,
            default_value = DEFAULT_STATE_GLOB,
            help = "Remote glob of crawler job directories, expanded by the remote shell"
        )]
        state_glob: String,
    },
    /// List run directories under the local data root
    Runs,
    /// Check that transfers could work: data root, scp, ssh
    Doctor,
}
