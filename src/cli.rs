use clap::{Parser, Subcommand};

/// Live meeting assistant: transcript aggregation, summaries and Q&A over HTTP
#[derive(Debug, Parser)]
#[command(name = "liveassist", version)]
pub struct Cli {
    /// Config file (extension optional)
    #[arg(long, global = true, default_value = "config/liveassist")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Override service.http.bind
        #[arg(long)]
        bind: Option<String>,

        /// Override service.http.port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Draft a mutual fund sales narrative for a prompt
    Pitch {
        /// What the sales rep wants help with
        prompt: String,
    },
}
