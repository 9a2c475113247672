//! CLI for the YMM4 plugin catalog.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use ymmcat_core::config;
use ymmcat_core::viewer::SortOrder;

use commands::{run_browse, run_collect, run_list, run_render, run_show, run_stats};

/// Top-level CLI for the plugin catalog.
#[derive(Debug, Parser)]
#[command(name = "ymmcat")]
#[command(about = "YMM4 plugin catalog: collect plugin repositories and browse the catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Search, category and sort selection shared by the listing commands.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Category id (e.g. voice-synthesis) or "all".
    #[arg(long, default_value = "all")]
    pub category: String,
    /// Case-insensitive search over name, description, author, tags and category label.
    #[arg(long)]
    pub search: Option<String>,
    /// name-asc, name-desc, stars-desc, updated-desc or updated-asc.
    #[arg(long, default_value = "updated-desc")]
    pub sort: SortOrder,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Query the hosting platform and regenerate the dataset.
    Collect {
        /// Dataset output path (default: <data_dir>/plugins.json).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Manual override file (default: <data_dir>/plugins-manual.json).
        #[arg(long, value_name = "PATH")]
        manual: Option<PathBuf>,
    },

    /// List catalog entries matching the filters.
    List {
        /// Dataset path or http(s) URL.
        #[arg(long, value_name = "SRC")]
        data: Option<String>,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the detail view of one entry.
    Show {
        /// Plugin id.
        id: String,
        /// Dataset path or http(s) URL.
        #[arg(long, value_name = "SRC")]
        data: Option<String>,
    },

    /// Show catalog totals and the dataset timestamp.
    Stats {
        /// Dataset path or http(s) URL.
        #[arg(long, value_name = "SRC")]
        data: Option<String>,
    },

    /// Write a static HTML catalog page.
    Render {
        /// Dataset path or http(s) URL.
        #[arg(long, value_name = "SRC")]
        data: Option<String>,
        /// Output HTML file.
        #[arg(long, value_name = "PATH", default_value = "index.html")]
        out: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Interactive session on stdin: type to search, :help for commands.
    Browse {
        /// Dataset path or http(s) URL.
        #[arg(long, value_name = "SRC")]
        data: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Collect { output, manual } => run_collect(&cfg, output, manual).await?,
            CliCommand::List { data, filter } => run_list(&cfg, data.as_deref(), &filter).await?,
            CliCommand::Show { id, data } => run_show(&cfg, data.as_deref(), &id).await?,
            CliCommand::Stats { data } => run_stats(&cfg, data.as_deref()).await?,
            CliCommand::Render { data, out, filter } => {
                run_render(&cfg, data.as_deref(), &out, &filter).await?
            }
            CliCommand::Browse { data } => run_browse(&cfg, data.as_deref()).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
