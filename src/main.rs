//! CLI entry point for bitroot-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bitroot_blog::config::OutputFormat;
use bitroot_blog::{commands, Site};

#[derive(Parser)]
#[command(name = "bitroot-blog")]
#[command(version)]
#[command(about = "Inspect and render the BITROOT blog posts", long_about = None)]
struct Cli {
    /// Directory holding _config.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or categories
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,

        /// Show at most this many posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print a shortened excerpt under each post
        #[arg(short, long)]
        excerpts: bool,
    },

    /// Print every post slug in order
    Slugs {
        /// Also print the page path of each post
        #[arg(short, long)]
        paths: bool,
    },

    /// Show a post with its rendered content
    Show {
        /// Slug of the post
        slug: String,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Render markup from a file or stdin
    Render {
        /// File to read (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format (defaults to the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check the post table for ordering problems
    Check,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "bitroot_blog=debug,info"
    } else {
        "bitroot_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = Site::new(&base_dir)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List {
            r#type,
            category,
            limit,
            excerpts,
        } => {
            commands::list::run(
                &site,
                &mut out,
                &r#type,
                category.as_deref(),
                limit,
                excerpts,
            )?;
        }

        Commands::Slugs { paths } => {
            commands::slugs::run(&site, &mut out, paths)?;
        }

        Commands::Show { slug, format } => {
            let format = format.unwrap_or(site.config.default_format);
            commands::show::run(&site, &mut out, &slug, format)?;
        }

        Commands::Render { file, format } => {
            let format = format.unwrap_or(site.config.default_format);
            let input = commands::render::read_input(file.as_deref())?;
            commands::render::run(&site, &mut out, &input, format)?;
        }

        Commands::Check => {
            commands::check::run(&site, &mut out)?;
        }

        Commands::Version => {
            writeln!(out, "bitroot-blog version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    out.flush()?;
    Ok(())
}
