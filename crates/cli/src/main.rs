use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use skeletonify_core::config::{Animation, PartialConfig, SkeletonProvider};
use skeletonify_core::tags::TagGroup;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skeletonify", about = "Render skeleton loading states for HTML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Skeletonize an HTML file and print the result
    Render {
        /// The HTML file to read (use - for stdin)
        file: String,

        /// Treat the input as a full document (only <body> is skeletonized)
        #[arg(long)]
        document: bool,

        /// Print the input unchanged, as if loading had finished
        #[arg(long)]
        not_loading: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the resolved configuration as JSON
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Configuration sources, applied in order: defaults, config file, flags.
#[derive(Args)]
struct ConfigArgs {
    /// Partial configuration file (.json or .toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Animation style (animation-1 or animation-2)
    #[arg(long)]
    animation: Option<Animation>,

    /// Seconds per animation cycle
    #[arg(long)]
    speed: Option<f64>,

    /// Placeholder background (empty uses the animation default)
    #[arg(long)]
    background: Option<String>,

    #[arg(long)]
    border: Option<String>,

    #[arg(long)]
    border_radius: Option<String>,

    /// Margin shorthand for text placeholders
    #[arg(long)]
    text_margin: Option<String>,

    /// Extra class added to every placeholder
    #[arg(long)]
    class_name: Option<String>,

    /// Tag to leave untouched (repeatable)
    #[arg(long = "except-tag")]
    except_tags: Vec<String>,

    /// Tag group to leave untouched (repeatable)
    #[arg(long = "except-group")]
    except_groups: Vec<TagGroup>,
}

impl ConfigArgs {
    fn provider(&self) -> anyhow::Result<SkeletonProvider> {
        let mut overrides = match &self.config {
            Some(path) => PartialConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PartialConfig::default(),
        };

        let flags = PartialConfig {
            animation: self.animation,
            animation_speed: self.speed,
            background: self.background.clone(),
            border: self.border.clone(),
            border_radius: self.border_radius.clone(),
            text_tags_margin: self.text_margin.clone(),
            class_name: self.class_name.clone(),
            except_tags: non_empty(&self.except_tags),
            except_tag_groups: non_empty(&self.except_groups),
            style: None,
        };
        flags.validate()?;
        overrides.merge(&flags);

        let provider = SkeletonProvider::new(&overrides);
        tracing::debug!(config = ?provider.config(), "resolved skeleton config");
        Ok(provider)
    }
}

fn non_empty<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items.to_vec())
    }
}

fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading {file}"))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            document,
            not_loading,
            config,
        } => {
            let provider = config.provider()?;
            let html = read_input(&file)?;
            let loading = !not_loading;
            let out = if document {
                skeletonify_core::skeletonize_document(&html, provider.config(), loading)
            } else {
                skeletonify_core::skeletonize_html(&html, provider.config(), loading)
            };
            println!("{out}");
        }
        Commands::Config { config } => {
            let provider = config.provider()?;
            println!("{}", serde_json::to_string_pretty(provider.config())?);
        }
    }

    Ok(())
}
