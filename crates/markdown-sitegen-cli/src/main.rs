use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{BlockType, classify, io, parsing::first_line, site, split_blocks};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(version, about = "Build a static HTML site from a tree of markdown files")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    build: BuildArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site (the default when no subcommand is given)
    Build(BuildArgs),

    /// Print every block of a markdown file with its classification
    Blocks {
        /// Markdown file to inspect
        file: PathBuf,

        /// Only show blocks of this type (e.g. heading, unordered_list)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Write a config file with the default settings
    Init {
        /// Where to write the config
        #[arg(default_value = SiteConfig::FILE_NAME)]
        path: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// URL prefix the site is served under, e.g. /repo/
    basepath: Option<String>,

    /// Config file (defaults to ./sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied as-is
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (deleted and rebuilt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl BuildArgs {
    /// Config file values, overridden by any flags given on the command line.
    fn resolve_config(self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load_from_path(path)?
                .with_context(|| format!("Config file {} does not exist", path.display()))?,
            None => SiteConfig::load_or_default(SiteConfig::config_path())?,
        };

        if let Some(basepath) = self.basepath {
            config.basepath = basepath;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        Ok(config)
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let report = site::build_site(&config)
        .with_context(|| format!("Failed to build site into {}", config.output_dir.display()))?;

    log::info!(
        "Generated {} pages and copied {} static files into {}",
        report.pages.len(),
        report.copied.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn print_blocks(file: &Path, kind: Option<&str>) -> Result<()> {
    let kind = kind.map(str::parse::<BlockType>).transpose()?;
    let markdown =
        io::read_file(file).with_context(|| format!("Failed to read {}", file.display()))?;

    for (index, block) in split_blocks(&markdown).into_iter().enumerate() {
        let block_type = classify(block);
        if kind.is_some_and(|k| k != block_type) {
            continue;
        }
        println!("{index}\t{block_type}\t{}", first_line(block));
    }
    Ok(())
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    SiteConfig::default().save_to_path(path)?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Build(args)) => build(args),
        Some(Command::Blocks { file, kind }) => print_blocks(&file, kind.as_deref()),
        Some(Command::Init { path }) => init(&path),
        None => build(cli.build),
    }
}
