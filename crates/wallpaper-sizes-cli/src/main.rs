use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wallpaper_sizes_core::{Config, LogLevel, Schedule, TemplateCache, WallpaperGenerator};

#[derive(Parser)]
#[command(name = "wallpaper-sizes")]
#[command(about = "Generate cropped wallpaper sizes from template images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find templates and write every configured size next to them
    Generate(GenerateArgs),

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "wallpaper-sizes.json")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Directory searched recursively for templates
    root: Option<PathBuf>,

    /// Generate one image at a time on a single thread
    #[arg(long)]
    sequential: bool,

    /// Decode the template again for every size instead of keeping it in memory
    #[arg(long)]
    reload: bool,

    /// Number of worker threads (0 = one per logical CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// JPEG quality (1-100)
    #[arg(long)]
    quality: Option<u8>,

    /// Maximum directory depth for template discovery
    #[arg(long)]
    max_depth: Option<usize>,

    /// List the images that would be generated without writing them
    #[arg(long)]
    dry_run: bool,

    /// Do not draw a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Configuration from the optional file, with command line arguments on top
fn build_config(args: &GenerateArgs) -> Result<Config, anyhow::Error> {
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };

    // Progress bar is always on from the CLI unless --no-progress
    config.show_progress = !args.no_progress;

    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if args.sequential {
        config.schedule = Schedule::Sequential;
    }
    if args.reload {
        config.cache = TemplateCache::Reload;
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if let Some(quality) = args.quality {
        config.quality = quality;
    }
    if args.max_depth.is_some() {
        config.max_depth = args.max_depth;
    }
    config.dry_run |= args.dry_run;

    // Set log level based on verbosity
    config.log_level = match args.verbose {
        0 => config.log_level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    Ok(config)
}

fn main() -> Result<(), anyhow::Error> {
    // Parse command line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            let config = build_config(&args)?;

            // Initialize logger, RUST_LOG still takes precedence
            env_logger::Builder::new()
                .filter_level(config.log_level.into())
                .parse_default_env()
                .init();

            // Validates the configuration
            let generator = WallpaperGenerator::new(config)?;

            info!("Starting wallpaper generation...");
            let report = generator.run()?;

            if report.dry_run {
                for image in &report.generated {
                    println!("{}", image.output.display());
                }
            }
            info!(
                "Generation complete: {} images from {} templates",
                report.generated.len(),
                report.templates
            );

            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}
