use chrono::Datelike;
use clap::{Parser, Subcommand};
use octopy_site::{config, generate, output, site};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "octopy-site")]
#[command(about = "Static site builder for the Octopy Framework docs")]
#[command(long_about = "\
Static site builder for the Octopy Framework docs

Renders the landing page and writes the manifests the docs generator reads.
Every input is optional; missing files fall back to the stock Octopy site.

Source structure:

  website/
  ├── config.toml        # Site config (title, tagline, navbar, footer, ...)
  ├── features.toml      # Landing page feature cards, in display order
  ├── sidebars.toml      # Docs sidebar sections, in display order
  ├── css/custom.css     # Custom stylesheet (linked when present)
  └── static/            # Copied verbatim to the output root

Run 'octopy-site gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory
    #[arg(long, default_value = "website", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing page and write generator manifests
    Build,
    /// Validate config and content without writing anything
    Check,
    /// Print the sidebar tree in display order
    Sidebar,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Log to stderr so stdout stays clean for command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "octopy_site=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site = site::load(&cli.source)?;
            let year = chrono::Local::now().year();

            println!("==> Generating → {}", cli.output.display());
            let summary = generate::generate(&site, &cli.source, &cli.output, year)?;
            output::print_build_output(&site, &summary);

            println!("==> Build complete: {}", summary.output_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = site::load(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Site is valid");
        }
        Command::Sidebar => {
            let site = site::load(&cli.source)?;
            output::print_sidebar(&site.sidebar);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
