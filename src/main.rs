use chrono::Datelike;
use clap::{Parser, Subcommand};
use folio::{config, content, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static generator for a single-page developer portfolio")]
#[command(long_about = "\
Static generator for a single-page developer portfolio

Everything is optional: with an empty source directory the stock portfolio
is built. Files you add are sparse overlays on the stock values.

Source structure:

  content/
  ├── config.toml     # Appearance: [site], [colors], [animation]
  ├── content.toml    # Page data: profile, experience, projects, socials...
  ├── avatar.png      # Profile picture (path set by site.avatar)
  └── assets/         # Static assets (favicon, fonts) → copied to output root

Run 'folio gen-config' or 'folio gen-content' to print documented stock files.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load content and config, render the page and write the site
    Build,
    /// Validate content and config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock content as a content.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let site_content = content::load_content(&cli.source)?;
            output::print_check_output(&site_content, &site_config, &cli.source);

            println!("==> Generating HTML → {}", cli.output.display());
            let year = chrono::Local::now().year();
            let report = generate::generate(
                &site_content,
                &site_config,
                &cli.source,
                &cli.output,
                year,
            )?;
            output::print_generate_output(&report, &site_content);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let site_content = content::load_content(&cli.source)?;
            output::print_check_output(&site_content, &site_config, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml()?);
        }
    }

    Ok(())
}
