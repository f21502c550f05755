use std::{fs, io::{self, Read}, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pinbridge::{
    codec::{ModelKind, decode_document, encode_document},
    config::BridgeConfig,
    logger::init_tracing,
    schema::write_schema,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "pinbridge",
    about = "Convert chat pin models to and from their JSON maps",
    version
)]
struct Cli {
    /// Log level override (e.g. error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Load settings from this .env file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn a typed model document into its wire map
    Encode(ConvertArgs),

    /// Validate a wire map and print it back in canonical form
    Decode(ConvertArgs),

    /// Emit JSON‐Schema for every model
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    #[arg(long, value_enum)]
    model: ModelKind,

    /// Read from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(long, default_value = "./schemas")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = BridgeConfig::load(cli.env_file.as_deref())?
        .with_overrides(cli.log_level, cli.log_dir);
    init_tracing(&config)?;

    match cli.command {
        Commands::Encode(args) => {
            let input = read_input(args.input.as_ref())?;
            let out = encode_document(args.model, &input)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }
        Commands::Decode(args) => {
            let input = read_input(args.input.as_ref())?;
            match decode_document(args.model, &input) {
                Ok(out) => {
                    println!("{}", serde_json::to_string_pretty(&out)?);
                    Ok(())
                }
                Err(err) => {
                    error!("decode of {} failed: {err}", args.model.as_str());
                    Err(err.into())
                }
            }
        }
        Commands::Schema(args) => {
            let written = write_schema(&args.out_dir)?;
            info!("{} schemas written", written.len());
            println!("Schemas written to {}", args.out_dir.display());
            Ok(())
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("could not read `{}`", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("could not read stdin")?;
            Ok(buf)
        }
    }
}
