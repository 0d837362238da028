use std::io::{Read, Write};

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use sub2clash::generator::{assemble_with, render, OutputFormat};
use sub2clash::parser::parse_links;
use sub2clash::{ConvertError, Settings};

/// Convert proxy share links into a Clash configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one share link per line (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Where to write the config (writes stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,

    /// Path to the configuration file (TOML or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Output format: yaml or json
    #[arg(short, long, value_name = "FORMAT", default_value = "yaml")]
    format: OutputFormat,

    /// Start the HTTP server instead of converting once (needs the web-api feature)
    #[arg(long)]
    serve: bool,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,
}

fn read_input(path: Option<&str>) -> Result<String, ConvertError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&str>, document: &str) -> Result<(), ConvertError> {
    match path {
        Some(path) => {
            std::fs::write(path, document)?;
            info!("Successfully wrote config to {}", path);
        }
        None => std::io::stdout().write_all(document.as_bytes())?,
    }
    Ok(())
}

fn convert_once(args: &Args, settings: &Settings) -> Result<(), ConvertError> {
    let text = read_input(args.input.as_deref())?;
    let nodes = parse_links(&text);
    let config = assemble_with(nodes, &settings.group_settings());
    let document = render(&config, args.format)?;
    write_output(args.output.as_deref(), &document)
}

#[cfg(feature = "web-api")]
fn serve(args: &Args, mut settings: Settings) -> Result<(), ConvertError> {
    // Override settings with command line arguments if provided
    if let Some(address) = &args.address {
        settings.listen_address = address.clone();
    }
    if let Some(port) = args.port {
        settings.listen_port = port;
    }
    actix_web::rt::System::new().block_on(sub2clash::web_handlers::run_server(settings))?;
    Ok(())
}

#[cfg(not(feature = "web-api"))]
fn serve(_args: &Args, _settings: Settings) -> Result<(), ConvertError> {
    Err(ConvertError::FeatureDisabled("web-api"))
}

fn run(args: Args, settings: Settings) -> Result<(), ConvertError> {
    if args.serve {
        return serve(&args, settings);
    }

    convert_once(&args, &settings)
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let settings = match args.config.as_deref() {
        Some(path) => match Settings::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error: failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or(settings.log_level.as_str()));

    if let Err(e) = run(args, settings) {
        error!("{}", e);
        std::process::exit(1);
    }
}
