//! netvis CLI entry point.
//!
//! Reads a node-link JSON graph and writes the renderer's wire document.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use netvis::{ColorMode, ConvertConfig, ConvertOptions, LayoutSpec, StyleSpec, render_node_link};

/// Node-link JSON graph to netvis scene JSON.
#[derive(Parser, Debug)]
#[command(name = "netvis", version = env!("NETVIS_VERSION"), about = "Node-link JSON graph to netvis scene JSON")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Layout algorithm (spring, kamada_kawai, spectral, circular, random).
    /// Defaults to stored `pos` attributes, then spring.
    #[arg(short = 'l', long = "layout")]
    layout: Option<String>,

    /// Node attribute used as node color
    #[arg(long = "node-color")]
    node_color: Option<String>,

    /// Node attribute used as node label
    #[arg(long = "node-label")]
    node_label: Option<String>,

    /// Edge attribute used as edge label
    #[arg(long = "edge-label")]
    edge_label: Option<String>,

    /// Scene title
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Map node colors through a numeric gradient or categorical palette
    #[arg(long = "color-scale")]
    color_scale: bool,

    /// Gradient start color for numeric scales (#rrggbb)
    #[arg(long = "low-color")]
    low_color: Option<String>,

    /// Gradient end color for numeric scales (#rrggbb)
    #[arg(long = "high-color")]
    high_color: Option<String>,

    /// Seed for reproducible layouts
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Spring layout iterations
    #[arg(long = "iterations", default_value_t = netvis::config::DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Pretty-print the output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn build_options(cli: &Cli) -> netvis::Result<ConvertOptions<netvis::NetworkGraph>> {
    let mut config = ConvertConfig::default();
    config.layout.seed = cli.seed;
    config.layout.iterations = cli.iterations;
    if cli.color_scale {
        config.scale.mode = ColorMode::Scaled;
    }
    if let Some(ref low) = cli.low_color {
        config.scale.low = low.parse()?;
    }
    if let Some(ref high) = cli.high_color {
        config.scale.high = high.parse()?;
    }
    let layout: LayoutSpec<netvis::NetworkGraph> = match cli.layout.as_deref() {
        Some(name) => LayoutSpec::named(name)?,
        None => LayoutSpec::Auto,
    };
    Ok(ConvertOptions::new()
        .layout(layout)
        .node_color(StyleSpec::from(cli.node_color.clone()))
        .node_label(StyleSpec::from(cli.node_label.clone()))
        .edge_label(StyleSpec::from(cli.edge_label.clone()))
        .config(config))
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("netvis={}", cli.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = build_options(&cli).unwrap_or_else(|e| fail(e));
    debug!(?options, "parsed options");

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)))
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let rendered = render_node_link(&text, cli.title.as_deref(), &options, cli.pretty)
        .unwrap_or_else(|e| fail(e));

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
