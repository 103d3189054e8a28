use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use shell_aliases_catalog::{
    AliasConfig, CatalogFile, CatalogFormat, HeaderMode, kubectl_catalog, load_catalog,
    load_header,
};
use shell_aliases_core::{
    AliasLine, Catalog, finalize, find_key_collisions, generate, lint_catalog, render_aliases,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Output format for generated aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum AliasFormat {
    /// `alias key='value'` lines.
    Shell,
    Json,
    Yaml,
}

/// Output format for catalog dumps.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum DumpFormat {
    Yaml,
    Json,
}

impl From<DumpFormat> for CatalogFormat {
    fn from(fmt: DumpFormat) -> Self {
        match fmt {
            DumpFormat::Yaml => Self::Yaml,
            DumpFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "generate-aliases")]
#[command(about = "Generate shorthand shell aliases from a segment catalog")]
struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log generation details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate aliases and print them to stdout.
    Generate(GenerateArgs),
    /// Report catalog authoring problems.
    Lint(LintArgs),
    /// Print the built-in catalog as an editable file.
    Dump(DumpArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Catalog file (.yaml, .yml or .json) instead of the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// License header file instead of the embedded header.
    #[arg(long)]
    header_file: Option<PathBuf>,
    /// When to print the license header.
    #[arg(long)]
    header: Option<HeaderMode>,
    /// Output format.
    #[arg(long, default_value = "shell")]
    format: AliasFormat,
    /// Refuse catalogs with a group larger than this.
    #[arg(long)]
    max_group_segments: Option<usize>,
}

#[derive(Debug, Args)]
struct LintArgs {
    /// Catalog file to lint instead of the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Output format.
    #[arg(long, default_value = "yaml")]
    format: DumpFormat,
    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Generate(args) => run_generate(args, config),
        Command::Lint(args) => run_lint(args, config),
        Command::Dump(args) => run_dump(args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AliasConfig, String> {
    match path {
        Some(path) => AliasConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display())),
        None => Ok(AliasConfig::default()),
    }
}

fn resolve_catalog(explicit: Option<&Path>, config: &AliasConfig) -> Result<Catalog, String> {
    match explicit.or(config.catalog.as_deref()) {
        Some(path) => load_catalog(path)
            .map_err(|err| format!("Failed to load catalog '{}': {err}", path.display())),
        None => {
            debug!("using built-in kubectl catalog");
            Ok(kubectl_catalog())
        }
    }
}

fn run_generate(args: GenerateArgs, config: AliasConfig) -> Result<(), String> {
    let catalog = resolve_catalog(args.catalog.as_deref(), &config)?;

    let mut limits = config.limits.clone();
    if let Some(max) = args.max_group_segments {
        limits.max_group_segments = max;
    }
    limits.check(&catalog).map_err(|err| err.to_string())?;

    for issue in lint_catalog(&catalog) {
        warn!("{issue}");
    }

    let candidates = finalize(generate(&catalog));
    let lines = render_aliases(&candidates);
    info!(aliases = lines.len(), "generated aliases");
    if lines.is_empty() {
        warn!("catalog produced no aliases");
    }
    for key in find_key_collisions(&lines) {
        warn!(key = %key, "alias defined more than once");
    }

    let stdout = io::stdout();
    let header = if args.format == AliasFormat::Shell {
        let mode = args.header.unwrap_or(config.header);
        if mode.should_emit(stdout.is_terminal()) {
            let path = args.header_file.as_deref().or(config.header_file.as_deref());
            Some(load_header(path).map_err(|err| err.to_string())?)
        } else {
            None
        }
    } else {
        None
    };

    let rendered = format_aliases(&lines, args.format, header.as_deref())?;
    let mut handle = stdout.lock();
    handle
        .write_all(rendered.as_bytes())
        .and_then(|()| handle.flush())
        .map_err(|err| format!("Failed to write output: {err}"))
}

fn format_aliases(
    lines: &[AliasLine],
    format: AliasFormat,
    header: Option<&str>,
) -> Result<String, String> {
    match format {
        AliasFormat::Shell => {
            let mut out = String::new();
            if let Some(header) = header {
                out.push_str(header);
                out.push('\n');
            }
            for line in lines {
                out.push_str(&line.to_string());
                out.push('\n');
            }
            Ok(out)
        }
        AliasFormat::Json => serde_json::to_string_pretty(lines)
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {e}")),
        AliasFormat::Yaml => {
            serde_yaml::to_string(lines).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}

fn run_lint(args: LintArgs, config: AliasConfig) -> Result<(), String> {
    let catalog = resolve_catalog(args.catalog.as_deref(), &config)?;
    let issues = lint_catalog(&catalog);

    if issues.is_empty() {
        println!(
            "Catalog OK: {} group(s), {} segment(s).",
            catalog.groups.len(),
            catalog.segment_count()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("{issue}");
    }
    Err(format!("{} catalog issue(s) found", issues.len()))
}

fn run_dump(args: DumpArgs) -> Result<(), String> {
    let rendered = CatalogFile::from_catalog(&kubectl_catalog())
        .render(args.format.into())
        .map_err(|err| err.to_string())?;

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            println!("Wrote built-in catalog to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
