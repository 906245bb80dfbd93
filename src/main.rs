use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde_json::Value;

use nbcss::config::DEFAULT_HIGHLIGHT_CLASS;
use nbcss::resources::CONFIG_DIR_KEY;
use nbcss::{AssemblerConfig, HeaderAssembler, Resources};

/// How the assembled header is written to stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Blocks joined by a blank line
    Css,
    /// The resulting resources mapping as JSON
    Json,
    /// One `<style>` element per block
    Style,
}

#[derive(Parser)]
#[command(
    name = "nbcss",
    version,
    about = "Assemble the inline CSS header for an HTML export"
)]
struct Cli {
    /// Active configuration directory; `<DIR>/custom/custom.css` is the custom stylesheet
    #[arg(long)]
    config_dir: PathBuf,

    /// Root class the highlighting rules are scoped under
    #[arg(long, default_value = DEFAULT_HIGHLIGHT_CLASS)]
    highlight_class: String,

    /// Base stylesheet emitted first [default: the one built into nbcss]
    #[arg(long)]
    base_stylesheet: Option<PathBuf>,

    /// Untouched default custom stylesheet to compare against [default: the one built into nbcss]
    #[arg(long)]
    default_custom_css: Option<PathBuf>,

    /// Compare against nothing: always include a present custom stylesheet
    #[arg(long, conflicts_with = "default_custom_css")]
    no_default_custom_css: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,

    /// Log filter directive, e.g. `debug` or `nbcss=trace`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = AssemblerConfig::default().with_highlight_class(cli.highlight_class);
    if let Some(base) = cli.base_stylesheet {
        config = config.with_base_stylesheet(base);
    }
    config = match (cli.no_default_custom_css, cli.default_custom_css) {
        (true, _) => config.with_default_custom_css(None),
        (false, Some(path)) => config.with_default_custom_css(Some(path)),
        (false, None) => config.with_bundled_default_custom_css(),
    };

    let config_dir = cli
        .config_dir
        .to_str()
        .with_context(|| format!("config dir '{}' is not valid UTF-8", cli.config_dir.display()))?;
    let mut resources = Resources::new();
    resources.insert(
        CONFIG_DIR_KEY.to_string(),
        Value::String(config_dir.to_owned()),
    );

    let mut assembler = HeaderAssembler::new(config)?;
    let (blocks, resources) = assembler.assemble(resources)?;

    Ok(match cli.format {
        OutputFormat::Css => {
            let mut out = blocks.join("\n\n");
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&resources)?;
            out.push('\n');
            out
        }
        OutputFormat::Style => blocks
            .iter()
            .map(|css| format!("<style type=\"text/css\">\n{css}\n</style>\n"))
            .collect(),
    })
}
