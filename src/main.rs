use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueHint};
use csvchart::app::{IngestOutcome, SessionStore};
use csvchart::pdf::{FileSink, PdfiumWriter};
use csvchart::render::RasterRenderer;
use csvchart::settings::Settings;
use csvchart::types::{BindingField, ChartKind, DisplayOption};
use serde_json::json;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Load a CSV file and chart its columns", long_about = None)]
struct Cli {
    /// CSV file to load
    #[arg(value_hint = ValueHint::FilePath)]
    file: PathBuf,

    /// Chart kind: bar, line, pie, area or scatter
    #[arg(short, long)]
    kind: Option<ChartKind>,

    /// X axis column
    #[arg(long)]
    x: Option<String>,

    /// Y axis column
    #[arg(long)]
    y: Option<String>,

    /// Series column; rows are coloured by its values (axis charts only)
    #[arg(long)]
    category: Option<String>,

    /// Value column (pie only)
    #[arg(long)]
    value: Option<String>,

    #[arg(long)]
    title: Option<String>,

    /// Chart width in pixels, clamped to 400-1200
    #[arg(long)]
    width: Option<u32>,

    /// Chart height in pixels, clamped to 300-800
    #[arg(long)]
    height: Option<u32>,

    /// Chart every row instead of the first 100
    #[arg(long, action = ArgAction::SetTrue)]
    all_rows: bool,

    /// Show every row in the table preview
    #[arg(long, action = ArgAction::SetTrue)]
    all_table_rows: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    hide_table: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    no_legend: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    no_grid: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_hint = ValueHint::FilePath)]
    settings: Option<PathBuf>,

    /// Write the chart as a PDF document
    #[arg(long, value_hint = ValueHint::FilePath)]
    export_pdf: Option<PathBuf>,

    /// Write the chart as a PNG image
    #[arg(long, value_hint = ValueHint::FilePath)]
    export_png: Option<PathBuf>,

    /// Include the full render request in the output
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("csvchart=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load(),
    };
    let mut store = SessionStore::new(settings);

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes =
        std::fs::read(&cli.file).with_context(|| format!("Failed to read {}", cli.file.display()))?;

    match store.load_file(&file_name, &bytes) {
        IngestOutcome::Applied => {}
        IngestOutcome::Failed(err) => return Err(err.into()),
        IngestOutcome::Superseded => bail!("Upload of {} was superseded", file_name),
    }

    configure(&mut store, &cli)?;

    let mut renderer = RasterRenderer::new();
    store.render(&mut renderer);

    if let Some(path) = &cli.export_pdf {
        store
            .export_pdf(&PdfiumWriter::new(), &mut FileSink::new(path))
            .context("PDF export failed")?;
    }
    if let Some(path) = &cli.export_png {
        store
            .export_png(&mut FileSink::new(path))
            .context("PNG export failed")?;
    }

    let state = store.state();
    let mut output = json!({
        "session": state.snapshot(),
        "table": store.table_preview(),
    });
    if cli.verbose {
        output["render"] = serde_json::to_value(store.render_request())?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Apply command-line choices in the order a user would make them
fn configure(store: &mut SessionStore, cli: &Cli) -> Result<()> {
    if let Some(kind) = cli.kind {
        store.set_chart_kind(kind);
    }

    let bindings = [
        (BindingField::X, &cli.x),
        (BindingField::Y, &cli.y),
        (BindingField::Category, &cli.category),
        (BindingField::PieValue, &cli.value),
    ];
    for (field, header) in bindings {
        if let Some(header) = header {
            store.set_binding(field, header)?;
        }
    }

    let mut options = Vec::new();
    if let Some(title) = &cli.title {
        options.push(DisplayOption::Title(title.clone()));
    }
    if let Some(width) = cli.width {
        options.push(DisplayOption::Width(width));
    }
    if let Some(height) = cli.height {
        options.push(DisplayOption::Height(height));
    }
    if cli.all_rows {
        options.push(DisplayOption::LimitRows(false));
    }
    if cli.all_table_rows {
        options.push(DisplayOption::ShowAllTableRows(true));
    }
    if cli.hide_table {
        options.push(DisplayOption::ShowTable(false));
    }
    if cli.no_legend {
        options.push(DisplayOption::ShowLegend(false));
    }
    if cli.no_grid {
        options.push(DisplayOption::ShowGrid(false));
    }
    for option in options {
        store.set_display_option(option);
    }
    Ok(())
}
