use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ml_features::{build_scaler, feature_names, load_features, WindowConfig, TARGET_NAME};
use model::ForecastArtifact;
use polars::prelude::*;
use scaling::MinMaxScaler;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Prepares retail sales history for the next-step sales model: fits the
/// min-max scaler, generates windowed feature datasets, and exports the model
/// artifact for the training engine.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the min-max scaler over one or more raw CSV sources.
    FitScaler(FitScalerArgs),
    /// Generate a windowed feature dataset from a raw CSV source.
    GenerateDataset(GenerateDatasetArgs),
    /// Export the model artifact consumed by the training engine.
    ExportModel(ExportModelArgs),
}

#[derive(Parser)]
struct FitScalerArgs {
    /// A raw CSV source; repeat the flag to fit over several sources at once.
    #[arg(long, short, required = true)]
    input: Vec<PathBuf>,
    /// The output file path for the scaler JSON.
    #[arg(long, short)]
    output: PathBuf,
}

#[derive(Parser)]
struct GenerateDatasetArgs {
    /// The raw CSV source to window. Only the first source is read.
    #[arg(long, short, required = true)]
    input: Vec<PathBuf>,
    /// Path to a previously fitted scaler JSON.
    #[arg(long, short)]
    scaler: PathBuf,
    /// The output file path for the Parquet dataset.
    #[arg(long, short)]
    output: PathBuf,
    #[command(flatten)]
    window: WindowArgs,
}

#[derive(Parser)]
struct ExportModelArgs {
    /// Path to a previously fitted scaler JSON.
    #[arg(long, short)]
    scaler: PathBuf,
    /// The output file path for the artifact JSON.
    #[arg(long, short)]
    output: PathBuf,
    #[command(flatten)]
    window: WindowArgs,
}

/// Look-back lengths, defaulting to the production configuration.
#[derive(Args)]
struct WindowArgs {
    /// Number of trailing sales values per feature window.
    #[arg(long, default_value_t = WindowConfig::sales_forecast().look_back)]
    look_back: usize,
    /// Length of the averaged customers sub-window.
    #[arg(long, default_value_t = WindowConfig::sales_forecast().look_back_customers)]
    look_back_customers: usize,
    /// Length of the open sub-window.
    #[arg(long, default_value_t = WindowConfig::sales_forecast().look_back_open)]
    look_back_open: usize,
}

impl WindowArgs {
    fn to_config(&self) -> WindowConfig {
        WindowConfig {
            look_back: self.look_back,
            look_back_customers: self.look_back_customers,
            look_back_open: self.look_back_open,
        }
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::FitScaler(args) => handle_fit_scaler(args),
        Commands::GenerateDataset(args) => handle_generate_dataset(args),
        Commands::ExportModel(args) => handle_export_model(args),
    }
}

/// The handler for the `fit-scaler` command.
fn handle_fit_scaler(args: FitScalerArgs) -> Result<()> {
    println!("--- Fitting Scaler ---");
    println!("Fitting over {} source(s)...", args.input.len());

    let scaler = build_scaler(&args.input).context("Failed to fit the scaler")?;

    let file = File::create(&args.output)
        .context(format!("Failed to create scaler file at {:?}", &args.output))?;
    serde_json::to_writer_pretty(file, &scaler).context("Failed to serialize the scaler")?;

    println!("Scaler fitted over {} columns.", scaler.n_columns());
    println!("Saved to: {:?}", &args.output);
    Ok(())
}

/// The handler for the `generate-dataset` command.
fn handle_generate_dataset(args: GenerateDatasetArgs) -> Result<()> {
    println!("--- Generating Dataset ---");

    let scaler = read_scaler(&args.scaler)?;
    let config = args.window.to_config();

    let (x, y) = load_features(&args.input, &scaler, &config)
        .context("Failed to generate feature windows")?;
    println!("Generated {} windows of {} features.", x.nrows(), x.ncols());

    let mut columns = Vec::with_capacity(x.ncols() + 1);
    for (j, name) in feature_names(&config).iter().enumerate() {
        columns.push(Series::new(name, x.column(j).to_vec()));
    }
    columns.push(Series::new(TARGET_NAME, y.to_vec()));
    let mut df = DataFrame::new(columns).context("Failed to assemble the dataset frame")?;

    let mut file = File::create(&args.output)
        .context(format!("Failed to create output file at {:?}", &args.output))?;
    ParquetWriter::new(&mut file)
        .finish(&mut df)
        .context("Failed to write the Parquet dataset")?;

    println!("Saved to: {:?}", &args.output);
    Ok(())
}

/// The handler for the `export-model` command.
fn handle_export_model(args: ExportModelArgs) -> Result<()> {
    println!("--- Exporting Model Artifact ---");

    let scaler = read_scaler(&args.scaler)?;
    let artifact = ForecastArtifact::new(args.window.to_config(), scaler);

    let file = File::create(&args.output)
        .context(format!("Failed to create artifact file at {:?}", &args.output))?;
    serde_json::to_writer_pretty(file, &artifact).context("Failed to serialize the artifact")?;

    println!(
        "Exported a {}-input network with {} layers.",
        artifact.model.input_size,
        artifact.model.layers.len()
    );
    println!("Saved to: {:?}", &args.output);
    Ok(())
}

fn read_scaler(path: &PathBuf) -> Result<MinMaxScaler> {
    let file = File::open(path).context(format!("Failed to open scaler file at {path:?}"))?;
    serde_json::from_reader(file).context("Failed to parse the scaler file")
}
