use std::io;

use clap::{Args, Parser, Subcommand};
use log::info;
use placement::{
    PlacementModel, Session, StudentProfile, SyntheticDatasetConfig,
    dataset::{self, DEFAULT_ROWS, DEFAULT_SEED},
    session::{DEFAULT_K, validate_k},
    tui::init_tui,
};

#[derive(Parser, Debug)]
#[command(name = "placement", version, about = "B.Tech placement predictor using KNN")]
struct Cli {
    /// Seed for the synthetic dataset.
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Number of synthetic student records.
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Opens the interactive terminal dashboard.
    Tui {
        #[arg(long, default_value_t = DEFAULT_K)]
        k: usize,
    },
    /// Predicts the interview outcome for one student.
    Predict(PredictArgs),
    /// Prints the generated dataset as CSV.
    Dataset,
}

#[derive(Args, Debug)]
struct PredictArgs {
    #[arg(long, default_value_t = 7.5)]
    cgpa: f64,
    #[arg(long, default_value_t = 250)]
    dsa: u32,
    #[arg(long, default_value_t = 2)]
    projects: u32,
    #[arg(long, default_value_t = 70)]
    mock: u32,
    #[arg(long, default_value_t = DEFAULT_K)]
    k: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = SyntheticDatasetConfig::new().with_seed(cli.seed).with_rows(cli.rows);

    match cli.command.unwrap_or(Commands::Tui { k: DEFAULT_K }) {
        Commands::Tui { k } => {
            let session = Session::new(config, k)?;
            let session = init_tui(session)?;
            info!("Dashboard closed with k = {}", session.k());
        }
        Commands::Predict(args) => {
            let k = validate_k(args.k)?;
            let profile = StudentProfile::new(args.cgpa, args.dsa, args.projects, args.mock)?;
            let dataset = dataset::generate(&config)?;
            let model = PlacementModel::fit(&dataset, k)?;
            let prediction = model.predict(&profile)?;

            println!("Interview Prediction: {}", prediction.outcome);
            println!("{} of {} nearest past students cleared", prediction.cleared_votes, k);
            for neighbor in &prediction.neighbors {
                let r = &dataset.records()[neighbor.index];
                println!(
                    "  #{:<3} CGPA {:.2}  DSA {:>3}  Projects {}  Mock {:>2}  -> {}  (distance {:.3})",
                    neighbor.index,
                    r.cgpa,
                    r.dsa_problems,
                    r.projects,
                    r.mock_score,
                    r.outcome,
                    neighbor.distance
                );
            }
        }
        Commands::Dataset => {
            let dataset = dataset::generate(&config)?;
            dataset.write_csv(io::stdout().lock())?;
            eprintln!("{}", dataset.summary());
        }
    }

    Ok(())
}
