use anyhow::Result;
use clap::{Parser, Subcommand};
use smartchef::cli::{generate::GenerateArgs, print_json, shopping::ShoppingCommand};

/// smartchef - recipes from what is in the fridge, and the grocery list to go with them
#[derive(Parser)]
#[command(name = "smartchef")]
#[command(about = "Recipe generation and grocery list aggregation", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and its tables
    Init,
    /// Generate a recipe from a list of ingredients
    Generate(GenerateArgs),
    /// Build shopping lists from saved recipes or meal plans
    #[command(subcommand)]
    Shopping(ShoppingCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = smartchef::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    smartchef::observability::init_observability(
        "smartchef",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Init => smartchef::cli::init::init(&config).await,
        Commands::Generate(args) => {
            let recipe = smartchef::cli::generate::generate(&config, args).await?;
            print_json(&recipe)
        }
        Commands::Shopping(cmd) => smartchef::cli::shopping::run(&config, cmd).await,
    }
}
