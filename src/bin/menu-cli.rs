use clap::{Parser, Subcommand};
use menu_sdk::{ApiResponse, MenuClient};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "menu-cli")]
#[command(about = "Command-line client for the restaurant menu service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the service is up
    Health,
    /// List every menu item
    List,
    /// Show one menu item
    Get { id: String },
    /// Create a menu item from a JSON object
    Create { json: String },
    /// Update fields of a menu item from a JSON object
    Update { id: String, json: String },
    /// Delete a menu item
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = MenuClient::new(&cli.url);

    let response = match cli.command {
        Commands::Health => client.health().await?,
        Commands::List => client.list().await?,
        Commands::Get { id } => client.get(&id).await?,
        Commands::Create { json } => {
            let body: Value = serde_json::from_str(&json)?;
            client.create(&body).await?
        }
        Commands::Update { id, json } => {
            let body: Value = serde_json::from_str(&json)?;
            client.update(&id, &body).await?
        }
        Commands::Delete { id } => client.delete(&id).await?,
    };

    print_response(&response)?;
    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_response(response: &ApiResponse) -> Result<(), serde_json::Error> {
    println!("Status: {}", response.status);
    match &response.body {
        Value::String(text) => println!("{}", text),
        body => println!("{}", serde_json::to_string_pretty(body)?),
    }
    Ok(())
}
