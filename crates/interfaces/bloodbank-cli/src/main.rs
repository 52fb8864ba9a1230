use anyhow::Context;
use bloodbank_cli::{commands, parse_blood_type, CliGender};
use bloodbank_config::{trim_base_url, ClientConfig};
use bloodbank_core::{BloodType, DonorDraft, SearchCriteria};
use bloodbank_infra::{default_http_client, BackendClient, GenerativeClient};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about = "Blood bank backend from the terminal")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Backend base URL, e.g. http://localhost:8080/api
    #[arg(long, global = true, env = "BLOODBANK_API_URL")]
    api_url: Option<String>,
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered donors
    Donors {
        #[arg(short, long, help = "Match against name, email or blood type")]
        filter: Option<String>,
    },
    /// Show stock per blood type
    Inventory,
    /// Find eligible donors in a location
    Search {
        #[arg(long)]
        state: String,
        #[arg(long)]
        city: String,
    },
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, value_parser = parse_blood_type, default_value = "A+")]
        blood_type: BloodType,
        #[arg(long, help = "YYYY-MM-DD")]
        dob: String,
        #[arg(long, value_enum, default_value_t = CliGender::Male)]
        gender: CliGender,
        #[arg(long)]
        state: String,
        #[arg(long)]
        city: String,
    },
    /// Generate donation campaign ideas for low stock
    Campaign,
    /// Search a location and draft an outreach message
    Outreach {
        #[arg(long)]
        state: String,
        #[arg(long)]
        city: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;

    let mut cfg = ClientConfig::from_env();
    if let Some(url) = cli.api_url.as_deref().filter(|u| !u.trim().is_empty()) {
        cfg.api_base_url = trim_base_url(url);
    }
    if let Some(key) = cli.api_key {
        cfg.genai_api_key = key;
    }

    let http = default_http_client().context("building HTTP client")?;
    let backend = BackendClient::from_config(http.clone(), &cfg);

    match cli.command {
        Commands::Donors { filter } => {
            commands::cmd_donors(&backend, filter.as_deref()).await?;
        }
        Commands::Inventory => {
            commands::cmd_inventory(&backend).await?;
        }
        Commands::Search { state, city } => {
            commands::cmd_search(&backend, &SearchCriteria::new(state, city)).await?;
        }
        Commands::Register {
            first_name,
            last_name,
            email,
            phone,
            blood_type,
            dob,
            gender,
            state,
            city,
        } => {
            let draft = DonorDraft {
                first_name,
                last_name,
                email,
                phone,
                blood_type,
                date_of_birth: dob,
                gender: gender.into(),
                city,
                state,
            };
            commands::cmd_register(&backend, &draft).await?;
        }
        Commands::Campaign => {
            let generator = GenerativeClient::from_config(http, &cfg);
            commands::cmd_campaign(&backend, &generator).await?;
        }
        Commands::Outreach { state, city } => {
            let generator = GenerativeClient::from_config(http, &cfg);
            commands::cmd_outreach(&backend, &generator, &SearchCriteria::new(state, city))
                .await?;
        }
    }

    Ok(())
}
