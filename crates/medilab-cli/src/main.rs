use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medilab_core::counter::DisplayFormat;
use medilab_core::validation::{FieldRule, Service};
use medilab_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "medilab")]
#[command(author, version, about = "Counter and form behavior of the MediLab Pro website")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a statistic counter animation
    Counter {
        /// Counter target as written in `data-target` (e.g. 500000+, 998%, 1985)
        target: String,
        /// Display format hint (plain, comma-plus, percent-tenths)
        #[arg(short, long)]
        format: Option<DisplayFormat>,
        /// Animation budget in milliseconds (overrides config)
        #[arg(short, long)]
        duration_ms: Option<u64>,
        /// Render every frame immediately instead of in real time
        #[arg(long)]
        instant: bool,
    },
    /// Validate a single value against field rules
    Validate {
        /// Field value
        value: String,
        /// Rule to apply: required, email, phone, min-length=N (repeatable)
        #[arg(short, long = "rule", required = true)]
        rules: Vec<FieldRule>,
    },
    /// Submit the contact form
    Contact {
        /// Full name
        #[arg(long, default_value = "")]
        name: String,
        /// Email address
        #[arg(long, default_value = "")]
        email: String,
        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,
        /// Service of interest
        #[arg(long, default_value = "general")]
        service: Service,
        /// Message
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let passed = match cli.command {
        Commands::Counter {
            target,
            format,
            duration_ms,
            instant,
        } => {
            let mut counter = config.counter.clone();
            if let Some(ms) = duration_ms {
                counter.duration_ms = ms;
            }
            commands::counter::run(counter, &target, format, instant, cli.json).await?
        }
        Commands::Validate { value, rules } => commands::validate::run(&value, &rules, cli.json)?,
        Commands::Contact {
            name,
            email,
            phone,
            service,
            message,
        } => {
            let submission = medilab_core::validation::ContactSubmission {
                name,
                email,
                phone,
                service,
                message,
            };
            commands::contact::run(&config, &submission, cli.json)?
        }
        Commands::Config { init } => commands::config::run(&config, init, cli.json)?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
