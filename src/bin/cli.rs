//! MedScan CLI
//!
//! Command-line interface for the AI Medical Analyzer:
//! - Register and log in
//! - List and inspect analysed reports
//! - Upload new reports
//! - Run symptom checks

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use medscan::config::{generate_default_config, Config, LoggingConfig};
use medscan::render;
use medscan::views::auth::AUTH_FALLBACK;
use medscan::views::{AuthForm, AuthMode, AuthOutcome, AuthSubmission, ReportBoard};
use medscan::{ApiClient, ClientError, FailureDetail, FileTokenStore};

#[derive(Parser)]
#[command(name = "medscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AI medical report analyzer client")]
#[command(long_about = "MedScan talks to the AI Medical Analyzer API.\nUpload lab results or scans, read AI summaries and insights, and check symptoms.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config and MEDSCAN_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Log in and store the access token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored access token
    Logout,

    /// Show the logged-in account
    Whoami,

    /// List your reports
    Reports {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one report in full (default: most recent)
    Report {
        /// Position in the report list
        index: Option<usize>,
    },

    /// Upload a report (PDF, PNG or JPEG) for analysis
    Upload {
        /// Path to the report file
        file: PathBuf,
    },

    /// Ask for possible conditions matching your symptoms
    Symptoms {
        /// Free-text symptom description
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Chart the insights of a report (default: most recent)
    Chart {
        /// Position in the report list
        index: Option<usize>,
    },

    /// Check API availability
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut load_problems = Vec::new();
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            let (config, problems) = Config::load_default();
            load_problems = problems;
            config
        }
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    for problem in &load_problems {
        tracing::warn!(error = %problem, "Skipped config file");
        eprintln!("Warning: {}", problem);
    }

    let tokens = Arc::new(FileTokenStore::new(config.session.token_path()));
    let client = ApiClient::new(&config.api.base_url, tokens.clone())
        .context("creating HTTP client")?;

    tracing::debug!(api = %client.base_url(), token_file = ?tokens.path(), "Starting");

    match cli.command {
        Commands::Register { email, password } => {
            let mut form = AuthForm::new();
            form.toggle_mode();
            form.email = email;
            form.password = password;
            submit(&client, &mut form).await;
        }

        Commands::Login { email, password } => {
            let mut form = AuthForm::new();
            form.email = email;
            form.password = password;
            if submit(&client, &mut form).await == AuthOutcome::GoToDashboard {
                println!("Run `medscan reports` to see your reports.");
            }
        }

        Commands::Logout => {
            client.logout().context("clearing access token")?;
            println!("Logged out.");
        }

        Commands::Whoami => {
            require_login(&client);
            match client.current_user().await {
                Ok(user) => {
                    println!("{}", user.email);
                    if let Some(created) = user.created_at {
                        println!("Member since {}", medscan::dto::format_timestamp(&created));
                    }
                }
                Err(e) => fail(&e, "Unable to load your account."),
            }
        }

        Commands::Reports { json } => {
            let board = load_board(&client).await;
            if json {
                println!("{}", serde_json::to_string_pretty(board.reports())?);
            } else {
                print!("{}", render::report_table(board.reports(), board.selected_index()));
            }
        }

        Commands::Report { index } => {
            let board = select_report(&client, index).await;
            if let Some(report) = board.selected() {
                println!("{}", render::heading(&report.report_name));
                print!("{}", render::report_detail(report));
            }
        }

        Commands::Chart { index } => {
            let board = select_report(&client, index).await;
            if let Some(report) = board.selected() {
                println!("{}", render::heading(&report.report_name));
            }
            print!("{}", render::bar_chart(&board.chart()));
        }

        Commands::Upload { file } => {
            require_login(&client);

            if !file.is_file() {
                eprintln!("File not found: {}", file.display());
                std::process::exit(1);
            }

            let mut board = ReportBoard::new();
            board.begin_upload();
            println!("Uploading {}...", file.display());

            let result = client.upload_report(&file).await;
            let uploaded = result.is_ok();
            board.finish_upload(result);

            if let Some(status) = board.status() {
                println!("{}", status);
            }
            if !uploaded {
                std::process::exit(1);
            }
            if let Some(report) = board.selected() {
                println!();
                let footer = format!("Generated {}", report.created_label());
                print!("{}", render::result_card("AI Summary", &report.ai_summary, Some(&footer)));
                println!();
                print!("{}", render::bar_chart(&board.chart()));
            }
        }

        Commands::Symptoms { text } => {
            require_login(&client);

            let mut board = ReportBoard::new();
            let Some(request) = board.begin_symptom_check(&text.join(" ")) else {
                eprintln!("Enter symptoms to receive AI-assisted suggestions.");
                std::process::exit(1);
            };

            let result = client.check_symptoms(&request.symptoms).await;
            let failed = result.is_err();
            board.finish_symptom_check(result);

            if let Some(status) = board.status() {
                println!("{}", status);
            }
            for condition in board.conditions() {
                println!("  • {}", condition);
            }
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Status => {
            println!("MedScan v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("API: {}", client.base_url());
            println!(
                "Session: {}",
                if client.has_token() { "logged in" } else { "not logged in" }
            );

            match client.health().await {
                Ok(health) => println!("API Status: {}", health.status),
                Err(e) => {
                    eprintln!("Cannot reach the analyzer API at {}", client.base_url());
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

/// Set up tracing on stderr so command output stays on stdout
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("medscan={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Drive the login/register form through one submission
async fn submit(client: &ApiClient, form: &mut AuthForm) -> AuthOutcome {
    let Some(submission) = form.begin_submit() else {
        return AuthOutcome::Stay;
    };

    let result = match submission {
        AuthSubmission::Register(req) => client.register(&req.email, &req.password).await,
        AuthSubmission::Login(req) => client
            .login(&req.username, &req.password)
            .await
            .map(|_| ()),
    };

    let failed = result.is_err();
    let outcome = form.finish_submit(result);
    if let Some(message) = form.message() {
        println!("{}", message);
    }
    if failed {
        std::process::exit(1);
    }
    if form.mode() == AuthMode::Login && outcome == AuthOutcome::Stay {
        println!("Log in with `medscan login --email <EMAIL> --password <PASSWORD>`.");
    }
    outcome
}

/// Stop before any request when no token is stored
fn require_login(client: &ApiClient) {
    if let Err(e) = client.require_token() {
        fail(&e, AUTH_FALLBACK);
    }
}

async fn load_board(client: &ApiClient) -> ReportBoard {
    match client.load_board().await {
        Ok(board) => board,
        Err(e) => fail(&e, "Failed to fetch reports."),
    }
}

async fn select_report(client: &ApiClient, index: Option<usize>) -> ReportBoard {
    let mut board = load_board(client).await;

    if board.reports().is_empty() {
        println!("No reports available yet.");
        std::process::exit(0);
    }
    if let Some(index) = index {
        if !board.select(index) {
            eprintln!(
                "No report at position {} (have {}). Run `medscan reports` to list them.",
                index,
                board.reports().len()
            );
            std::process::exit(1);
        }
    }
    board
}

fn fail(error: &ClientError, fallback: &str) -> ! {
    tracing::debug!(error = %error, "Command failed");
    eprintln!("{}", error.message_or(fallback));
    std::process::exit(1);
}
