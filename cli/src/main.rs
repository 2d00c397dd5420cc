mod console;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use product_chat_core::config::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_NOTICE_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SESSION_ID,
};
use product_chat_core::recommender::HttpRecommender;
use product_chat_core::{
    ChatController, ClientConfig, Recommender, RecommenderFactory, SubmitOutcome,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "product-chat", about = "Chat with a product recommendation service")]
struct Cli {
    /// Base URL of the recommendation service
    #[arg(long, env = "PRODUCT_CHAT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "PRODUCT_CHAT_SESSION_ID", default_value = DEFAULT_SESSION_ID)]
    session_id: String,

    /// Give up on a request after this many seconds
    #[arg(long, env = "PRODUCT_CHAT_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(long, env = "PRODUCT_CHAT_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    /// How long notices stay on screen
    #[arg(long, env = "PRODUCT_CHAT_NOTICE_SECS", default_value_t = DEFAULT_NOTICE_SECS)]
    notice_secs: u64,

    /// Answer locally instead of calling the service
    #[arg(long, env = "PRODUCT_CHAT_MOCK")]
    mock: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "PRODUCT_CHAT_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a single question and print the answer
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Check that the service is reachable
    Ping,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url.as_str())
            .with_session_id(self.session_id.as_str())
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_notice_duration(Duration::from_secs(self.notice_secs))
    }

    fn recommender(&self, config: &ClientConfig) -> Result<Arc<dyn Recommender>> {
        if self.mock {
            return Ok(RecommenderFactory::mock());
        }
        Ok(RecommenderFactory::http(config)?)
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.command.is_none() && cli.log_file.is_none() {
        // Anything below errors would scribble over the chat window
        Level::ERROR
    } else {
        Level::WARN
    };

    let builder = tracing_subscriber::fmt().with_max_level(level);
    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Optional: load .env (ignore errors if missing)
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = cli.client_config();
    config.validate()?;

    match &cli.command {
        None => {
            info!("Starting product chat TUI");
            let recommender = cli.recommender(&config)?;
            let mut app = product_chat_tui::App::new(recommender, config.notice_duration);
            app.run().await?;
            info!("Product chat shutting down");
        }
        Some(Command::Ask { question }) => {
            let recommender = cli.recommender(&config)?;
            let mut controller = ChatController::new(recommender, console::elements())
                .with_notice_duration(config.notice_duration);
            match controller.submit(&question.join(" ")).await {
                SubmitOutcome::Answered { .. } => {}
                SubmitOutcome::Rejected => bail!("question must not be empty"),
                SubmitOutcome::Failed { kind } => bail!("request failed ({kind:?})"),
            }
        }
        Some(Command::Ping) => {
            if cli.mock {
                println!("mock mode: no service to ping");
                return Ok(());
            }
            let recommender = HttpRecommender::new(&config)?;
            let greeting = recommender.ping().await?;
            println!(
                "{} is up{}",
                config.base_url,
                greeting.map(|g| format!(": {g}")).unwrap_or_default()
            );
        }
    }

    Ok(())
}
