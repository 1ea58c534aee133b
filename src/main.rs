use clap::{Parser, Subcommand};
use dsc_pay::application::gateway::PaymentGateway;
use dsc_pay::config::GatewayConfig;
use dsc_pay::infrastructure::console::{ConsoleNavigator, TracingNotifier};
use dsc_pay::infrastructure::in_memory::InMemorySessionStore;
use dsc_pay::interfaces::json::confirmation_writer::ConfirmationWriter;
use dsc_pay::interfaces::json::request_reader::RequestReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a gateway configuration JSON file (optional).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a payment request and submit it to the checkout endpoint.
    Initiate {
        /// Payment request JSON file.
        request: PathBuf,

        /// Treat the request as an event registration payment.
        #[arg(long)]
        event: bool,
    },
    /// Handle the gateway's return redirect.
    Confirm {
        /// Query string appended to the return URL, e.g.
        /// "status=success&transaction_id=T1".
        #[arg(long)]
        query: String,
    },
    /// Abandon the payment flow.
    Cancel,
}

fn load_config(path: Option<PathBuf>) -> Result<GatewayConfig> {
    match path {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            serde_json::from_reader(file).into_diagnostic()
        }
        None => Ok(GatewayConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let gateway = PaymentGateway::new(
        config,
        Box::new(ConsoleNavigator::new()),
        Box::new(TracingNotifier::new()),
        Box::new(InMemorySessionStore::new()),
    );

    match cli.command {
        Command::Initiate { request, event } => {
            let file = File::open(request).into_diagnostic()?;
            let request = RequestReader::new(file).read().into_diagnostic()?;

            if event {
                gateway.process_event_payment(&request).await.into_diagnostic()?;
            } else {
                gateway.process_membership_payment(&request).await.into_diagnostic()?;
            }
        }
        Command::Confirm { query } => {
            let confirmation = gateway.process_confirmation(&query).await.into_diagnostic()?;

            let stdout = io::stdout();
            let writer = ConfirmationWriter::new(stdout.lock());
            writer.write(&confirmation).into_diagnostic()?;
        }
        Command::Cancel => {
            gateway.cancel_payment().await.into_diagnostic()?;
        }
    }

    Ok(())
}
