use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::process::ExitCode;
use wompi_checkout::application::checkout::CheckoutForm;
use wompi_checkout::config::CheckoutConfig;
use wompi_checkout::domain::card::{CardInput, PaymentMethod};
use wompi_checkout::domain::payment::{Installments, TransactionId};
use wompi_checkout::interfaces::report::ReportWriter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: CheckoutConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize the card and submit the payment
    Pay(PayArgs),
    /// Fetch the latest status of a transaction
    Refresh {
        /// Transaction ID (UUID) created by the backend
        #[arg(long)]
        transaction_id: Option<String>,
    },
}

#[derive(Args)]
struct PayArgs {
    /// Transaction ID (UUID) created by the backend
    #[arg(long)]
    transaction_id: Option<String>,

    #[arg(long, value_enum, default_value_t = PaymentMethod::Card)]
    method: PaymentMethod,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    installments: u32,

    #[command(flatten)]
    card: CardInput,

    /// Refresh the transaction status once the payment is accepted
    #[arg(long)]
    refresh: bool,
}

impl PayArgs {
    fn into_form(self) -> Result<CheckoutForm> {
        Ok(CheckoutForm {
            transaction_id: TransactionId::new(self.transaction_id.unwrap_or_default()),
            method: self.method,
            installments: Installments::new(self.installments).into_diagnostic()?,
            card: self.card,
        })
    }
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_tracing();
    let cli = Cli::parse();

    let mut controller = cli.config.controller(CheckoutForm::default());
    if let Some(warning) = controller.tokenizer_warning() {
        eprintln!("WARNING: {warning}. Paying is disabled until the Wompi tokenizer is configured.");
    }

    match cli.command {
        Command::Pay(args) => {
            let refresh = args.refresh;
            *controller.form_mut() = args.into_form()?;

            controller.on_continue().await;
            if refresh && controller.state().error.is_none() {
                controller.on_refresh().await;
            }
        }
        Command::Refresh { transaction_id } => {
            controller.form_mut().transaction_id =
                TransactionId::new(transaction_id.unwrap_or_default());
            controller.on_refresh().await;
        }
    }

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_results(controller.state()).into_diagnostic()?;

    if let Some(error) = &controller.state().error {
        eprintln!("{error}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
