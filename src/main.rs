//! Command-line front-end for the Arweave gateway adapter.
//!
//! ```text
//! args → Operation (typed params) → dispatch → GatewayTransport → JSON on stdout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use arweave_gateway::config::validation::validate_config;
use arweave_gateway::config::ConfigError;
use arweave_gateway::gateway::GatewayTransport;
use arweave_gateway::lifecycle::Startup;
use arweave_gateway::operations::dispatcher::TagsParams;
use arweave_gateway::operations::network::BlockHeightParams;
use arweave_gateway::operations::pricing::{ArParams, BatchPriceParams, PriceParams, WinstonParams};
use arweave_gateway::operations::query::QueryTransactionsParams;
use arweave_gateway::operations::transactions::{
    DataEncoding, SubmitTransactionParams, TransactionDataParams, TransactionParams,
};
use arweave_gateway::operations::wallets::AddressParams;
use arweave_gateway::{dispatch, Operation, Tag};

#[derive(Parser)]
#[command(name = "arweave-gateway")]
#[command(about = "Query and use an Arweave gateway over REST and GraphQL", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gateway base URL (overrides config and ARWEAVE_GATEWAY_URL).
    #[arg(short, long)]
    gateway: Option<String>,

    /// GraphQL endpoint (defaults to <gateway>/graphql).
    #[arg(long)]
    graphql: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    Text,
    Base64url,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a transaction with decoded tags
    Tx { id: String },
    /// Fetch confirmation status of a transaction
    TxStatus { id: String },
    /// Fetch the data of a transaction
    TxData {
        id: String,
        #[arg(long, value_enum, default_value = "text")]
        encoding: Encoding,
    },
    /// Submit a signed transaction from a JSON file
    Submit { file: PathBuf },
    /// Wallet balance in Winston and AR
    Balance { address: String },
    /// Last transaction id sent from a wallet
    LastTx { address: String },
    /// Price of storing a number of bytes
    Price {
        bytes: u64,
        #[arg(long)]
        target: Option<String>,
    },
    /// Price several sizes in order
    Prices {
        #[arg(required = true)]
        sizes: Vec<u64>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        continue_on_failure: bool,
    },
    /// Gateway network info
    Info,
    /// Current block, or the block at a height
    Block { height: Option<u64> },
    /// Search transactions by tag (NAME=VALUE) and owner
    Query {
        #[arg(long = "tag", value_parser = parse_tag)]
        tags: Vec<Tag>,
        #[arg(long = "owner")]
        owners: Vec<String>,
        #[arg(long, default_value_t = 10)]
        first: u32,
        #[arg(long)]
        after: Option<String>,
    },
    /// Convert Winston to AR
    ToAr { winston: String },
    /// Convert AR to Winston
    ToWinston { ar: String },
    /// Base64URL-encode tags given as NAME=VALUE
    EncodeTags {
        #[arg(value_parser = parse_tag)]
        tags: Vec<Tag>,
    },
    /// Run an operation given as {"operation": ..., "params": ...}
    Run { json: String },
}

fn parse_tag(raw: &str) -> Result<Tag, String> {
    raw.split_once('=')
        .map(|(name, value)| Tag::new(name, value))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))
}

impl Commands {
    fn into_operation(self) -> Result<Operation, Box<dyn std::error::Error>> {
        let operation = match self {
            Commands::Tx { id } => Operation::GetTransaction(TransactionParams { id }),
            Commands::TxStatus { id } => Operation::GetTransactionStatus(TransactionParams { id }),
            Commands::TxData { id, encoding } => Operation::GetTransactionData(TransactionDataParams {
                id,
                encoding: match encoding {
                    Encoding::Text => DataEncoding::Text,
                    Encoding::Base64url => DataEncoding::Base64Url,
                },
            }),
            Commands::Submit { file } => {
                let transaction: Value = serde_json::from_str(&std::fs::read_to_string(file)?)?;
                Operation::SubmitTransaction(SubmitTransactionParams { transaction })
            }
            Commands::Balance { address } => Operation::GetBalance(AddressParams { address }),
            Commands::LastTx { address } => Operation::GetLastTransaction(AddressParams { address }),
            Commands::Price { bytes, target } => Operation::GetPrice(PriceParams { bytes, target }),
            Commands::Prices {
                sizes,
                target,
                continue_on_failure,
            } => Operation::GetPrices(BatchPriceParams {
                sizes,
                target,
                continue_on_failure,
            }),
            Commands::Info => Operation::GetNetworkInfo,
            Commands::Block { height: Some(height) } => {
                Operation::GetBlockByHeight(BlockHeightParams { height })
            }
            Commands::Block { height: None } => Operation::GetCurrentBlock,
            Commands::Query {
                tags,
                owners,
                first,
                after,
            } => Operation::QueryTransactions(QueryTransactionsParams {
                tags,
                owners,
                first,
                after,
            }),
            Commands::ToAr { winston } => Operation::ConvertWinstonToAr(WinstonParams { winston }),
            Commands::ToWinston { ar } => Operation::ConvertArToWinston(ArParams { ar }),
            Commands::EncodeTags { tags } => Operation::EncodeTags(TagsParams { tags }),
            Commands::Run { json } => serde_json::from_str(&json)?,
        };
        Ok(operation)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let startup = Startup::new();

    let mut config = startup.load_config(cli.config.as_deref())?;
    if let Some(gateway) = cli.gateway {
        config.gateway.base_url = gateway;
    }
    if let Some(graphql) = cli.graphql {
        config.gateway.graphql_url = Some(graphql);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.gateway.timeout_ms = timeout_ms;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    startup.init(&config);

    let transport =
        GatewayTransport::new(config.gateway.clone())?.with_metrics(config.observability.metrics_enabled);
    let operation = cli.command.into_operation()?;

    match dispatch(&transport, operation).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
