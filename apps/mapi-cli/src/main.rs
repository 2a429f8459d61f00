//! mapi-cli - send one request to the merchant API.
//!
//! # Usage
//!
//! ```text
//! mapi-cli <METHOD> <PATH> [JSON_BODY]
//! mapi-cli <OPERATION> <PATH> <JSON_BODY>
//! ```
//!
//! `METHOD` is an HTTP verb. `OPERATION` is an operation name such as
//! `create_payment_request`; its payload is validated before sending and the
//! operation's own HTTP method is used.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MAPI_BASE_URL` | `https://api.mca.sh/merchant/v1/` | API root |
//! | `MAPI_MERCHANT_ID` | *(empty)* | Merchant id header |
//! | `MAPI_USER_ID` | *(empty)* | User id header |
//! | `MAPI_AUTH` | `open` | `open`, `secret` or `rsa` |
//! | `MAPI_SECRET` | *(unset)* | Shared secret for `secret` auth |
//! | `MAPI_PRIVATE_KEY_PATH` | *(unset)* | PEM/DER private key for `rsa` auth |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::sync::Arc;

use anyhow::{Context, Result};
use mapi_client::{MapiClient, MapiError, ReqwestTransport};
use mapi_core::{MapiConfig, MapiResponse};
use mapi_model::MapiOperation;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: mapi-cli <METHOD|OPERATION> <PATH> [JSON_BODY]";

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    /// A raw request with an optional body.
    Raw {
        method: String,
        path: String,
        body: Option<Value>,
    },
    /// A validated operation call.
    Operation {
        operation: MapiOperation,
        path: String,
        payload: Value,
    },
}

fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let verb = args.next().context(USAGE)?;
    let path = args.next().context(USAGE)?;
    let body = args
        .next()
        .map(|raw| serde_json::from_str::<Value>(&raw).context("JSON_BODY is not valid JSON"))
        .transpose()?;
    if args.next().is_some() {
        anyhow::bail!(USAGE);
    }

    match MapiOperation::from_name(&verb) {
        Some(operation) => Ok(Command::Operation {
            operation,
            path,
            payload: body.with_context(|| format!("{operation} requires a JSON_BODY"))?,
        }),
        None => Ok(Command::Raw {
            method: verb.to_ascii_uppercase(),
            path,
            body,
        }),
    }
}

async fn run(client: &MapiClient, command: Command) -> Result<MapiResponse, MapiError> {
    match command {
        Command::Raw { method, path, body } => {
            let body = body.map(|value| serde_json::to_vec(&value)).transpose()?;
            client.request(&method, &path, body.map(Into::into)).await
        }
        Command::Operation {
            operation,
            path,
            payload,
        } => client.call(operation, &path, &payload).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = MapiConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level)?;

    let command = parse_args(std::env::args().skip(1))?;
    let client = MapiClient::from_config(&config, Arc::new(ReqwestTransport::new()))
        .context("failed to build client")?;
    info!(base_url = %client.base_url(), auth = client.auth().name(), "client ready");

    match run(&client, command).await {
        Ok(response) => {
            println!("{}", response.status);
            println!("{}", response.body);
            Ok(())
        }
        Err(MapiError::Api(api)) => {
            println!("{}", api.status);
            println!("{}", api.body);
            anyhow::bail!("request failed with status {}", api.status)
        }
        Err(err) => Err(anyhow::Error::from(err).context("request failed")),
    }
}
