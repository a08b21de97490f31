use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use stellar_burger::config::Config;
use stellar_burger::constructor::ConstructorIntent;
use stellar_burger::domain::{Order, OrderResponse};
use stellar_burger::ingredients::{load_catalog, FileCatalog};
use stellar_burger::logging::init_tracing;
use stellar_burger::order::{submit_order, CannedOrderGateway};
use stellar_burger::scenario::{load_scenario, replay};
use stellar_burger::store::Store;

#[derive(Debug, Parser)]
#[command(name = "stellar-burger", version, about = "Burger constructor state tools")]
struct Cli {
    /// Config file (default: <config dir>/stellar-burger/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay recorded actions and print the resulting state as JSON
    Replay {
        /// JSON array of action records
        scenario: PathBuf,
        /// Load this catalog before replaying
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Assemble a burger from the catalog and place it with a simulated order service
    Order {
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Catalog id of the bun
        #[arg(long)]
        bun: String,
        /// Catalog id of a filling; repeat for more, in order
        #[arg(long = "add")]
        fillings: Vec<String>,
        /// Simulated service delay (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Make the simulated service refuse the order with this message
        #[arg(long, conflicts_with = "offline")]
        fail: Option<String>,
        /// Make the simulated service unreachable
        #[arg(long)]
        offline: bool,
        /// Order number the simulated service assigns
        #[arg(long, default_value_t = 1)]
        number: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Replay { scenario, catalog } => {
            let store = Store::new();
            if let Some(path) = catalog.or(config.catalog.path.clone()) {
                load_catalog(&store, &FileCatalog::new(path)).await?;
            }
            let actions = load_scenario(&scenario)?;
            replay(&store, actions);
            println!("{}", serde_json::to_string_pretty(&store.state())?);
        }
        Command::Order {
            catalog,
            bun,
            fillings,
            delay_ms,
            fail,
            offline,
            number,
        } => {
            let Some(path) = catalog.or(config.catalog.path.clone()) else {
                bail!("no catalog given: pass --catalog or set catalog.path in the config");
            };
            let store = Store::new();
            load_catalog(&store, &FileCatalog::new(path)).await?;

            assemble(&store, &bun, &fillings)?;
            let price = store.select(|s| s.constructor.total_price());

            let delay = delay_ms.map_or(config.orders.simulated_delay(), Duration::from_millis);
            let gateway = match (fail, offline) {
                (_, true) => CannedOrderGateway::unreachable("simulated outage"),
                (Some(message), false) => CannedOrderGateway::failing(message),
                (None, false) => CannedOrderGateway::succeeding(canned_response(number)),
            }
            .with_delay(delay);

            let order = submit_order(&store, &gateway, config.orders.timeout()).await?;
            println!("Order #{} placed, total {}", order.number, price);
        }
    }

    Ok(())
}

/// Place the bun and fillings, looked up by catalog id.
fn assemble(store: &Store, bun: &str, fillings: &[String]) -> anyhow::Result<()> {
    let bun = store
        .select(|s| s.ingredients.find(bun).cloned())
        .with_context(|| format!("bun '{bun}' is not in the catalog"))?;
    if !bun.is_bun() {
        bail!("'{}' is a {}, not a bun", bun.id, bun.kind);
    }
    store.dispatch(ConstructorIntent::add(bun));

    for id in fillings {
        let filling = store
            .select(|s| s.ingredients.find(id).cloned())
            .with_context(|| format!("ingredient '{id}' is not in the catalog"))?;
        if filling.is_bun() {
            bail!("'{id}' is a bun; pass it with --bun");
        }
        store.dispatch(ConstructorIntent::add(filling));
    }
    Ok(())
}

fn canned_response(number: u64) -> OrderResponse {
    OrderResponse {
        success: true,
        name: "Space burger".to_string(),
        order: Order {
            id: format!("local-{number}"),
            status: "done".to_string(),
            name: "Space burger".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            number,
            ingredients: Vec::new(),
        },
    }
}
