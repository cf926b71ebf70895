//! Ledger validation example

use ledger_reconciliation::{ReconciliationConfig, ReconciliationEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const BALANCED: &str = r#"{
    "movements": [
        { "id": 1, "date": "2023-01-05", "wording": "Salary", "amount": 2500 },
        { "id": 2, "date": "2023-01-10", "wording": "Rent", "amount": -900 },
        { "id": 3, "date": "2023-01-31", "wording": "Groceries", "amount": -120.5 },
        { "id": 4, "date": "2023-02-12", "wording": "Utilities", "amount": -75.25 }
    ],
    "balances": [
        { "date": "2023-01-01", "balance": 1000 },
        { "date": "2023-01-31", "balance": 2479.5 },
        { "date": "2023-02-28", "balance": 2404.25 }
    ]
}"#;

const UNBALANCED: &str = r#"{
    "movements": [
        { "id": 1, "date": "2023-01-05", "wording": "Salary", "amount": 2500 },
        { "id": 1, "date": "2023-01-05", "wording": "Salary", "amount": 2500 }
    ],
    "balances": [
        { "date": "2023-01-01", "balance": 1000 },
        { "date": "2023-01-31", "balance": 3500 }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,ledger_reconciliation=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let engine = ReconciliationEngine::with_config(ReconciliationConfig::default());

    for (name, body) in [("balanced", BALANCED), ("duplicated", UNBALANCED)] {
        let response = engine.process_json(body)?;
        println!(
            "{} ledger -> {} {}",
            name,
            response.status_code(),
            response.to_json()?
        );
    }

    Ok(())
}
