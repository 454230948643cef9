//! Pavilio monthly rollover job.
//!
//! Runs the monthly rollover for every store. Safe to schedule as often as
//! wanted: stores already rolled over this month are skipped.
//!
//! Set `PAVILIO__ROLLOVER__AS_OF=YYYY-MM-DD` to run as of another date.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pavilio_core::calendar::{Clock, FixedClock, SystemClock};
use pavilio_core::rollover::RolloverOutcome;
use pavilio_db::{RolloverRepository, StoreRepository, connect};
use pavilio_shared::config::LoggingConfig;
use pavilio_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let db = connect(&config.database)
        .await
        .context("failed to connect to database")?;
    info!("Connected to database");

    let clock: Box<dyn Clock> = match config.rollover.as_of {
        Some(date) => {
            info!(as_of = %date, "running with a fixed date");
            Box::new(FixedClock::at_date(date))
        }
        None => Box::new(SystemClock),
    };

    let stores = StoreRepository::new(db.clone()).list().await?;
    let rollover = RolloverRepository::new(db);

    let mut completed = 0_usize;
    let mut skipped = 0_usize;
    let mut failed = 0_usize;
    for store in &stores {
        match rollover.run_monthly_rollover(store.id, clock.as_ref()).await {
            Ok(RolloverOutcome::Completed(_)) => completed += 1,
            Ok(RolloverOutcome::Skipped { .. }) => skipped += 1,
            Err(e) => {
                error!(store_id = %store.id, error = %e, "rollover failed");
                failed += 1;
            }
        }
    }

    info!(
        period = %clock.current_period(),
        stores = stores.len(),
        completed,
        skipped,
        failed,
        "rollover run finished"
    );

    if failed > 0 {
        anyhow::bail!("rollover failed for {failed} of {} stores", stores.len());
    }
    Ok(())
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
