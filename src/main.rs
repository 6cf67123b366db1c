use adt7410::sensor::{self, Event, Settings};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::from_env()?;
    info!(
        "polling adt7410 at {:#04x} on i2c bus {} every {:?}",
        settings.address, settings.bus, settings.interval
    );

    let ct = CancellationToken::new();
    {
        let ct = ct.clone();
        ctrlc::set_handler(move || {
            info!("received ctrl+c, exiting");
            ct.cancel();
        })?;
    }

    let (evt_tx, evt_rx) = flume::bounded(256);
    let sensor_join = sensor::spawn_thread(ct.clone(), settings, evt_tx);

    // the channel closes when the sensor thread exits
    for evt in evt_rx.iter() {
        match evt {
            Event::Reading {
                celsius,
                fahrenheit,
            } => info!("temperature: {celsius:.4} °C / {fahrenheit:.4} °F"),
        }
    }

    sensor_join
        .join()
        .map_err(|_| anyhow::anyhow!("sensor thread panicked"))??;

    info!("exit");

    Ok(())
}
