pub mod config;
pub mod externals;
pub mod models;

use anyhow::{Context, Result};
use config::MonitorConfig;
use externals::{
    event_logging::task::task_sensor_data_logging,
    ir_sensor::{services::Mlx90614Service, task::task_poll_ir_sensor},
};
use linux_embedded_hal::I2cdev;
use mlx90614_core::Mlx90614;
use tokio::{signal, sync::broadcast};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = MonitorConfig::from_env()?;

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_max_level(config.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("Using config: {:?}", config);

    // NOTE: The adapter behind this device has to be clocked at 100kHz.
    // The MLX90614 does not respond reliably at 400kHz.
    let i2c = I2cdev::new(&config.bus_path)
        .with_context(|| format!("Failed to open I2C bus '{}'.", config.bus_path))?;
    let sensor = Mlx90614::new(i2c, config.address)
        .map_err(|e| anyhow::anyhow!("Failed to create sensor driver. Error: {}", e))?
        .with_pec(config.pec);
    info!("Reading MLX90614 at {} on '{}'.", sensor.address(), config.bus_path);

    let tracker = TaskTracker::new();
    let token = CancellationToken::new();

    let (tx_sensor_data, rx_sensor_data) = broadcast::channel(32);

    let token_clone = token.clone();
    let service = Mlx90614Service::new(sensor);
    let poll_interval = config.poll_interval;
    tracker.spawn(async move {
        task_poll_ir_sensor(token_clone, service, poll_interval, tx_sensor_data).await
    });

    let token_clone = token.clone();
    tracker.spawn(async { task_sensor_data_logging(token_clone, rx_sensor_data).await });

    let token_clone = token.clone();

    tokio::select! {
        _ = token_clone.cancelled() => {}
        res = signal::ctrl_c() => {
            match res {
                Ok(_) => {
                    token.cancel();
                },
                Err(e)=>{
                    tracing::error!("Failed to listen for ctrl_c. Error: {}", e);
                    token.cancel();
                }
            };
        },
    }

    tracker.close();
    tracker.wait().await;

    Ok(())
}
