use tokio::sync::broadcast::{error::RecvError, Receiver};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::models::sensor_data::SensorData;

#[tracing::instrument(skip_all)]
pub async fn task_sensor_data_logging(
    token: CancellationToken,
    mut rx_sensor_data: Receiver<SensorData>,
) {
    info!("Started.");
    loop {
        tokio::select! {
            _ = token.cancelled() => {
                warn!("Cancelled.");
                break;
            },
            result = rx_sensor_data.recv() => {
                match result {
                    Ok(data) => info!(
                        ambient_c = data.ambient_temperature.celsius(),
                        object_c = data.object_temperature.celsius(),
                        "Got sensor data: {}",
                        data
                    ),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Skipped {} sensor data messages.", skipped)
                    }
                    Err(RecvError::Closed) => {
                        warn!("Sensor data channel closed.");
                        break;
                    }
                }
            }
        };
    }
}
