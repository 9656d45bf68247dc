use std::time::Duration;

use tokio::sync::broadcast::Sender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use crate::models::sensor_data::SensorData;

use super::services::IrSensorService;

/// Task: Runs periodically to read the infrared sensor and emit sensor data
/// messages. Can be cancelled.
///
/// NOTE: The bus transactions block the worker thread. At 100kHz a reading
/// takes well under a millisecond.
#[tracing::instrument(skip_all)]
pub async fn task_poll_ir_sensor(
    token: CancellationToken,
    mut service: impl IrSensorService,
    poll_interval: Duration,
    tx_sensor_data: Sender<SensorData>,
) {
    tracing::info!("Started.");
    loop {
        business_logic(&mut service, &tx_sensor_data).await;

        tokio::select! {
            _ = token.cancelled() => {
                warn!("Cancelled.");
                break;
            },
            _ = tokio::time::sleep(poll_interval) => {}
        };
    }
}

/// Perform task business logic.
/// Read the sensor once and try to emit the data.
#[tracing::instrument(skip_all)]
async fn business_logic(service: &mut impl IrSensorService, tx_sensor_data: &Sender<SensorData>) {
    trace!("Executing business logic.");
    let data = match service.read_sensor_data() {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read infrared sensor. Error: {}", e);
            return;
        }
    };

    debug!("Got sensor data: {}", data);
    if let Err(e) = tx_sensor_data.send(data) {
        error!("Failed to broadcast sensor data. Error: {}", e);
    } else {
        debug!("Sent a sensor data message.");
    }
}

#[cfg(test)]
mod tests {
    use common::physical::Temperature;
    use tokio::sync::broadcast;

    use super::*;
    use crate::externals::ir_sensor::services::IrSensorServiceError;

    /// Fails on every other call, starting with the first.
    struct DummyIrSensorService {
        calls: u32,
    }

    impl IrSensorService for DummyIrSensorService {
        type BusError = ();

        fn read_sensor_data(&mut self) -> Result<SensorData, IrSensorServiceError<()>> {
            self.calls += 1;
            if self.calls % 2 == 1 {
                return Err(IrSensorServiceError::FailedToRead(
                    mlx90614_core::Error::Bus(()),
                ));
            }
            Ok(SensorData {
                ambient_temperature: Temperature::try_from(self.calls as f32)
                    .expect("Failed to get Temperature representation."),
                object_temperature: Temperature::try_from(50f32)
                    .expect("Failed to get Temperature representation."),
            })
        }
    }

    #[tokio::test]
    async fn failed_reads_are_skipped() {
        let token = CancellationToken::new();
        let (tx, mut rx) = broadcast::channel(8);

        let handle = tokio::spawn(task_poll_ir_sensor(
            token.clone(),
            DummyIrSensorService { calls: 0 },
            Duration::from_millis(1),
            tx,
        ));

        let first = rx.recv().await.expect("Failed to receive sensor data.");
        let second = rx.recv().await.expect("Failed to receive sensor data.");
        assert_eq!(first.ambient_temperature.celsius(), 2f32);
        assert_eq!(second.ambient_temperature.celsius(), 4f32);

        token.cancel();
        handle.await.expect("Task panicked.");
    }

    #[tokio::test]
    async fn cancelled_task_exits() {
        let token = CancellationToken::new();
        let (tx, _rx) = broadcast::channel(8);
        token.cancel();

        task_poll_ir_sensor(
            token,
            DummyIrSensorService { calls: 0 },
            Duration::from_secs(60),
            tx,
        )
        .await;
    }
}
