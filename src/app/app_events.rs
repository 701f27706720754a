use log::{debug, info};

use super::app_core::PlaygroundApp;
use crate::types::SensorKind;

impl PlaygroundApp {
    /// 排空传感器通道，逐条覆盖最新值
    pub fn handle_sensor_updates(&mut self) {
        while let Ok(update) = self.state.channels.sensor_receiver.try_recv() {
            match update.kind {
                SensorKind::Pressure => {
                    self.state.sensors.pressure = Some(update.reading.value);
                }
                SensorKind::Temperature => {
                    debug!("Temperature sensor value: {}", update.reading.value);
                    self.state.sensors.temperature = Some(update.reading.value);
                }
            }
            self.state.sensors.last_update_ms = Some(update.reading.timestamp);
        }
    }

    /// 排空反向地理编码结果通道
    pub fn handle_location_results(&mut self) {
        while let Ok(location) = self.state.channels.location_receiver.try_recv() {
            info!("Updating location data: {}", location);
            self.state.sensors.location = location;
        }
    }
}
