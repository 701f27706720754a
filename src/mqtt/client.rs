use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use dotenv::dotenv;
use log::{debug, error, info, warn};
use rumqttc::{Client, Event, LastWill, MqttOptions, Packet, QoS};

use crate::config::MqttConfig;
use crate::types::{LocationFix, SensorKind, SensorReading, SensorUpdate};

/// 传感器数据订阅线程
/// 订阅气压/温度/定位三个主题，把解析后的读数转发给GUI，
/// 定位结果交给反向地理编码线程。

pub fn run_sensor_feed(
    update_sender: Sender<SensorUpdate>,
    fix_sender: Sender<LocationFix>,
    shutdown_signal: Arc<AtomicBool>,
    config: MqttConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok(); // 加载 .env 文件

    let mqtt_host = env::var("MQTT_HOST").unwrap_or_else(|_| config.broker.clone());
    let mqtt_port = env::var("MQTT_PORT")
        .unwrap_or_else(|_| config.port.to_string())
        .parse::<u16>()?;

    let mut mqtt_options = MqttOptions::new(config.client_id.as_str(), mqtt_host, mqtt_port);

    // 凭据可选，只有两者都给出时才设置
    if let (Ok(user), Ok(pass)) = (env::var("MQTT_USER"), env::var("MQTT_PASS")) {
        mqtt_options.set_credentials(user, pass);
    }

    let qos = qos_from_level(config.qos);
    mqtt_options
        .set_keep_alive(Duration::from_secs(config.keep_alive as u64))
        .set_last_will(LastWill::new(
            "sensors/status",
            "offline",
            QoS::AtLeastOnce,
            false,
        ));

    let (client, mut connection) = Client::new(mqtt_options, 10);
    client.subscribe(config.topics.pressure.as_str(), qos)?;
    client.subscribe(config.topics.temperature.as_str(), qos)?;
    client.subscribe(config.topics.location.as_str(), qos)?;
    info!(
        "Sensor feed subscribed to {}, {}, {}",
        config.topics.pressure, config.topics.temperature, config.topics.location
    );

    for event in connection.iter() {
        // 检查关闭信号
        if shutdown_signal.load(Ordering::Relaxed) {
            info!("Sensor feed received shutdown signal, exiting gracefully");
            break;
        }

        match event {
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let topic = publish.topic.as_str();

                if topic == config.topics.pressure || topic == config.topics.temperature {
                    let kind = if topic == config.topics.pressure {
                        SensorKind::Pressure
                    } else {
                        SensorKind::Temperature
                    };

                    match parse_sensor_reading(&publish.payload) {
                        Ok(reading) => {
                            debug!("{} reading: {}", kind.as_str(), reading.value);
                            if update_sender.send(SensorUpdate::new(kind, reading)).is_err() {
                                // 通道断开表示GUI已关闭，优雅退出
                                info!("Sensor channel disconnected, feed exiting");
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid {} payload: {}", kind.as_str(), e),
                    }
                } else if topic == config.topics.location {
                    match parse_location_fix(&publish.payload) {
                        Ok(fix) => {
                            if fix_sender.send(fix).is_err() {
                                info!("Location channel disconnected, feed exiting");
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid location payload: {}", e),
                    }
                }
            }
            Ok(Event::Incoming(_)) => {}
            Err(e) => {
                error!("MQTT connection error: {}", e);
                return Err(e.into());
            }
            _ => {}
        }
    }

    Ok(())
}

fn qos_from_level(level: u8) -> QoS {
    match level {
        0 => QoS::AtMostOnce,
        2 => QoS::ExactlyOnce,
        _ => QoS::AtLeastOnce,
    }
}

fn parse_sensor_reading(payload: &[u8]) -> Result<SensorReading, String> {
    let payload_str =
        std::str::from_utf8(payload).map_err(|e| format!("Invalid UTF-8: {}", e))?;

    serde_json::from_str::<SensorReading>(payload_str)
        .map_err(|e| format!("JSON parsing error: {}", e))
}

fn parse_location_fix(payload: &[u8]) -> Result<LocationFix, String> {
    let payload_str =
        std::str::from_utf8(payload).map_err(|e| format!("Invalid UTF-8: {}", e))?;

    serde_json::from_str::<LocationFix>(payload_str)
        .map_err(|e| format!("Location JSON parsing error: {}", e))
}
