use serde::{Deserialize, Serialize};

/// 应用配置管理模块
/// 集中管理所有配置项，提供默认值和配置验证

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub mqtt: MqttConfig,
    pub gesture: GestureConfig,
    pub location: LocationConfig,
    pub channels: ChannelConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    pub vsync: bool,
    pub hardware_acceleration: bool,
}

/// MQTT配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MqttConfig {
    pub broker: String,
    pub port: u16,
    pub client_id: String,
    pub topics: MqttTopics,
    pub qos: u8,
    pub keep_alive: u16,
}

/// MQTT主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MqttTopics {
    pub pressure: String,
    pub temperature: String,
    pub location: String,
}

/// 手势配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    pub swipe_threshold: f32,
    pub ball_radius: f32,
    pub ball_start: [f32; 2],
    pub drag_trigger_distance: f32,
}

/// 反向地理编码配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub geocoder_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
}

/// 通道配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub sensor_channel_capacity: usize,
    pub fix_channel_capacity: usize,
    pub location_result_channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            mqtt: MqttConfig::default(),
            gesture: GestureConfig::default(),
            location: LocationConfig::default(),
            channels: ChannelConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
            title: "Sensor Playground".to_string(),
            resizable: true,
            vsync: true,
            hardware_acceleration: true,
        }
    }
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            broker: "localhost".to_string(),
            port: 1883,
            client_id: "sensor-playground-01".to_string(),
            topics: MqttTopics::default(),
            qos: 1,
            keep_alive: 5,
        }
    }
}

impl Default for MqttTopics {
    fn default() -> Self {
        Self {
            pressure: "sensors/pressure".to_string(),
            temperature: "sensors/temperature".to_string(),
            location: "sensors/location".to_string(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            ball_radius: 50.0,
            ball_start: [200.0, 200.0],
            drag_trigger_distance: 100.0,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            geocoder_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "sensor-playground/0.1".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            sensor_channel_capacity: 1000,
            fix_channel_capacity: 16,
            location_result_channel_capacity: 16,
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;

        let config: AppConfig = toml::from_str(&content).map_err(ConfigError::ParseError)?;

        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Window dimensions must be positive".to_string(),
            ));
        }

        if self.gesture.swipe_threshold <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Swipe threshold must be positive".to_string(),
            ));
        }

        if self.gesture.ball_radius <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Ball radius must be positive".to_string(),
            ));
        }

        if self.gesture.drag_trigger_distance <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Drag trigger distance must be positive".to_string(),
            ));
        }

        if self.channels.sensor_channel_capacity == 0
            || self.channels.fix_channel_capacity == 0
            || self.channels.location_result_channel_capacity == 0
        {
            return Err(ConfigError::ValidationError(
                "Channel capacities must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 配置管理器
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    /// 创建配置管理器
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let config = AppConfig::load_from_file(path)?;
        Ok(Self { config })
    }

    /// 获取当前配置
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_window_dimensions_are_rejected() {
        let mut config = AppConfig::default();
        config.window.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn non_positive_swipe_threshold_is_rejected() {
        let mut config = AppConfig::default();
        config.gesture.swipe_threshold = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_channel_capacity_is_rejected() {
        let mut config = AppConfig::default();
        config.channels.fix_channel_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn full_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.mqtt.topics.pressure, config.mqtt.topics.pressure);
        assert_eq!(parsed.gesture.swipe_threshold, config.gesture.swipe_threshold);
    }
}
