use crossbeam_channel::Receiver;
use egui::pos2;

use crate::config::AppConfig;
use crate::gesture::{Ball, DragTrigger, GestureLog, SwipeTracker};
use crate::types::SensorUpdate;

/// 应用状态管理模块
/// 渲染层读取、通道排空逻辑写入的全部可变状态

/// 当前显示的屏幕，对应原型中的两个页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Sensor,
    Gesture,
}

/// 传感器最新值持有者，每次读数整体覆盖
#[derive(Debug, Clone)]
pub struct SensorValues {
    pub pressure: Option<f32>,
    pub temperature: Option<f32>,
    pub location: String,
    pub last_update_ms: Option<i64>,
}

impl Default for SensorValues {
    fn default() -> Self {
        Self {
            pressure: None,
            temperature: None,
            location: "Fetching, Fetching".to_string(),
            last_update_ms: None,
        }
    }
}

impl SensorValues {
    pub fn pressure_text(&self) -> String {
        match self.pressure {
            Some(pressure) => format!("{}", pressure),
            None => "Fetching".to_string(),
        }
    }

    pub fn temperature_text(&self) -> String {
        match self.temperature {
            Some(temperature) => format!("{}", temperature),
            None => "Fetching".to_string(),
        }
    }

    /// 把位置串拆成 (city, state)，拆不开时两者都是 Unknown
    pub fn location_parts(&self) -> (String, String) {
        let parts: Vec<&str> = self.location.split(", ").collect();
        if parts.len() >= 2 {
            (parts[0].to_string(), parts[1].to_string())
        } else {
            ("Unknown".to_string(), "Unknown".to_string())
        }
    }
}

/// 手势屏状态：按下/抬起跟踪、小球和日志
#[derive(Debug)]
pub struct GestureState {
    pub tracker: SwipeTracker,
    pub ball: Ball,
    pub log: GestureLog,
}

impl GestureState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            tracker: SwipeTracker::default(),
            ball: Ball::new(
                pos2(config.gesture.ball_start[0], config.gesture.ball_start[1]),
                config.gesture.ball_radius,
            ),
            log: GestureLog::default(),
        }
    }
}

/// 后台线程到GUI的数据通道
#[derive(Debug)]
pub struct DataChannels {
    pub sensor_receiver: Receiver<SensorUpdate>,
    pub location_receiver: Receiver<String>,
}

/// 统一的应用状态
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub sensors: SensorValues,
    pub gesture: GestureState,
    pub drag: DragTrigger,
    pub channels: DataChannels,
}

impl AppState {
    pub fn new(
        sensor_receiver: Receiver<SensorUpdate>,
        location_receiver: Receiver<String>,
        config: &AppConfig,
    ) -> Self {
        Self {
            screen: Screen::Sensor,
            sensors: SensorValues::default(),
            gesture: GestureState::new(config),
            drag: DragTrigger::default(),
            channels: DataChannels {
                sensor_receiver,
                location_receiver,
            },
        }
    }

    /// 单向导航：传感器屏 -> 手势屏
    pub fn navigate_to_gesture(&mut self) {
        self.screen = Screen::Gesture;
    }
}
