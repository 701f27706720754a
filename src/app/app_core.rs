use std::time::Duration;

use crossbeam_channel::Receiver;
use eframe::{egui, Frame};
use log::info;

use crate::config::ConfigManager;
use crate::types::SensorUpdate;

use super::state::{AppState, Screen};

pub struct PlaygroundApp {
    // 统一的状态管理
    pub state: AppState,

    // 配置管理
    pub config: ConfigManager,
}

impl PlaygroundApp {
    pub fn new(
        sensor_receiver: Receiver<SensorUpdate>,
        location_receiver: Receiver<String>,
        config: ConfigManager,
    ) -> Self {
        // 创建应用状态
        let state = AppState::new(sensor_receiver, location_receiver, config.get_config());

        let app = PlaygroundApp { state, config };

        // 打印启动信息
        info!("应用启动，等待传感器数据...");

        app
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 设置明亮模式主题
        ctx.set_visuals(egui::Visuals::light());

        // 渲染UI组件
        crate::app::ui::render_status_bar(self, ctx);
        match self.state.screen {
            Screen::Sensor => crate::app::ui::render_sensor_screen(self, ctx),
            Screen::Gesture => crate::app::ui::render_gesture_screen(self, ctx),
        }

        // 排空后台线程送来的结果
        self.handle_sensor_updates();
        self.handle_location_results();

        ctx.request_repaint_after(Duration::from_millis(150));
    }
}
