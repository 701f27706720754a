use eframe::egui;
use log::info;

use crate::app::app_core::PlaygroundApp;

pub fn render_sensor_screen(app: &mut PlaygroundApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(egui::RichText::new("Sensor Playground").size(20.0));
        });
        ui.add_space(16.0);

        // 姓名与位置信息
        let (city, state) = app.state.sensors.location_parts();
        ui.label("Name: Demo User");
        ui.add_space(5.0);
        ui.label(format!("Location: {}, {}", state, city));

        ui.add_space(16.0);

        // 传感器读数
        ui.label(format!(
            "Temperature: {} °C",
            app.state.sensors.temperature_text()
        ));
        ui.add_space(5.0);
        ui.label(format!(
            "Air Pressure: {} hPa",
            app.state.sensors.pressure_text()
        ));

        // 按钮垂直居中在剩余空间里
        let remaining = ui.available_height();
        ui.add_space((remaining / 2.0 - 20.0).max(0.0));
        render_playground_button(app, ui);
    });
}

/// 拖动导航按钮：任一轴累计拖动超过触发距离时切换到手势屏
fn render_playground_button(app: &mut PlaygroundApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        let response = ui.add(
            egui::Button::new("Gesture Playground").sense(egui::Sense::click_and_drag()),
        );

        if response.drag_started() {
            app.state.drag.begin();
        }

        if response.dragged() {
            let trigger_distance = app.config.get_config().gesture.drag_trigger_distance;
            if app.state.drag.update(response.drag_delta(), trigger_distance) {
                info!("Navigating to gesture playground");
                app.state.navigate_to_gesture();
            }
        }

        if response.drag_stopped() {
            app.state.drag.end();
        }
    });
}
