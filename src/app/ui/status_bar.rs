use eframe::egui;

use crate::app::app_core::PlaygroundApp;
use crate::app::state::Screen;
use crate::utils::format_timestamp;

pub fn render_status_bar(app: &mut PlaygroundApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("status_bar")
        .min_height(32.0)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("Screen:");

                let (screen_text, screen_color) = match app.state.screen {
                    Screen::Sensor => ("Sensor", egui::Color32::from_rgb(0, 150, 0)), // 绿色
                    Screen::Gesture => ("Gesture", egui::Color32::from_rgb(255, 165, 0)), // 橙色
                };
                ui.colored_label(screen_color, screen_text);

                ui.separator();

                // 最近一次读数时间
                match app.state.sensors.last_update_ms {
                    Some(timestamp) => {
                        ui.label(format!("Last reading: {}", format_timestamp(timestamp)));
                    }
                    None => {
                        ui.label("waiting for data...");
                    }
                }

                ui.separator();
                ui.label(format!("Swipes: {}", app.state.gesture.log.len()));
            });
            ui.add_space(5.0);
        });
}
