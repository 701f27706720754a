use eframe::egui;
use egui::{Color32, CornerRadius, RichText};
use log::debug;

use crate::app::app_core::PlaygroundApp;

pub fn render_gesture_screen(app: &mut PlaygroundApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // 横屏左右分栏，竖屏上下堆叠
        let landscape = ui.available_width() > ui.available_height();

        if landscape {
            ui.columns(2, |columns| {
                render_gesture_area(app, &mut columns[0]);
                render_log_area(app, &mut columns[1]);
            });
        } else {
            let half_height = ui.available_height() / 2.0;
            ui.allocate_ui(egui::vec2(ui.available_width(), half_height - 8.0), |ui| {
                render_gesture_area(app, ui);
            });
            ui.add_space(16.0);
            render_log_area(app, ui);
        }
    });
}

/// 绿色手势区：跟踪一次按下/抬起，归类滑动并移动红球
fn render_gesture_area(app: &mut PlaygroundApp, ui: &mut egui::Ui) {
    let size = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::ZERO, Color32::GREEN);

    // 指针坐标换算为区域内局部坐标
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.state.gesture.tracker.press((pos - rect.min).to_pos2());
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.state.gesture.tracker.motion((pos - rect.min).to_pos2());
        }
    }

    if response.drag_stopped() {
        let threshold = app.config.get_config().gesture.swipe_threshold;
        if let Some(swipe) = app.state.gesture.tracker.release(threshold) {
            debug!("Swiped {}", swipe.direction.as_str());
            app.state
                .gesture
                .log
                .push(format!("Swiped {}", swipe.direction.as_str()));
            app.state.gesture.ball.apply_swipe(swipe.delta, rect.size());
        }
    }

    let ball = &app.state.gesture.ball;
    painter.circle_filled(rect.min + ball.position.to_vec2(), ball.radius, Color32::RED);
}

/// 手势日志：白底滚动列表，最新条目在最上
fn render_log_area(app: &mut PlaygroundApp, ui: &mut egui::Ui) {
    egui::Frame::default().fill(Color32::WHITE).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in app.state.gesture.log.entries() {
                    ui.add(
                        egui::Label::new(
                            RichText::new(entry)
                                .italics()
                                .color(Color32::BLACK)
                                .background_color(Color32::LIGHT_GRAY),
                        )
                        .wrap(),
                    );
                }
            });
    });
}
