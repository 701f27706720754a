use egui::Vec2;

/// 拖动导航触发器
/// 从拖动起点累计位移，任一轴超过触发距离时报告触发；
/// 越过阈值后的后续增量会继续报告，由调用方决定是否重复响应。
#[derive(Debug, Default)]
pub struct DragTrigger {
    accumulated: Vec2,
    active: bool,
}

impl DragTrigger {
    /// 拖动开始，累计清零
    pub fn begin(&mut self) {
        self.accumulated = Vec2::ZERO;
        self.active = true;
    }

    /// 追加一次拖动增量，返回是否越过触发距离
    pub fn update(&mut self, delta: Vec2, trigger_distance: f32) -> bool {
        if !self.active {
            return false;
        }

        self.accumulated += delta;
        self.accumulated.x.abs() > trigger_distance || self.accumulated.y.abs() > trigger_distance
    }

    /// 拖动结束，累计归零
    pub fn end(&mut self) {
        self.accumulated = Vec2::ZERO;
        self.active = false;
    }

    pub fn accumulated(&self) -> Vec2 {
        self.accumulated
    }
}
