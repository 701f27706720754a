use egui::{Pos2, Vec2};

/// 手势区域内的小球，随滑动位移并被限制在可见范围内
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub position: Pos2,
    pub radius: f32,
}

impl Ball {
    pub fn new(position: Pos2, radius: f32) -> Self {
        Self { position, radius }
    }

    /// 按滑动位移平移小球，逐轴收紧到 [radius, 边长 - radius]
    pub fn apply_swipe(&mut self, delta: Vec2, bounds: Vec2) {
        // 容器小于球径时上界会低于下界，取 max 避免 clamp 反转
        let max_x = (bounds.x - self.radius).max(self.radius);
        let max_y = (bounds.y - self.radius).max(self.radius);

        self.position.x = (self.position.x + delta.x).clamp(self.radius, max_x);
        self.position.y = (self.position.y + delta.y).clamp(self.radius, max_y);
    }
}
