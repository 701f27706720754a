use egui::{Pos2, Vec2};

/// 滑动手势识别
/// 按下/抬起两点之间的位移超过阈值时归类为四个方向之一

/// 滑动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Up => "Up",
            SwipeDirection::Down => "Down",
            SwipeDirection::Left => "Left",
            SwipeDirection::Right => "Right",
        }
    }
}

/// 一次有效滑动：方向及其位移
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub direction: SwipeDirection,
    pub delta: Vec2,
}

/// 根据起止点归类滑动方向，两轴位移都不超过阈值时不算滑动
pub fn classify_swipe(start: Pos2, end: Pos2, threshold: f32) -> Option<Swipe> {
    let delta = end - start;

    if delta.x.abs() <= threshold && delta.y.abs() <= threshold {
        return None;
    }

    let direction = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if delta.y > 0.0 {
        SwipeDirection::Down
    } else {
        // dy == 0 的平局归为 Up
        SwipeDirection::Up
    };

    Some(Swipe { direction, delta })
}

/// 跨越按下/抬起两个离散事件保存的指针状态
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<Pos2>,
    latest: Option<Pos2>,
}

impl SwipeTracker {
    /// 指针按下，记录起点
    pub fn press(&mut self, pos: Pos2) {
        self.start = Some(pos);
        self.latest = Some(pos);
    }

    /// 指针移动，刷新终点候选
    pub fn motion(&mut self, pos: Pos2) {
        if self.start.is_some() {
            self.latest = Some(pos);
        }
    }

    /// 指针抬起，归类本次手势并清空状态
    pub fn release(&mut self, threshold: f32) -> Option<Swipe> {
        let start = self.start.take()?;
        let end = self.latest.take()?;
        classify_swipe(start, end, threshold)
    }
}
