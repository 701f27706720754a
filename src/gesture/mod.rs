pub mod ball;
pub mod drag;
pub mod log;
pub mod swipe;

pub use ball::Ball;
pub use drag::DragTrigger;
pub use log::GestureLog;
pub use swipe::{classify_swipe, Swipe, SwipeDirection, SwipeTracker};

#[cfg(test)]
mod tests;
