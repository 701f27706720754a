pub mod gesture_screen;
pub mod sensor_screen;
pub mod status_bar;

pub use gesture_screen::render_gesture_screen;
pub use sensor_screen::render_sensor_screen;
pub use status_bar::render_status_bar;
