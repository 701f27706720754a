mod app;
mod config;
mod geocode;
mod gesture;
mod logger;
mod mqtt;
mod types;
mod utils;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::bounded;
use eframe::egui;
use log::{error, info, warn};

use app::PlaygroundApp;
use config::ConfigManager;

fn main() {
    logger::init_logger();
    info!("Application starting");

    let config = match ConfigManager::load_from_file("config.toml") {
        Ok(manager) => {
            info!("Loaded configuration from config.toml");
            manager
        }
        Err(e) => {
            warn!("Using default configuration: {}", e);
            ConfigManager::new()
        }
    };
    let cfg = config.get_config().clone();

    let (update_sender, update_receiver) = bounded(cfg.channels.sensor_channel_capacity);
    let (fix_sender, fix_receiver) = bounded(cfg.channels.fix_channel_capacity);
    let (location_sender, location_receiver) =
        bounded(cfg.channels.location_result_channel_capacity);
    let shutdown_signal = Arc::new(AtomicBool::new(false));

    // 传感器订阅线程
    let feed_shutdown = Arc::clone(&shutdown_signal);
    let feed_config = cfg.mqtt.clone();
    let feed_handle = thread::spawn(move || {
        if let Err(e) = mqtt::run_sensor_feed(update_sender, fix_sender, feed_shutdown, feed_config)
        {
            error!("Sensor feed thread failed: {}", e);
        }
    });

    // 反向地理编码线程
    let geocode_config = cfg.location.clone();
    let geocode_handle = thread::spawn(move || {
        geocode::run_geocode_worker(fix_receiver, location_sender, geocode_config);
    });

    let options = eframe::NativeOptions {
        vsync: cfg.window.vsync,
        hardware_acceleration: if cfg.window.hardware_acceleration {
            eframe::HardwareAcceleration::Preferred
        } else {
            eframe::HardwareAcceleration::Off
        },
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cfg.window.width, cfg.window.height])
            .with_resizable(cfg.window.resizable),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        &cfg.window.title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlaygroundApp::new(
                update_receiver,
                location_receiver,
                config,
            )))
        }),
    ) {
        error!("GUI failed: {}", e);
        std::process::exit(1);
    }

    // GUI 关闭后，通知后台线程退出
    info!("GUI closed, signaling background threads to shut down");
    shutdown_signal.store(true, Ordering::Relaxed);

    if feed_handle.join().is_err() {
        warn!("Sensor feed thread panicked");
    }
    if geocode_handle.join().is_err() {
        warn!("Geocode worker panicked");
    }
    info!("Shutdown complete");
}
