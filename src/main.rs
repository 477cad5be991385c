#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use std::panic;

use clap::Parser;
use eframe::NativeOptions;
use zen_trader::{Cli, run_app};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("zen_trader"), my_code_level)
        .init();

    let args = Cli::parse();
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_maximized(true)
            .with_title("ZenTrader Pro"),
        ..Default::default()
    };

    eframe::run_native(
        "ZenTrader",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
