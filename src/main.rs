#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Report file path, set from command line
static REPORT_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Table localization language code, set from command line
static LANG: OnceLock<String> = OnceLock::new();

/// Get the report file to load, if one was chosen.
///
/// Falls back to `<data dir>/reportdeck/report.json` when it exists; with
/// nothing on disk the built-in sample dataset is used.
pub fn get_report_path() -> Option<PathBuf> {
    if let Some(path) = REPORT_PATH.get() {
        return Some(path.clone());
    }
    let default = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reportdeck")
        .join("report.json");
    default.exists().then_some(default)
}

/// Get the language code for table localization.
pub fn get_lang() -> String {
    LANG.get().cloned().unwrap_or_else(|| "pt-BR".to_string())
}

/// ReportDeck - asset report desk
#[derive(Parser, Debug)]
#[command(name = "reportdeck-desktop")]
#[command(about = "ReportDeck - desktop viewer for asset/tax reports")]
struct Args {
    /// Report data file (JSON); the built-in sample is used when omitted
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Language code for the spreadsheet table localization
    #[arg(short, long)]
    lang: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(path) = args.report {
        tracing::info!("Loading report from {:?}", path);
        let _ = REPORT_PATH.set(path);
    }
    if let Some(lang) = args.lang {
        let _ = LANG.set(lang);
    }

    let window_width = 1100.0;
    let window_height = 850.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("ReportDeck")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
