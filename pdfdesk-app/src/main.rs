//! pdfdesk - desktop PDF toolkit.
//!
//! Menu-driven UI for merging, splitting, and converting PDF documents.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod dialogs;
mod screens;
mod session;

use clap::Parser;

use crate::app::PdfDeskApp;
use crate::cli::Cli;

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_filter()),
    )
    .init();

    let preload = cli.existing_pdfs();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "pdfdesk",
        options,
        Box::new(move |cc| Ok(Box::new(PdfDeskApp::new(cc, preload)))),
    )
}
