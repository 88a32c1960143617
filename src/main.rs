use clap::{Parser, ValueEnum};
use classifier_ui::main::ClassifierApp;
use config::Config;
use eframe::egui;
use file_picker::impl_rfd::FilePickerRfd;
use library::logger::impl_console::LoggerConsole;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use prediction_client::impl_fake::PredictionClientFake;
use prediction_client::impl_http::PredictionClientHttp;
use prediction_client::interface::PredictionClient;
use std::sync::Arc;
use std::time::Duration;

mod classifier_ui;
mod config;
mod file_picker;
mod intake;
mod library;
mod prediction_client;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Console,
    Tracing,
}

#[derive(Debug, Parser)]
#[command(about = "Drop a tea leaf photo, get the predicted disease")]
struct Args {
    /// Prediction endpoint receiving the multipart upload.
    #[arg(long)]
    endpoint: Option<String>,

    /// Answer with random predictions instead of calling the endpoint.
    #[arg(long)]
    fake: bool,

    /// Seconds to wait for each prediction before giving up.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Console lines with local timestamps, or `tracing` events filtered by RUST_LOG.
    #[arg(long, value_enum, default_value = "tracing")]
    log_format: LogFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::default();
    if let Some(endpoint) = args.endpoint {
        config.predict_url = endpoint;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.request_timeout = Duration::from_secs(timeout_secs);
    }

    let logger: Arc<dyn Logger + Send + Sync> = match args.log_format {
        LogFormat::Console => Arc::new(LoggerConsole::new(config.logger_timezone)),
        LogFormat::Tracing => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .init();
            Arc::new(LoggerTracing::new())
        }
    };

    let prediction_client: Arc<dyn PredictionClient + Send + Sync> = if args.fake {
        Arc::new(PredictionClientFake::new(
            logger.with_namespace("fake-backend"),
            config.fake_class_names.clone(),
        ))
    } else {
        Arc::new(
            PredictionClientHttp::new(&config.predict_url, config.request_timeout)
                .map_err(|err| err.to_string())?,
        )
    };

    let _ = logger.info(&format!(
        "Starting with {}",
        if args.fake {
            "fake backend".to_string()
        } else {
            config.predict_url.clone()
        }
    ));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tea Leaf Disease Classifier")
            .with_inner_size([640.0, 720.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let file_picker = Arc::new(FilePickerRfd::new());

    eframe::run_native(
        "Tea Leaf Disease Classifier",
        options,
        Box::new(move |cc| {
            Box::new(ClassifierApp::new(
                cc.egui_ctx.clone(),
                config,
                logger.with_namespace("ui"),
                prediction_client,
                file_picker,
            ))
        }),
    )
    .map_err(|err| err.to_string())?;

    Ok(())
}
