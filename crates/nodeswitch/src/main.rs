use std::process::ExitCode;

mod app;
mod logging;
mod settings;
mod state;

use nodeswitch_core::{detect_nvm, detect_nvm_at, NvmBackend, NvmDetection};

#[tokio::main]
async fn main() -> ExitCode {
    let settings = settings::AppSettings::load();
    logging::init_logging(settings.debug_logging);

    log::info!("nodeswitch {} starting", env!("CARGO_PKG_VERSION"));

    let Some(detection) = find_nvm(&settings).await else {
        eprintln!("nvm was not found on this system");
        return ExitCode::FAILURE;
    };

    let (Some(client), Some(info)) = (detection.client(), detection.backend_info()) else {
        eprintln!("nvm was not found on this system");
        return ExitCode::FAILURE;
    };

    log::info!(
        "Using nvm {} at {:?}",
        detection.version.as_deref().unwrap_or("(unknown version)"),
        info.path
    );

    let mut backend = NvmBackend::new(client, info);
    if let Some(url) = settings.catalog_url.clone() {
        backend = backend.with_catalog_url(url);
    }

    let app = app::App::new(Box::new(backend));

    match app.installed().await {
        Ok(records) => {
            println!("Installed versions:");
            for record in &records {
                let marker = if record.is_current { "*" } else { " " };
                println!("  {} {}", marker, record.version);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    match app.available().await {
        Ok(entries) => {
            println!("Available versions:");
            for entry in &entries {
                println!(
                    "  {:<10} {:<14} npm {}",
                    entry.version,
                    entry.status.to_string(),
                    entry.npm_version
                );
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

async fn find_nvm(settings: &settings::AppSettings) -> Option<NvmDetection> {
    if let Some(dir) = settings.nvm_dir.clone() {
        return detect_nvm_at(dir).await;
    }

    let detection = detect_nvm().await;
    detection.found.then_some(detection)
}
