//! Sentinel IDS Core - Main Entry Point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod logic;
pub mod constants;
pub mod error;

use api::commands;
use logic::context::AppContext;

// --- Window Control Commands (Manual Implementation) ---
#[tauri::command]
async fn window_minimize(window: tauri::Window) {
    let _ = window.minimize();
}

#[tauri::command]
async fn window_toggle_maximize(window: tauri::Window) {
    if let Ok(is_max) = window.is_maximized() {
        if is_max {
            let _ = window.unmaximize();
        } else {
            let _ = window.maximize();
        }
    }
}

#[tauri::command]
async fn window_close(window: tauri::Window) {
    let _ = window.close();
}

#[tauri::command]
async fn window_start_drag(window: tauri::Window) {
    let _ = window.start_dragging();
}

#[tauri::command]
async fn show_main_window(window: tauri::Window) {
    let _ = window.show();
    let _ = window.set_focus();
}
// -----------------------------------------------------

fn main() {
    #[cfg(debug_assertions)]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    log::info!(
        "Starting {} core v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let context = AppContext::new(constants::models_dir());

    // The artifact bundle is all-or-nothing: without it no page can
    // operate, so a failed load halts the process before the window
    // ever shows.
    match context.artifacts() {
        Ok(bundle) => log::info!(
            "Artifact bundle ready ({} features, scaler + encoders verified)",
            bundle.schema.len()
        ),
        Err(e) => {
            log::error!(
                "Critical: could not load model artifacts from '{}': {}",
                context.models_dir().display(),
                e
            );
            std::process::exit(1);
        }
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(context)
        .invoke_handler(tauri::generate_handler![
            // Window Controls (Manual)
            window_minimize,
            window_toggle_maximize,
            window_close,
            window_start_drag,
            show_main_window,
            // Overview
            commands::get_system_status,
            commands::get_engine_status,
            commands::get_traffic_snapshot,
            // Live Detection
            commands::capture_sample,
            commands::get_current_sample,
            commands::run_scan,
            // AI Analytics
            commands::get_threat_indicators,
            commands::get_model_metadata,
        ])
        .run(tauri::generate_context!())
        .expect("error while running the Sentinel application");
}
