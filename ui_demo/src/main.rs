//! Gesture demo
//!
//! Builds an interface from a configuration file, replays a scripted pointer
//! session against it and reports what each button saw.
//!
//! Usage: `gesture_demo [config.toml|config.ron]`

use std::path::PathBuf;

use rust_ui::core::{Config, ConfigError, InterfaceConfig};
use rust_ui::foundation::logging;
use rust_ui::input::PointerPhase;
use rust_ui::ui::{Button, Interface, UiError};

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Interface error: {0}")]
    Ui(#[from] UiError),

    #[error("Logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Pointer session replayed against the interface: (phase, x, y, time)
const SCRIPT: &[(PointerPhase, f32, f32, f64)] = &[
    // Click "Play"
    (PointerPhase::Start, 150.0, 100.0, 0.00),
    (PointerPhase::Drag, 155.0, 102.0, 0.05),
    (PointerPhase::End, 155.0, 102.0, 0.10),
    // Press "Quit", drag off it and release outside
    (PointerPhase::Start, 150.0, 130.0, 0.50),
    (PointerPhase::Drag, 450.0, 130.0, 0.55),
    (PointerPhase::End, 450.0, 130.0, 0.60),
    // Stray drag with no gesture in progress
    (PointerPhase::Drag, 10.0, 10.0, 0.70),
    // Click "Log" on the status bar, then an interrupted press
    (PointerPhase::Start, 90.0, 310.0, 1.00),
    (PointerPhase::End, 92.0, 311.0, 1.05),
    (PointerPhase::Start, 90.0, 310.0, 1.50),
    (PointerPhase::Cancel, 90.0, 310.0, 1.55),
];

fn config_path() -> PathBuf {
    std::env::args_os().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/interface.toml"),
        PathBuf::from,
    )
}

fn run() -> Result<(), DemoError> {
    let path = config_path();
    let config = InterfaceConfig::load_from_file(&path)?;
    logging::init_with_filter(&config.log_filter)?;
    log::info!("Loaded interface configuration from {}", path.display());

    let (mut interface, roots) = Interface::from_config(&config)?;
    interface.validate()?;

    for &(phase, x, y, time) in SCRIPT {
        log::debug!("Replaying {:?} at ({}, {})", phase, x, y);
        interface.dispatch_pointer(phase, x, y, time);
    }

    for (root, root_config) in roots.iter().zip(&config.roots) {
        let Some(handle) = interface.root(*root) else {
            continue;
        };
        for element in handle.children() {
            if let Some(button) = interface.widget::<Button>(*element) {
                log::info!(
                    "[{}] '{}' clicked {} time(s)",
                    root_config.name,
                    button.label(),
                    button.clicks()
                );
            }
        }
    }
    log::info!("Focused element: {:?}", interface.focused());

    for root in roots {
        interface.dispose_root(root)?;
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("gesture_demo failed: {err}");
        std::process::exit(1);
    }
}
