//! Desktop test binary for grantkit-status-view.
//!
//! Run with: `cargo run -p grantkit-status-view-test [options]`
//!
//! Options:
//!   `--lang <tag>`       Use the built-in strings for a language (`en`, `es`)
//!   `--config <path>`    Load a JSON view configuration
//!
//! Then type `c` (camera), `m` (microphone) or `q` (quit) and press enter.

use std::io::BufRead;

use anyhow::{Context, Result};
use grantkit_notice::SystemNotices;
use grantkit_permission::{Permission, SystemPermissions};
use grantkit_status_view::{Screen, Session, SessionHandle, ViewConfig};

struct Args {
    lang: Option<String>,
    config: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut lang = None;
    let mut config = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lang" if i + 1 < args.len() => {
                lang = Some(args[i + 1].clone());
                i += 2;
            }
            "--config" if i + 1 < args.len() => {
                config = Some(args[i + 1].clone());
                i += 2;
            }
            _ => i += 1,
        }
    }

    Args { lang, config }
}

fn load_config(args: &Args) -> Result<ViewConfig> {
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        return ViewConfig::from_json(&text).with_context(|| format!("parse {path}"));
    }
    Ok(args
        .lang
        .as_deref()
        .map_or_else(ViewConfig::default, ViewConfig::for_language))
}

fn draw(screen: &Screen) {
    println!("\n=== Permissions ===\n{screen}\n");
    println!("[c] camera  [m] microphone  [q] quit");
}

/// Reads button presses from stdin on its own thread, like a UI toolkit
/// delivering click events.
fn spawn_input(handle: SessionHandle) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match line.trim() {
                "c" | "camera" => {
                    handle.press(Permission::Camera);
                }
                "m" | "mic" | "microphone" => {
                    handle.press(Permission::Microphone);
                }
                "q" | "quit" => break,
                "" => {}
                other => println!("unknown input: {other}"),
            }
        }
        handle.close();
    });
}

fn main() -> Result<()> {
    env_logger::init();
    let config = load_config(&parse_args())?;

    let mut session = Session::new(SystemPermissions, SystemNotices, draw, config);
    spawn_input(session.handle());

    futures::executor::block_on(session.run());
    log::info!("bye");
    Ok(())
}
