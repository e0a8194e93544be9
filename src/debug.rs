use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use reqwest::StatusCode;

use crate::request::method::RequestMethod;

#[derive(Clone)]
enum DebugTarget {
    Console,
    File(String),
}

#[derive(Clone)]
struct DebugConfig {
    enabled: bool,
    target: DebugTarget,
}

static DEBUG_CONFIG: Lazy<RwLock<DebugConfig>> = Lazy::new(|| {
    RwLock::new(DebugConfig {
        enabled: false,
        target: DebugTarget::Console,
    })
});

/// Toggle per-request tracing. `target` is either `"console"` (or empty) or
/// a file path; a directory gets a `debug.log` inside it.
pub fn set_debug(enabled: bool, target: Option<&str>) {
    let mut cfg = DEBUG_CONFIG.write().unwrap();
    cfg.enabled = enabled;
    cfg.target = match target {
        Some(t) if t.eq_ignore_ascii_case("console") || t.is_empty() => DebugTarget::Console,
        Some(t) => {
            let path = Path::new(t);
            if path.is_dir() {
                DebugTarget::File(path.join("debug.log").to_string_lossy().to_string())
            } else {
                DebugTarget::File(t.to_string())
            }
        }
        None => DebugTarget::Console,
    };
}

pub(crate) fn debug_log(method: RequestMethod, url: &str, status: StatusCode, body: &str) {
    if !DEBUG_CONFIG.read().unwrap().enabled {
        return;
    }

    let msg = format!(
        "\n==== [{method}] ====\nURL: {url}\nStatus: {status}\nBody:\n{body}\n"
    );

    match &DEBUG_CONFIG.read().unwrap().target {
        DebugTarget::Console => println!("{msg}"),
        DebugTarget::File(path) => {
            let _ = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map(|mut f| writeln!(f, "{msg}"));
        }
    }
}
