//! Package command UI views

use std::path::Path;

use pongpack::config::ConfigWarning;
use pongpack::{PackageReport, Platform};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_package_header(
    workdir: &Path,
    platform: &Platform,
    config_source: Option<&Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = ColoredText::info("Pongpack").bold().render(supports_color);
    let mut out = format!(
        "{} {}\n",
        Icon::Package.colored(supports_color, supports_unicode),
        title
    );
    out.push_str(&format!("Workdir: {}\n", workdir.display()));
    out.push_str(&format!(
        "Platform: {} ({})\n",
        platform.archive_label(),
        platform.archive_format
    ));
    let config = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    out.push_str(&format!("Config: {}\n", config));
    out
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} unknown configuration key '{}' in {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!("  did you mean '{}'?\n", suggestion));
    }
    out
}

pub fn render_package_result(
    report: &PackageReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let archive = &report.archive;
    let title = ColoredText::success("Deployment archive created:")
        .bold()
        .render(supports_color);

    let mut out = format!(
        "{} {} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        title,
        archive.path.display()
    );
    out.push_str(&format!(
        "  Executable: {}\n",
        report.staged.executable.display()
    ));
    let resources = match report.staged.resources {
        Some(files) => format!("{} files", files),
        None => ColoredText::warning("none").render(supports_color),
    };
    out.push_str(&format!("  Resources:  {}\n", resources));
    out.push_str(&format!(
        "  Archive:    {}, {} files, {}\n",
        archive.format,
        archive.files,
        format_bytes(archive.bytes)
    ));
    out.push_str(&format!(
        "  Digest:     {}\n",
        ColoredText::dim(archive.digest.as_str()).render(supports_color)
    ));
    out
}

/// JSON `complete` event for `--json` runs
pub fn package_result_json(report: &PackageReport) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "status": "success",
        "archive": report.archive.path.display().to_string(),
        "format": report.archive.format.to_string(),
        "files": report.archive.files,
        "bytes": report.archive.bytes,
        "digest": report.archive.digest,
        "executable": report.staged.executable.display().to_string(),
        "resources": report.staged.resources,
        "stages": report.stages,
    })
}

fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}
