use pongpack::PongpackError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Suggested fix for errors a user can act on
fn hint(err: &PongpackError) -> Option<&'static str> {
    match err {
        PongpackError::ToolSpawn { .. } => {
            Some("Install CMake and make sure it is on PATH, or set PONGPACK_BUILD_PROGRAM.")
        }
        PongpackError::ExecutableNotFound { .. } => Some(
            "Check the CMake target name; set [project] name in pongpack.toml if it is not 'pong'.",
        ),
        PongpackError::InvalidConfig { .. } => Some("Fix the configuration file and try again."),
        PongpackError::Layout(_) => {
            Some("Point build_dir and deploy_dir at dedicated subdirectories of the project.")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let message = err.to_string();
    let mut out = format!(
        "{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Error:").bold().render(supports_color),
        message
    );

    // Sources already folded into an earlier message are not repeated
    let mut shown = message.clone();
    for cause in err.chain().skip(1) {
        let cause = cause.to_string();
        if shown.contains(&cause) {
            continue;
        }
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim("caused by:").render(supports_color),
            cause
        ));
        shown.push_str(&cause);
    }

    if let Some(hint) = err.downcast_ref::<PongpackError>().and_then(hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }

    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
