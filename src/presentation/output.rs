//! Output Rendering
//!
//! Everything the binary prints besides step progress: the failure block
//! with its orphaned resources, config warnings, and top-level errors.

use serde_json::json;

use crate::application::ProvisionFailure;
use crate::config::ConfigWarning;
use crate::domain::entities::ResourceLedger;
use crate::domain::ports::ProviderErrorKind;
use crate::error::ProvisionError;
use crate::ui::{ColoredText, Icon, UiContext};

/// Human-readable failure report: the step, the error, then every resource
/// the run left behind.
pub fn format_failure(failure: &ProvisionFailure, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(color, unicode),
        ColoredText::error(format!("{} failed", failure.step))
            .bold()
            .render(color)
    );
    out.push_str(&format!("  {}\n", failure.error));

    if is_name_collision(&failure.error) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(color, unicode),
            ColoredText::dim("a resource with this name already exists; rename it or remove the existing one")
                .render(color)
        ));
    }

    if failure.has_orphans() {
        out.push('\n');
        out.push_str(&format_orphans(&failure.orphaned, color, unicode));
    }

    out
}

fn is_name_collision(error: &ProvisionError) -> bool {
    matches!(error, ProvisionError::Provider(e) if e.kind() == ProviderErrorKind::PreconditionNotMet)
}

/// Resources left behind, oldest first
pub fn format_orphans(orphaned: &ResourceLedger, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Warning.colored(color, unicode),
        ColoredText::warning(format!(
            "{} resource(s) were created and remain live; remove them manually:",
            orphaned.len()
        ))
        .render(color)
    );
    for resource in orphaned.entries() {
        let handle = match &resource.id {
            Some(id) if id != &resource.name => format!("{} ({})", resource.name, id),
            _ => resource.name.clone(),
        };
        out.push_str(&format!(
            "  {} {}: {}\n",
            Icon::Orphan.colored(color, unicode),
            resource.kind,
            handle
        ));
    }
    out
}

/// NDJSON record emitted after the `error` event in `--json` mode
pub fn failure_json(failure: &ProvisionFailure) -> serde_json::Value {
    json!({
        "event": "failure",
        "command": "provision",
        "step": failure.step.name(),
        "code": failure.error.code(),
        "message": failure.error.to_string(),
        "orphaned": failure.orphaned,
    })
}

pub fn print_failure(failure: &ProvisionFailure, ui: &UiContext) {
    if ui.json {
        println!("{}", failure_json(failure));
        return;
    }
    eprint!("{}", format_failure(failure, ui.stderr_color, ui.unicode));
}

pub fn format_config_warning(warning: &ConfigWarning, color: bool, unicode: bool) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} {}: unknown config key '{}'",
        Icon::Warning.colored(color, unicode),
        location,
        warning.key
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(
            " (did you mean '{}'?)",
            ColoredText::info(suggestion.as_str()).render(color)
        ));
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            println!(
                "{}",
                json!({
                    "event": "warning",
                    "command": "provision",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                })
            );
        } else {
            eprintln!("{}", format_config_warning(warning, ui.stderr_color, ui.unicode));
        }
    }
}

/// Errors raised before the pipeline starts (config, validation)
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        println!(
            "{}",
            json!({
                "event": "error",
                "command": "provision",
                "message": format!("{:#}", err),
            })
        );
        return;
    }
    eprintln!("[ERROR] {:#}", err);
}
