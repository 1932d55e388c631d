use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, Stream, TerminalCapabilities};

/// Resolved output settings.
///
/// `color` applies to stdout (step progress) and `stderr_color` to stderr
/// (failures and warnings), each decided from its own stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub stderr_color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(
            json,
            verbose,
            cli_color,
            detect_capabilities(Stream::Stdout),
            detect_capabilities(Stream::Stderr),
        )
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
        stderr_caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            verbose,
            caps,
            color: resolve_color(cli_color, caps),
            stderr_color: resolve_color(cli_color, stderr_caps),
            unicode: caps.supports_unicode,
        }
    }
}

fn resolve_color(cli_color: Option<ColorWhen>, caps: TerminalCapabilities) -> bool {
    match cli_color {
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
    }
}
