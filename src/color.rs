#![allow(clippy::module_name_repetitions)]
//! Color mode configuration and ANSI painting helpers for stderr one-liners.
//!
//! - NO_COLOR disables color unconditionally.
//! - A CLI choice (`set_color_mode`) beats the `TFS_BRIDGE_COLOR` environment preference.
//! - Helpers only add escape codes; message text is never altered.
//! - JSON on stdout is never painted.

use clap::ValueEnum;
use once_cell::sync::OnceCell;

pub const ENV_COLOR: &str = "TFS_BRIDGE_COLOR";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

static COLOR_MODE: OnceCell<ColorMode> = OnceCell::new();

pub fn set_color_mode(mode: ColorMode) {
    let _ = COLOR_MODE.set(mode);
}

pub fn parse_color_mode(s: &str) -> Option<ColorMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" | "on" | "true" | "yes" => Some(ColorMode::Always),
        "never" | "off" | "false" | "no" => Some(ColorMode::Never),
        _ => None,
    }
}

/// Decide whether to paint, given the inputs explicitly (pure; used by the wrappers below).
pub fn resolve_color(
    no_color: bool,
    cli: Option<ColorMode>,
    env_pref: Option<ColorMode>,
    is_tty: bool,
) -> bool {
    if no_color {
        return false;
    }
    match cli.or(env_pref).unwrap_or(ColorMode::Auto) {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty,
    }
}

pub fn color_enabled_stderr() -> bool {
    resolve_color(
        std::env::var_os("NO_COLOR").is_some(),
        COLOR_MODE.get().copied(),
        std::env::var(ENV_COLOR).ok().and_then(|v| parse_color_mode(&v)),
        atty::is(atty::Stream::Stderr),
    )
}

/// Wrap string with ANSI color code when enabled; otherwise return unchanged.
pub fn paint(enabled: bool, code: &str, s: &str) -> String {
    if enabled {
        format!("{code}{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

pub fn log_info_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[36;1m", msg));
}

pub fn log_warn_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[33m", msg));
}

pub fn log_error_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[31;1m", msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_wins_over_everything() {
        assert!(!resolve_color(true, Some(ColorMode::Always), None, true));
    }

    #[test]
    fn cli_beats_env() {
        assert!(resolve_color(false, Some(ColorMode::Always), Some(ColorMode::Never), false));
        assert!(!resolve_color(false, Some(ColorMode::Never), Some(ColorMode::Always), true));
    }

    #[test]
    fn env_applies_without_cli() {
        assert!(resolve_color(false, None, Some(ColorMode::Always), false));
    }

    #[test]
    fn auto_follows_tty() {
        assert!(resolve_color(false, None, None, true));
        assert!(!resolve_color(false, None, None, false));
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(parse_color_mode(" On "), Some(ColorMode::Always));
        assert_eq!(parse_color_mode("no"), Some(ColorMode::Never));
        assert_eq!(parse_color_mode("purple"), None);
    }

    #[test]
    fn paint_is_identity_when_disabled() {
        assert_eq!(paint(false, "\x1b[31m", "x"), "x");
        assert_eq!(paint(true, "\x1b[31m", "x"), "\x1b[31mx\x1b[0m");
    }
}
