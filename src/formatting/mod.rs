//! Terminal styling: color and emoji modes, severity-colored text.

use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::risk::{RiskTier, Severity};

/// Color output. `Auto` follows the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_terminal(),
        }
    }
}

/// Tier icons. Without a terminal, or with `--plain`, ASCII markers are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmojiMode {
    #[default]
    Auto,
    Never,
}

impl EmojiMode {
    fn enabled(self) -> bool {
        self == Self::Auto && detect_terminal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl FormattingConfig {
    /// Honor NO_COLOR, CLICOLOR and CLICOLOR_FORCE.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let color = if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            ColorMode::Always
        } else if var("NO_COLOR").is_some() || var("CLICOLOR").as_deref() == Some("0") {
            ColorMode::Never
        } else {
            ColorMode::Auto
        };
        Self {
            color,
            emoji: EmojiMode::Auto,
        }
    }

    /// What `--plain` selects.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

/// Applies the configured styling to report text.
pub struct Styler {
    config: FormattingConfig,
}

impl Styler {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.enabled());
        Self { config }
    }

    fn colorize(&self, text: &str, paint: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.enabled() {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn severity(&self, severity: Severity, text: &str) -> String {
        match severity {
            Severity::Success => self.colorize(text, |t| t.green().bold()),
            Severity::Warning => self.colorize(text, |t| t.yellow().bold()),
            Severity::Error => self.colorize(text, |t| t.red().bold()),
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.colorize(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.colorize(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.colorize(text, |t| t.dimmed())
    }

    pub fn emoji(&self, emoji: &'static str, fallback: &'static str) -> &'static str {
        if self.config.emoji.enabled() {
            emoji
        } else {
            fallback
        }
    }

    /// Marker shown before a tier label.
    pub fn tier_icon(&self, tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => self.emoji("✅", "[LOW]"),
            RiskTier::Borderline => self.emoji("⚠️", "[BORDERLINE]"),
            RiskTier::High => self.emoji("❗", "[HIGH]"),
        }
    }
}

fn detect_terminal() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
