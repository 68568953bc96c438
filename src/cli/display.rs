// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsift CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `DOCSIFT_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and falls back to plain text when stdout isn't a TTY, so
//! `docsift search ... | less` stays readable.

use docsift::{render_marked, HighlightedText, SearchResult};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Render highlighted text for the terminal.
///
/// With colors: matches in bold yellow. Without: matches in `[brackets]`,
/// so highlights survive piping into a file.
pub fn highlighted(text: &HighlightedText) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, YELLOW());
        render_marked(&text.text, &text.matches, &open, RESET)
    } else {
        render_marked(&text.text, &text.matches, "[", "]")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Border color and reset codes, or nothing when colors are off.
fn border_codes(colors: bool) -> (String, &'static str) {
    if colors {
        (GRAY(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Render a content line: │ content          │
fn render_row(content: &str, colors: bool) -> String {
    let (border, reset) = border_codes(colors);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    )
}

/// Render section header: ┌─ LABEL ──────────┐
fn render_section_top(label: &str, colors: bool) -> String {
    let (border, reset) = border_codes(colors);
    let label = if colors {
        format!("{}{}{}{}", BOLD, CYAN(), label, RESET)
    } else {
        label.to_string()
    };
    let label_part = format!("─ {} ", label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    )
}

/// Render section footer: └──────────────────┘
fn render_section_bot(colors: bool) -> String {
    let (border, reset) = border_codes(colors);
    format!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    println!("{}", render_row(content, use_colors()));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    println!("{}", render_section_top(label, use_colors()));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", render_section_bot(use_colors()));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Print one search result: rank, highlighted title, URL, snippet.
pub fn print_result(rank: usize, result: &SearchResult) {
    let badge = themed(GREEN, &[BOLD], &format!("{:>2}.", rank));
    println!("{} {}", badge, highlighted(&result.highlight.title));
    println!("    {}", themed(BLUE, &[UNDERLINE], &result.url));
    if !result.highlight.content.text.is_empty() {
        println!("    {}", highlighted(&result.highlight.content));
    }
    println!();
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a count with thousands separators: 1234567 → "1,234,567"
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
