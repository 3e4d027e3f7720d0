// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sifter CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `SIFTER_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY detection
//! for pipelines.

use std::sync::OnceLock;

use sifter::{FieldDescriptor, QueryOutcome, RankedRecord, RecordIndex, Score};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

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
    if let Ok(theme) = std::env::var("SIFTER_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; 7+ (except 8) is a light background
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
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
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
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Shorten text to `max_chars` characters, ending in `…` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let reset = reset();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let reset = reset();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score, brighter for scores well past the threshold
pub fn score_value(score: Score, threshold: Score) -> String {
    let text = format!("{:>5}", score);
    if !use_colors() {
        return text;
    }
    let color = if score == 0 {
        GRAY()
    } else if score >= threshold.saturating_mul(2).max(1) {
        BRIGHT_GREEN()
    } else if score >= threshold {
        GREEN()
    } else {
        YELLOW()
    };
    format!("{}{}{}", color, text, RESET)
}

/// `shown` / `hidden` badge
pub fn visibility_badge(visible: bool) -> String {
    if visible {
        themed(GREEN, &[BOLD], "shown ")
    } else {
        themed(GRAY, &[DIM], "hidden")
    }
}

/// One display-order line: badge, score, position, first field text.
pub fn ranked_line(entry: &RankedRecord, threshold: Score, index: &RecordIndex) -> String {
    let label = index
        .get(entry.position)
        .map(|r| r.field_text(0))
        .unwrap_or("");
    format!(
        " {} {} {} {}",
        visibility_badge(entry.visible),
        score_value(entry.score, threshold),
        themed(BLUE, &[], &format!("#{:<4}", entry.position)),
        truncate_text(label, BOX_WIDTH.saturating_sub(26))
    )
}

/// Boxed report of a query outcome.
pub fn print_outcome(outcome: &QueryOutcome, index: &RecordIndex, show_hidden: bool) {
    let words = if outcome.words.iter().all(|w| w.trim().is_empty()) {
        "(reset)".to_string()
    } else {
        outcome.words.join(" ")
    };

    section_top("QUERY");
    row(&format!(" words: {}", themed(BRIGHT_CYAN, &[BOLD], &words)));
    row(&format!(
        " threshold: {}   visible: {}/{}",
        outcome.threshold,
        outcome.visible_count,
        outcome.display_order.len()
    ));
    section_bot();

    section_top("RESULTS");
    let mut printed = 0;
    for entry in &outcome.display_order {
        if entry.visible || show_hidden {
            row(&ranked_line(entry, outcome.threshold, index));
            printed += 1;
        }
    }
    if printed == 0 {
        row(&themed(GRAY, &[DIM], " no records"));
    }
    section_bot();
}

/// Boxed dump of the index: one block per record.
pub fn print_index(index: &RecordIndex) {
    section_top("FIELDS");
    for (k, field) in index.fields().iter().enumerate() {
        row(&field_line(k, field));
    }
    section_bot();

    section_top(&format!("RECORDS ({})", index.len()));
    for record in index.records() {
        row(&themed(BLUE, &[BOLD], &format!(" #{}", record.original_position)));
        for (field, text) in index.fields().iter().zip(&record.field_texts) {
            let name = pad_right(&field.selector, 16);
            row(&format!(
                "   {} {}",
                themed(GRAY, &[], &name),
                truncate_text(text, BOX_WIDTH.saturating_sub(22))
            ));
        }
    }
    section_bot();
}

fn field_line(k: usize, field: &FieldDescriptor) -> String {
    format!(
        " {:>2}. {} weight {}",
        k,
        pad_right(&field.selector, 24),
        themed(YELLOW, &[BOLD], &field.weight.to_string())
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
