use crate::domain::model::{HealthResponse, TranslationResults};
use colored::Colorize;
use std::fmt::Write;

pub const NO_TRANSLATION: &str = "No translation available";

struct Palette {
    title: fn(&str) -> String,
    desc: fn(&str) -> String,
    line: fn(&str) -> String,
    para: fn(&str) -> String,
    missing: fn(&str) -> String,
}

impl Palette {
    fn default_palette() -> Self {
        Self {
            title: |s| s.bright_magenta().bold().underline().to_string(),
            desc: |s| s.bright_black().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            para: |s| s.white().to_string(),
            missing: |s| s.bright_black().dimmed().italic().to_string(),
        }
    }
}

/// Format the aggregate as one panel per model, in fixed order
pub fn format_results(results: &TranslationResults, enable_emoji: bool) -> String {
    let palette = Palette::default_palette();
    let mut output = String::new();
    let cutoff = "⸺".repeat(40);

    for (i, (model, translation)) in results.iter().enumerate() {
        if i > 0 {
            writeln!(output, "  {}", (palette.line)(&cutoff)).ok();
        }
        writeln!(output, "  {}", (palette.title)(model.display_name())).ok();
        writeln!(output, "  {}", (palette.desc)(model.description())).ok();
        writeln!(output).ok();

        match translation {
            Some(text) => {
                for line in text.lines() {
                    writeln!(output, "    {}", (palette.para)(line)).ok();
                }
            }
            None => {
                let prefix = if enable_emoji { "∅ " } else { "" };
                let msg = format!("{}{}", prefix, NO_TRANSLATION);
                writeln!(output, "    {}", (palette.missing)(&msg)).ok();
            }
        }
        writeln!(output).ok();
    }

    output
}

/// Notice shown when the whole comparison fails
pub fn format_failure(message: &str, enable_emoji: bool) -> String {
    let head = if enable_emoji {
        "✘ Translation failed"
    } else {
        "Translation failed"
    };
    format!("{}\n  {}\n", head.red().bold(), message)
}

pub fn format_health(base_url: &str, health: &HealthResponse) -> String {
    let mut output = String::new();
    writeln!(output, "{}", "mtc backend status".green().bold()).ok();
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━").ok();
    writeln!(output, "Endpoint: {}", base_url).ok();
    writeln!(output, "Status:   {}", health.status).ok();
    writeln!(output, "Version:  {}", health.version).ok();
    writeln!(output, "Device:   {}", health.device).ok();
    output
}
