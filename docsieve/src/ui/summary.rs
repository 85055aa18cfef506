// docsieve/src/ui/summary.rs
//! Batch summary table printed after a policy run.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::AnsiColors;
use std::io::{self, Write};

use docsieve_core::BatchReport;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

fn table_color(color: AnsiColors) -> Color {
    match color {
        AnsiColors::Black => Color::Black,
        AnsiColors::Red => Color::DarkRed,
        AnsiColors::Green => Color::DarkGreen,
        AnsiColors::Yellow => Color::DarkYellow,
        AnsiColors::Blue => Color::DarkBlue,
        AnsiColors::Magenta => Color::DarkMagenta,
        AnsiColors::Cyan => Color::DarkCyan,
        AnsiColors::BrightBlack => Color::DarkGrey,
        AnsiColors::BrightRed => Color::Red,
        AnsiColors::BrightGreen => Color::Green,
        AnsiColors::BrightYellow => Color::Yellow,
        AnsiColors::BrightBlue => Color::Blue,
        AnsiColors::BrightMagenta => Color::Magenta,
        AnsiColors::BrightCyan => Color::Cyan,
        AnsiColors::BrightWhite => Color::White,
        _ => Color::Grey,
    }
}

fn rows(report: &BatchReport) -> [(&'static str, usize); 7] {
    [
        ("Received", report.received),
        ("Personal", report.personal),
        ("Organizational", report.organizational),
        ("Unknown (passed through)", report.unknown),
        ("Invalid personal (marked)", report.invalid_personal),
        ("Invalid organizational (dropped)", report.dropped_organizational),
        ("Emitted", report.emitted()),
    ]
}

/// Renders `report` as a table.
pub fn render_summary(report: &BatchReport, theme: &ThemeMap, enable_colors: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);

    let header = |text: &str| {
        let cell = Cell::new(text);
        if enable_colors { cell.fg(table_color(color_for(ThemeEntry::Header, theme))) } else { cell }
    };
    table.set_header(vec![header("Outcome"), header("Records")]);

    for (label, count) in rows(report) {
        let mut label_cell = Cell::new(label);
        let mut count_cell = Cell::new(count.to_string());
        if enable_colors {
            label_cell = label_cell.fg(table_color(color_for(ThemeEntry::SummaryLabel, theme)));
            count_cell = count_cell.fg(table_color(color_for(ThemeEntry::SummaryCount, theme)));
        }
        table.add_row(vec![label_cell, count_cell]);
    }
    table
}

pub fn print_summary<W: Write>(report: &BatchReport, writer: &mut W, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    if enable_colors {
        writeln!(writer, "\n{}", render_summary(report, theme, enable_colors))
    } else {
        writeln!(writer, "\nBatch summary:\n{}", render_summary(report, theme, enable_colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn summary_lists_every_outcome() {
        let report = BatchReport {
            received: 5,
            personal: 2,
            organizational: 2,
            unknown: 1,
            invalid_personal: 1,
            dropped_organizational: 1,
        };
        let mut buf = Vec::new();
        print_summary(&report, &mut buf, &ThemeStyle::default_theme_map(), false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Invalid organizational (dropped)"));
        assert!(text.contains("Emitted"));
        assert!(text.contains('4'));
    }
}
