//! TUI utilities shared by the Kyara terminal interface.
//!
//! Formatting helpers that turn [`CharacterRecord`]s, sort state and page
//! state into ratatui [`Line`]s. They are used by the `kyara-tui` binary and
//! can be reused by other terminal front ends.
//!
//! # Features
//!
//! This module is only available when the `tui` feature is enabled.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kyara::prelude::*;
//! use kyara::tui::{format_character_title, format_details};
//!
//! let luffy = SeedData::builtin()
//!     .for_series(Series::OnePiece)
//!     .into_iter()
//!     .next()
//!     .unwrap();
//!
//! let title = format_character_title(&luffy);
//! let details = format_details(&luffy);
//!
//! assert_eq!(title.spans[0].content, "Monkey D. Luffy");
//! assert_eq!(details.len(), 7);
//! ```

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::{
    listing::PageState,
    types::{CharacterRecord, SeriesDetails, SortDirection, SortField, SortSpec},
};

/// Columns of the character table, in display order.
pub const COLUMNS: [SortField; 7] = [
    SortField::Id,
    SortField::Name,
    SortField::Race,
    SortField::Gender,
    SortField::Affiliation,
    SortField::Ki,
    SortField::MaxKi,
];

const PLACEHOLDER: &str = "Unknown";

/// Formats a character's name, series and affiliation on one line.
pub fn format_character_title(record: &CharacterRecord) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            record.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("({})", record.series()),
            Style::default().fg(Color::Green),
        ),
    ];

    if let Some(affiliation) = record.affiliation.as_deref().filter(|a| !a.is_empty()) {
        spans.push(Span::raw(" of "));
        spans.push(Span::styled(
            affiliation.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// The text shown in a table cell for `field`.
pub fn cell_text(record: &CharacterRecord, field: SortField) -> String {
    let text = match field {
        SortField::Id => Some(record.id.as_str()),
        SortField::Name => Some(record.name.as_str()),
        SortField::Race => record.race.as_deref(),
        SortField::Gender => record.gender.as_deref(),
        SortField::Affiliation => record.affiliation.as_deref(),
        SortField::Ki => record.ki(),
        SortField::MaxKi => record.max_ki(),
    };
    text.unwrap_or("-").to_string()
}

/// Column header with an arrow when the column is the active sort.
///
/// ```rust
/// use kyara::types::{SortField, SortSpec};
/// use kyara::tui::column_header;
///
/// let sort = Some(SortSpec::descending(SortField::Ki));
/// assert_eq!(column_header(SortField::Ki, sort), "Ki ▼");
/// assert_eq!(column_header(SortField::Name, sort), "Name");
/// ```
pub fn column_header(field: SortField, sort: Option<SortSpec>) -> String {
    let arrow = match sort {
        Some(spec) if spec.field == field => match spec.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
            SortDirection::None => "",
        },
        _ => "",
    };
    format!("{}{}", field.label(), arrow)
}

fn detail_line(label: &str, value: Option<&str>) -> Line<'static> {
    let value = match value.filter(|v| !v.is_empty()) {
        Some(v) => Span::styled(v.to_string(), Style::default().fg(Color::White)),
        None => Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
    };

    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Yellow)),
        value,
    ])
}

/// Formats every known field of a character, series-specific ones last.
pub fn format_details(record: &CharacterRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        detail_line("Id", Some(&record.id)),
        detail_line("Series", Some(record.series().name())),
        detail_line("Race", record.race.as_deref()),
        detail_line("Gender", record.gender.as_deref()),
        detail_line("Affiliation", record.affiliation.as_deref()),
    ];

    match &record.details {
        SeriesDetails::DragonBall { ki, max_ki } => {
            lines.push(detail_line("Ki", ki.as_deref()));
            lines.push(detail_line("Max Ki", max_ki.as_deref()));
        }
        SeriesDetails::OnePiece { crew, bounty } => {
            lines.push(detail_line("Crew", crew.as_deref()));
            lines.push(detail_line("Bounty", bounty.as_deref()));
        }
        SeriesDetails::Naruto { clan, rank, village } => {
            lines.push(detail_line("Clan", clan.as_deref()));
            lines.push(detail_line("Rank", rank.as_deref()));
            lines.push(detail_line("Village", village.as_deref()));
        }
    }

    lines
}

/// Word-wraps a description to `width` columns.
pub fn format_description(description: &str, width: usize) -> Vec<Line<'static>> {
    if description.trim().is_empty() {
        return vec![Line::from(Span::styled(
            "No description available",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in description.split_whitespace() {
        let needed = current_line.chars().count() + word.chars().count() + 1;
        if needed > width && !current_line.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current_line)));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() {
        lines.push(Line::from(current_line));
    }

    lines
}

/// "Page 2 of 3 (25 characters)"
pub fn page_indicator(pages: &PageState) -> String {
    format!(
        "Page {} of {} ({} characters)",
        pages.current_page + 1,
        pages.total_pages(),
        pages.total_items
    )
}

/// A status line: bold `prefix:` followed by the message, both in `color`.
pub fn create_status_message(prefix: &str, message: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}:", prefix),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(message.to_string(), Style::default().fg(color)),
    ])
}

/// Truncates text to `width` characters, ending in `...` when cut.
///
/// ```rust
/// use kyara::tui::truncate_text;
///
/// assert_eq!(truncate_text("Monkey D. Luffy", 9), "Monkey...");
/// assert_eq!(truncate_text("Zoro", 10), "Zoro");
/// ```
pub fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else if width > 3 {
        let kept: String = text.chars().take(width - 3).collect();
        format!("{}...", kept)
    } else {
        text.chars().take(width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naruto() -> CharacterRecord {
        let mut record = CharacterRecord::new(
            17,
            "Naruto Uzumaki",
            "",
            SeriesDetails::Naruto {
                clan: None,
                rank: None,
                village: Some("Konoha".to_string()),
            },
        );
        record.affiliation = Some("Konoha".to_string());
        record
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_details_include_series_fields() {
        let lines: Vec<String> = format_details(&naruto()).iter().map(plain).collect();

        assert!(lines.contains(&"Series: Naruto".to_string()));
        assert!(lines.contains(&"Village: Konoha".to_string()));
        assert!(lines.contains(&"Clan: Unknown".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Ki")));
    }

    #[test]
    fn test_cell_text() {
        let record = naruto();

        assert_eq!(cell_text(&record, SortField::Id), "naruto-17");
        assert_eq!(cell_text(&record, SortField::Ki), "-");
        assert_eq!(cell_text(&record, SortField::Affiliation), "Konoha");
    }

    #[test]
    fn test_description_wraps() {
        let lines = format_description("one two three four five", 9);
        let text: Vec<String> = lines.iter().map(plain).collect();

        assert_eq!(text, vec!["one two", "three", "four five"]);
        assert_eq!(plain(&format_description("  ", 10)[0]), "No description available");
    }

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("Hello World", 5), "He...");
        assert_eq!(truncate_text("Uchiha Itachi", 3), "Uch");
        assert_eq!(truncate_text("うずまきナルト", 5), "うず...");
    }

    #[test]
    fn test_status_message() {
        let line = create_status_message("Warning", "Character db-99 not found", Color::Yellow);

        assert_eq!(plain(&line), "Warning: Character db-99 not found");
        assert_eq!(line.spans[0].style.fg, Some(Color::Yellow));
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[2].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_page_indicator() {
        let mut pages = PageState::new();
        pages.set_total_items(25);
        pages.next_page();

        assert_eq!(page_indicator(&pages), "Page 2 of 3 (25 characters)");
    }
}
