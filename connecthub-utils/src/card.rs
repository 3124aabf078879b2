/// Width of the rule drawn under card titles.
pub const CARD_RULE_WIDTH: usize = 40;

/// A titled text panel: the terminal stand-in for a UI modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    title: String,
    lines: Vec<String>,
    footer: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.lines
            .extend(text.into().lines().map(str::to_owned));
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn field(self, name: &str, value: impl std::fmt::Display) -> Self {
        self.line(format!("{name:<14} {value}"))
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.footer = (!text.is_empty()).then_some(text);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count().clamp(1, CARD_RULE_WIDTH)));
        out.push('\n');

        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }

        if let Some(footer) = &self.footer {
            out.push_str(&"-".repeat(CARD_RULE_WIDTH));
            out.push('\n');
            out.push_str(footer);
            out.push('\n');
        }

        out.trim_end().to_owned()
    }
}

/// Build a standard paginated card with an optional footer suffix.
pub fn build_paginated_card(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> Card {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    let footer_text = if total_pages > 1 {
        match footer_note {
            Some(note) if !note.is_empty() => format!("Page {}/{} | {}", page, total_pages, note),
            _ => format!("Page {}/{}", page, total_pages),
        }
    } else {
        footer_note.unwrap_or_default().to_owned()
    };

    Card::new(title).description(description).footer(footer_text)
}
