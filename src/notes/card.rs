// src/notes/card.rs
use chrono::{DateTime, Utc};

use crate::entity::{Note, NoteStatus};

/// How a note's processing status is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    pub animated: bool,
    /// Single-character form for terminal output.
    pub glyph: char,
}

impl StatusPresentation {
    pub const fn for_status(status: NoteStatus) -> Self {
        match status {
            NoteStatus::Completed => Self {
                icon: "check-circle",
                color: "green-600",
                background: "green-100",
                animated: false,
                glyph: '✓',
            },
            NoteStatus::Processing => Self {
                icon: "loader",
                color: "amber-600",
                background: "amber-100",
                animated: true,
                glyph: '⟳',
            },
            NoteStatus::Failed => Self {
                icon: "alert-circle",
                color: "red-600",
                background: "red-100",
                animated: false,
                glyph: '✗',
            },
            NoteStatus::Pending => Self {
                icon: "file-text",
                color: "ink-400",
                background: "parchment-100",
                animated: false,
                glyph: '•',
            },
        }
    }

    /// Presentation for a raw status string; anything unrecognised, or no
    /// status at all, is drawn as pending.
    pub fn for_raw_status(raw: Option<&str>) -> Self {
        let status = raw.and_then(|s| s.parse().ok()).unwrap_or_default();
        Self::for_status(status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Delete { note_id: String },
}

/// The per-card "more" menu. While open, any click outside it closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionMenu {
    open: bool,
}

impl ActionMenu {
    pub const ITEMS: [MenuItem; 1] = [MenuItem::Delete];

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Whether outside clicks are currently being captured.
    pub fn captures_outside_clicks(&self) -> bool {
        self.open
    }

    pub fn click_outside(&mut self) {
        self.open = false;
    }

    fn select(&mut self, item: MenuItem) -> Option<MenuItem> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(item)
    }
}

/// Display model for one note in the list.
#[derive(Debug, Clone)]
pub struct NoteCard {
    pub note_id: String,
    pub title: String,
    pub course_name: Option<String>,
    pub status: NoteStatus,
    pub uploaded_at: DateTime<Utc>,
    pub presentation: StatusPresentation,
    pub menu: ActionMenu,
}

impl NoteCard {
    pub fn new(note: &Note, course_name: Option<&str>) -> Self {
        Self {
            note_id: note.id.clone(),
            title: note.title.clone(),
            course_name: course_name.map(str::to_string),
            status: note.status,
            uploaded_at: note.uploaded_at,
            presentation: StatusPresentation::for_status(note.status),
            menu: ActionMenu::default(),
        }
    }

    pub fn uploaded_date(&self) -> String {
        self.uploaded_at.format("%Y-%m-%d").to_string()
    }

    pub fn select(&mut self, item: MenuItem) -> Option<CardAction> {
        match self.menu.select(item)? {
            MenuItem::Delete => Some(CardAction::Delete {
                note_id: self.note_id.clone(),
            }),
        }
    }

    /// One-line terminal rendering.
    pub fn render_line(&self) -> String {
        let mut line = format!(
            "{} {}  {}",
            self.presentation.glyph,
            self.uploaded_date(),
            self.title
        );
        if let Some(course) = &self.course_name {
            line.push_str(&format!("  [{}]", course));
        }
        line.push_str(&format!("  ({}, id {})", self.status, self.note_id));
        line
    }
}
