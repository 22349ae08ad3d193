// src/demo/walkthrough.rs
use super::{demo_note, DemoNote, Flashcard};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoTab {
    #[default]
    Summary,
    Flashcards,
    Questions,
}

impl std::str::FromStr for DemoTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(DemoTab::Summary),
            "flashcards" | "cards" => Ok(DemoTab::Flashcards),
            "questions" => Ok(DemoTab::Questions),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

/// Navigation state of the demo page: which note is open, which tab is
/// showing and where the flashcard deck is.
#[derive(Debug, Clone, Default)]
pub struct DemoSession {
    selected: Option<&'static DemoNote>,
    tab: DemoTab,
    card_index: usize,
    show_answer: bool,
}

impl DemoSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a note, starting over on its summary with the first card face
    /// up. Unknown ids leave the session as it was.
    pub fn select(&mut self, note_id: &str) -> bool {
        let Some(note) = demo_note(note_id) else {
            return false;
        };
        self.selected = Some(note);
        self.tab = DemoTab::Summary;
        self.card_index = 0;
        self.show_answer = false;
        true
    }

    pub fn selected(&self) -> Option<&'static DemoNote> {
        self.selected
    }

    pub fn tab(&self) -> DemoTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: DemoTab) {
        self.tab = tab;
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    pub fn is_answer_shown(&self) -> bool {
        self.show_answer
    }

    fn card_count(&self) -> usize {
        self.selected.map_or(0, |n| n.flashcards.len())
    }

    pub fn current_card(&self) -> Option<&'static Flashcard> {
        self.selected?.flashcards.get(self.card_index)
    }

    pub fn next_card(&mut self) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        self.show_answer = false;
        self.card_index = (self.card_index + 1) % count;
    }

    pub fn prev_card(&mut self) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        self.show_answer = false;
        self.card_index = (self.card_index + count - 1) % count;
    }

    pub fn toggle_answer(&mut self) {
        if self.current_card().is_some() {
            self.show_answer = !self.show_answer;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_resets_navigation() {
        let mut session = DemoSession::new();
        assert!(session.select("demo-1"));
        session.set_tab(DemoTab::Flashcards);
        session.next_card();
        session.toggle_answer();
        assert_eq!(session.card_index(), 1);
        assert!(session.is_answer_shown());

        assert!(session.select("demo-2"));
        assert_eq!(session.tab(), DemoTab::Summary);
        assert_eq!(session.card_index(), 0);
        assert!(!session.is_answer_shown());
        assert_eq!(session.current_card().unwrap().id, "fc-6");
    }

    #[test]
    fn test_unknown_note_keeps_selection() {
        let mut session = DemoSession::new();
        assert!(!session.select("nonexistent"));
        assert!(session.selected().is_none());

        session.select("demo-3");
        assert!(!session.select("demo-9"));
        assert_eq!(session.selected().unwrap().id, "demo-3");
    }

    #[test]
    fn test_card_navigation_wraps() {
        let mut session = DemoSession::new();
        session.select("demo-2");

        session.prev_card();
        assert_eq!(session.card_index(), 3);
        assert_eq!(session.current_card().unwrap().id, "fc-9");

        session.next_card();
        assert_eq!(session.card_index(), 0);

        session.toggle_answer();
        session.next_card();
        assert!(!session.is_answer_shown());
    }

    #[test]
    fn test_navigation_without_selection_is_noop() {
        let mut session = DemoSession::new();
        session.next_card();
        session.prev_card();
        session.toggle_answer();
        assert_eq!(session.card_index(), 0);
        assert!(!session.is_answer_shown());
        assert!(session.current_card().is_none());
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("Cards".parse::<DemoTab>().unwrap(), DemoTab::Flashcards);
        assert!("calendar".parse::<DemoTab>().is_err());
    }
}
