use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use chrono::DateTime;

use crate::api::{HttpBackend, NotesBackend, UploadFile};
use crate::config::ClientConfig;
use crate::demo::{demo_flashcards, demo_notes, DemoNote, DemoSession, DemoTab};
use crate::entity::Note;
use crate::error::{Result, TempoError};
use crate::notes::{DeleteOutcome, LoadOutcome, NoteCard, NoteFilter, NotesView, UploadMode};
use crate::session::SessionContext;

/// Load config and build the backend plus session for networked commands.
fn connect(config_path: Option<&Path>) -> Result<(SessionContext, HttpBackend)> {
    let config = ClientConfig::load(config_path)?;
    let ctx = SessionContext::from_config(&config)?;
    let backend = HttpBackend::new(&config)?;
    Ok((ctx, backend))
}

/// `2024-01-15T10:30:00Z` -> `2024-01-15`; unparseable input is returned as is.
fn short_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

pub fn handle_demo_list(json: bool) -> Result<()> {
    let notes = demo_notes();

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    for note in &notes {
        println!("{}  {}", note.id, note.title);
        println!(
            "        {} · {} cards · {} questions · {} events",
            note.course_name, note.flashcards_count, note.questions_count, note.events_count
        );
        println!("        {}", note.summary_preview.replace('\n', " "));
    }
    Ok(())
}

pub fn handle_demo_show(id: String, tab: Option<String>, json: bool) -> Result<()> {
    let mut session = DemoSession::new();
    if !session.select(&id) {
        return Err(TempoError::NoteNotFound(id));
    }
    let Some(note) = session.selected() else {
        return Err(TempoError::NoteNotFound(id));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
        return Ok(());
    }

    println!("{}", note.title);
    println!(
        "{} · {} · uploaded {}",
        note.course_name,
        note.status,
        short_date(note.uploaded_at)
    );

    match tab {
        Some(raw) => {
            let tab: DemoTab = raw.parse().map_err(TempoError::Config)?;
            session.set_tab(tab);
            print_demo_tab(note, session.tab());
        }
        None => {
            for tab in [DemoTab::Summary, DemoTab::Flashcards, DemoTab::Questions] {
                print_demo_tab(note, tab);
            }
        }
    }
    Ok(())
}

fn print_demo_tab(note: &DemoNote, tab: DemoTab) {
    match tab {
        DemoTab::Summary => {
            println!("\nSummary\n-------\n{}", note.summary);
            println!("\nKey concepts:");
            for concept in note.key_concepts {
                println!("  - {}", concept);
            }
            println!("\nKnowledge gaps:");
            for gap in note.knowledge_gaps {
                println!("  - {}", gap);
            }
            if !note.events.is_empty() {
                println!("\nUpcoming events:");
                for event in note.events {
                    println!(
                        "  - {} {}: {}",
                        short_date(event.event_date),
                        event.event_type,
                        event.title
                    );
                }
            }
        }
        DemoTab::Flashcards => {
            println!("\nFlashcards ({}):", note.flashcards.len());
            for (i, card) in note.flashcards.iter().enumerate() {
                println!("  {}. [{}] {}", i + 1, card.difficulty, card.front);
                println!("     {}", card.back);
            }
        }
        DemoTab::Questions => {
            println!("\nStudy questions ({}):", note.study_questions.len());
            for (i, q) in note.study_questions.iter().enumerate() {
                println!("  {}. ({}) {}", i + 1, q.question_type, q.question);
                println!("     Suggested answer: {}", q.suggested_answer);
            }
        }
    }
}

pub fn handle_demo_flashcards(json: bool) -> Result<()> {
    let cards = demo_flashcards();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    for card in &cards {
        println!(
            "{:<6} [{}] {}  ({})",
            card.card.id, card.card.difficulty, card.card.front, card.note_title
        );
    }
    println!("\n{} flashcards", cards.len());
    Ok(())
}

fn print_current_card(session: &DemoSession) {
    let Some(note) = session.selected() else {
        return;
    };
    let Some(card) = session.current_card() else {
        println!("This note has no flashcards.");
        return;
    };
    println!(
        "\nCard {}/{} [{}]",
        session.card_index() + 1,
        note.flashcards.len(),
        card.difficulty
    );
    println!("Q: {}", card.front);
    if session.is_answer_shown() {
        println!("A: {}", card.back);
    }
}

pub fn handle_demo_study(id: String) -> Result<()> {
    let mut session = DemoSession::new();
    if !session.select(&id) {
        return Err(TempoError::NoteNotFound(id));
    }
    session.set_tab(DemoTab::Flashcards);

    if let Some(note) = session.selected() {
        println!("Studying: {}", note.title);
    }
    println!("Commands: [n]ext, [p]revious, [a]nswer, [q]uit");
    print_current_card(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line?.trim() {
            "n" | "next" => session.next_card(),
            "p" | "prev" | "previous" => session.prev_card(),
            "a" | "answer" => session.toggle_answer(),
            "q" | "quit" => break,
            "" => continue,
            other => {
                println!("Unknown command '{}'. Use n, p, a or q.", other);
                continue;
            }
        }
        print_current_card(&session);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

async fn load_view<B: NotesBackend>(backend: &B, ctx: &SessionContext) -> Result<NotesView> {
    let mut view = NotesView::new();
    match view.load(backend, ctx).await {
        LoadOutcome::Failed(e) => Err(e),
        LoadOutcome::Loaded | LoadOutcome::Stale => Ok(view),
    }
}

pub async fn handle_notes_list(
    config: Option<PathBuf>,
    course: Option<String>,
    query: Option<String>,
    json: bool,
) -> Result<()> {
    let (ctx, backend) = connect(config.as_deref())?;
    let mut view = load_view(&backend, &ctx).await?;
    view.set_filter(NoteFilter::new(course, query.unwrap_or_default()));

    let shown = view.filtered();
    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if let Some(empty) = view.empty_state() {
        println!("No notes found. {}", empty.message());
        if empty.offers_upload() && ctx.can_upload() {
            println!("  tempolearn notes upload <file>");
        }
        return Ok(());
    }

    for note in shown {
        println!("{}", NoteCard::new(note, view.course_name(note)).render_line());
    }
    Ok(())
}

pub async fn handle_notes_delete(config: Option<PathBuf>, id: String, force: bool) -> Result<()> {
    if !force && !atty::is(atty::Stream::Stdin) {
        return Err(TempoError::NonInteractive);
    }

    let (ctx, backend) = connect(config.as_deref())?;
    let mut view = load_view(&backend, &ctx).await?;

    let mut confirm = |prompt: &str| -> bool {
        if force {
            return true;
        }
        eprint!("{} [y/N] ", prompt);
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => input.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    };

    match view.delete(&backend, &ctx, &id, &mut confirm).await? {
        DeleteOutcome::Deleted => println!("Deleted note {}", id),
        DeleteOutcome::Cancelled => println!("Cancelled."),
        DeleteOutcome::NotFound => return Err(TempoError::NoteNotFound(id)),
    }
    Ok(())
}

fn print_created(note: &Note, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Created note {} - {} ({})", note.id, note.title, note.status);
        println!("Processing continues in the background; run `tempolearn notes list` to check on it.");
    }
    Ok(())
}

pub async fn handle_notes_upload(
    config: Option<PathBuf>,
    path: PathBuf,
    title: Option<String>,
    course: Option<String>,
    json: bool,
) -> Result<()> {
    let (ctx, backend) = connect(config.as_deref())?;
    let file = UploadFile::from_path(&path)?;

    let mut view = NotesView::new();
    let form = view.open_upload();
    form.set_mode(UploadMode::File);
    if let Some(title) = title {
        form.set_title(title);
    }
    form.set_course(course);
    form.choose_files(std::iter::once(file));

    let note = view.submit_upload(&backend, &ctx).await?;
    print_created(&note, json)
}

pub async fn handle_notes_create(
    config: Option<PathBuf>,
    title: Option<String>,
    course: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let (ctx, backend) = connect(config.as_deref())?;

    let content = if stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        content.unwrap_or_default()
    };

    let mut view = NotesView::new();
    let form = view.open_upload();
    form.set_mode(UploadMode::Text);
    form.set_title(title.unwrap_or_default());
    form.set_course(course);
    form.set_content(content);

    let note = view.submit_upload(&backend, &ctx).await?;
    print_created(&note, json)
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

pub async fn handle_courses_list(config: Option<PathBuf>, json: bool) -> Result<()> {
    let (ctx, backend) = connect(config.as_deref())?;
    let courses = backend.get_courses(&ctx).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
        return Ok(());
    }

    if courses.is_empty() {
        println!("No courses yet.");
    }
    for course in &courses {
        println!("{}  {}", course.id, course.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-01-15T10:30:00Z"), "2024-01-15");
        assert_eq!(short_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn test_demo_show_unknown_id() {
        let err = handle_demo_show("nonexistent".to_string(), None, false).unwrap_err();
        assert!(matches!(err, TempoError::NoteNotFound(id) if id == "nonexistent"));
    }

    #[test]
    fn test_demo_show_rejects_unknown_tab() {
        let err = handle_demo_show("demo-1".to_string(), Some("calendar".to_string()), false)
            .unwrap_err();
        assert!(matches!(err, TempoError::Config(_)));
    }
}
