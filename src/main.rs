use clap::Parser;
use tempolearn::cli::{
    handle_courses_list, handle_demo_flashcards, handle_demo_list, handle_demo_show,
    handle_demo_study, handle_notes_create, handle_notes_delete, handle_notes_list,
    handle_notes_upload, Cli, Commands, CoursesAction, DemoAction, NotesAction,
};

#[tokio::main]
async fn main() {
    tempolearn::logging::init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Demo(demo) => match demo.action {
            DemoAction::List { json } => handle_demo_list(json),
            DemoAction::Show { id, tab, json } => handle_demo_show(id, tab, json),
            DemoAction::Flashcards { json } => handle_demo_flashcards(json),
            DemoAction::Study { id } => handle_demo_study(id),
        },
        Commands::Notes(notes) => match notes.action {
            NotesAction::List {
                course,
                query,
                json,
            } => handle_notes_list(config, course, query, json).await,
            NotesAction::Delete { id, force } => handle_notes_delete(config, id, force).await,
            NotesAction::Upload {
                path,
                title,
                course,
                json,
            } => handle_notes_upload(config, path, title, course, json).await,
            NotesAction::Create {
                title,
                course,
                content,
                stdin,
                json,
            } => handle_notes_create(config, title, course, content, stdin, json).await,
        },
        Commands::Courses(courses) => match courses.action {
            CoursesAction::List { json } => handle_courses_list(config, json).await,
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
