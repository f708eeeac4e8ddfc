use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

use course_core::model::{ChecklistKind, Track};
use log::info;
use services::{AppServices, CatalogError, CatalogService, LessonPage, ToggleOutcome};

mod render;

const DEFAULT_DB_URL: &str = "sqlite://course.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingArgument { command: &'static str, name: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidTrack { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArgument { command, name } => {
                write!(f, "{command} requires <{name}>")
            }
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ArgsError::InvalidTrack { raw } => {
                write!(f, "invalid track: {raw} (expected python or pandas)")
            }
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  course [options] syllabus");
    eprintln!("  course [options] lesson <slug>");
    eprintln!("  course [options] toggle <slug> <item-id> [--practice]");
    eprintln!("  course [options] reset  <slug> [--practice]");
    eprintln!("  course check");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>        default {DEFAULT_DB_URL}");
    eprintln!("  --track <python|pandas>  default python");
    eprintln!("  --json                   print views as JSON");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_DB_URL, COURSE_TRACK, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Syllabus,
    Lesson { slug: String },
    Toggle {
        slug: String,
        item: String,
        kind: Option<ChecklistKind>,
    },
    Reset { slug: String, kind: ChecklistKind },
    Check,
    Help,
}

/// Values read from the environment before flags are applied.
#[derive(Debug, Default)]
struct EnvDefaults {
    db_url: Option<String>,
    track: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            db_url: std::env::var("COURSE_DB_URL").ok(),
            track: std::env::var("COURSE_TRACK").ok(),
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    track: Track,
    json: bool,
    command: Command,
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env
            .db_url
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        // The environment track is parsed only if no flag overrides it.
        let mut track: Option<Track> = None;
        let mut json = false;
        let mut practice = false;
        let mut positional: Vec<String> = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--track" => {
                    let value = require_value(&mut args, "--track")?;
                    track = Some(parse_track(value)?);
                }
                "--json" => json = true,
                "--practice" => practice = true,
                "--help" | "-h" => {
                    return Ok(Self {
                        db_url,
                        track: track.unwrap_or(Track::Python),
                        json,
                        command: Command::Help,
                    });
                }
                _ if arg.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positional.push(arg),
            }
        }

        let command = parse_command(positional, practice)?;
        let track = match track {
            Some(track) => track,
            None => env
                .track
                .map(parse_track)
                .transpose()?
                .unwrap_or(Track::Python),
        };
        Ok(Self {
            db_url,
            track,
            json,
            command,
        })
    }
}

fn parse_track(raw: String) -> Result<Track, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidTrack { raw })
}

fn parse_command(positional: Vec<String>, practice: bool) -> Result<Command, ArgsError> {
    let mut rest = positional.into_iter();
    let Some(name) = rest.next() else {
        // No command: show the syllabus.
        return Ok(Command::Syllabus);
    };

    let mut take = |command: &'static str, name: &'static str| {
        rest.next()
            .ok_or(ArgsError::MissingArgument { command, name })
    };
    let command = match name.as_str() {
        "syllabus" => Command::Syllabus,
        "check" => Command::Check,
        "lesson" => Command::Lesson {
            slug: take("lesson", "slug")?,
        },
        "toggle" => Command::Toggle {
            slug: take("toggle", "slug")?,
            item: take("toggle", "item-id")?,
            kind: practice.then_some(ChecklistKind::Practice),
        },
        "reset" => Command::Reset {
            slug: take("reset", "slug")?,
            kind: if practice {
                ChecklistKind::Practice
            } else {
                ChecklistKind::Progress
            },
        },
        _ => return Err(ArgsError::UnknownCommand(name)),
    };

    if let Some(extra) = rest.next() {
        return Err(ArgsError::UnknownArg(extra));
    }
    if practice && !matches!(command, Command::Reset { .. } | Command::Toggle { .. }) {
        return Err(ArgsError::UnknownArg("--practice".into()));
    }
    Ok(command)
}

fn normalize_sqlite_url(raw: String) -> String {
    if is_memory_url(&raw) || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn is_memory_url(url: &str) -> bool {
    url == "sqlite::memory:" || url.contains("mode=memory")
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if is_memory_url(db_url) {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn emit_json(value: &impl serde::Serialize) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn emit_page(page: &LessonPage, json: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if json {
        emit_json(page)?;
    } else {
        render::lesson_page(&mut io::stdout().lock(), page)?;
    }
    Ok(match page {
        LessonPage::Found(_) => ExitCode::SUCCESS,
        LessonPage::NotFound { .. } => ExitCode::from(1),
    })
}

fn run_check() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let catalog = CatalogService::bundled();
    let mut out = io::stdout().lock();
    let mut failed = false;
    for track in catalog.tracks() {
        match catalog.check_track(track) {
            Ok(()) => writeln!(out, "{track}: ok")?,
            Err(CatalogError::InvalidCourse { violations, .. }) => {
                failed = true;
                writeln!(out, "{track}: {} problem(s)", violations.len())?;
                for violation in &violations {
                    writeln!(out, "  - {violation}")?;
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

async fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), EnvDefaults::from_env()).map_err(|e| {
        print_usage();
        e
    })?;

    match parsed.command {
        Command::Help => {
            print_usage();
            return Ok(ExitCode::SUCCESS);
        }
        Command::Check => return run_check(),
        _ => {}
    }

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let app = AppServices::new_sqlite(&parsed.db_url).await?;
    info!("using {} ({} track)", parsed.db_url, parsed.track);

    let track = parsed.track;
    match parsed.command {
        Command::Syllabus => {
            let view = app.catalog().syllabus(track)?;
            if parsed.json {
                emit_json(&view)?;
            } else {
                render::syllabus(&mut io::stdout().lock(), &view)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Lesson { slug } => {
            let page = app.reader().open_lesson(track, &slug).await?;
            emit_page(&page, parsed.json)
        }
        Command::Toggle { slug, item, kind } => {
            match app.reader().toggle_item(track, &slug, &item, kind).await? {
                ToggleOutcome::Toggled { kind, state, page } => {
                    if parsed.json {
                        emit_json(&page)?;
                    } else {
                        render::toggled(&mut io::stdout().lock(), &item, kind, state, &page)?;
                    }
                    Ok(ExitCode::SUCCESS)
                }
                ToggleOutcome::UnknownItem { .. } => {
                    Err(format!("lesson {slug} has no checklist item {item:?}").into())
                }
                ToggleOutcome::LessonNotFound { page } => emit_page(&page, parsed.json),
            }
        }
        Command::Reset { slug, kind } => {
            let page = app.reader().reset_lesson(track, &slug, kind).await?;
            if !parsed.json && matches!(page, LessonPage::Found(_)) {
                println!("cleared {} checklist for {slug}", kind.as_str());
            }
            emit_page(&page, parsed.json)
        }
        Command::Help | Command::Check => Ok(ExitCode::SUCCESS),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    match run().await {
        Ok(code) => code,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(args.iter().map(|s| (*s).to_string()), EnvDefaults::default())
    }

    #[test]
    fn no_arguments_shows_python_syllabus() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, Command::Syllabus);
        assert_eq!(args.track, Track::Python);
        assert_eq!(args.db_url, DEFAULT_DB_URL);
        assert!(!args.json);
    }

    #[test]
    fn flags_may_follow_the_command() {
        let args = parse(&["toggle", "intro-setup", "why-python", "--track", "pandas", "--json"])
            .unwrap();
        assert_eq!(
            args.command,
            Command::Toggle {
                slug: "intro-setup".into(),
                item: "why-python".into(),
                kind: None,
            }
        );
        assert_eq!(args.track, Track::Pandas);
        assert!(args.json);
    }

    #[test]
    fn reset_defaults_to_progress_checklist() {
        let args = parse(&["reset", "intro-setup"]).unwrap();
        assert_eq!(
            args.command,
            Command::Reset {
                slug: "intro-setup".into(),
                kind: ChecklistKind::Progress
            }
        );
        let args = parse(&["reset", "intro-setup", "--practice"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Reset {
                kind: ChecklistKind::Practice,
                ..
            }
        ));
    }

    #[test]
    fn toggle_can_pin_the_practice_checklist() {
        let args = parse(&["toggle", "intro-setup", "s1-jupyter", "--practice"]).unwrap();
        assert_eq!(
            args.command,
            Command::Toggle {
                slug: "intro-setup".into(),
                item: "s1-jupyter".into(),
                kind: Some(ChecklistKind::Practice),
            }
        );
    }

    #[test]
    fn practice_flag_only_applies_to_reset_and_toggle() {
        assert_eq!(
            parse(&["lesson", "a", "--practice"]).unwrap_err(),
            ArgsError::UnknownArg("--practice".into())
        );
    }

    #[test]
    fn missing_pieces_are_reported() {
        assert_eq!(
            parse(&["lesson"]).unwrap_err(),
            ArgsError::MissingArgument {
                command: "lesson",
                name: "slug"
            }
        );
        assert_eq!(
            parse(&["toggle", "a"]).unwrap_err(),
            ArgsError::MissingArgument {
                command: "toggle",
                name: "item-id"
            }
        );
        assert_eq!(
            parse(&["--db"]).unwrap_err(),
            ArgsError::MissingValue { flag: "--db" }
        );
        assert!(matches!(
            parse(&["--track", "rust"]).unwrap_err(),
            ArgsError::InvalidTrack { .. }
        ));
        assert!(matches!(
            parse(&["frobnicate"]).unwrap_err(),
            ArgsError::UnknownCommand(_)
        ));
        assert!(matches!(
            parse(&["check", "extra"]).unwrap_err(),
            ArgsError::UnknownArg(_)
        ));
    }

    #[test]
    fn environment_is_overridden_by_flags() {
        let env = EnvDefaults {
            db_url: Some("sqlite::memory:".into()),
            track: Some("pandas".into()),
        };
        let args = Args::parse(Vec::<String>::new(), env).unwrap();
        assert_eq!(args.db_url, "sqlite::memory:");
        assert_eq!(args.track, Track::Pandas);

        let env = EnvDefaults {
            db_url: None,
            track: Some("pandas".into()),
        };
        let args = Args::parse(["--track".to_string(), "python".to_string()], env).unwrap();
        assert_eq!(args.track, Track::Python);
    }

    #[test]
    fn invalid_environment_track_is_overridable() {
        let env = || EnvDefaults {
            db_url: None,
            track: Some("rust".into()),
        };
        let args = Args::parse(["--track".to_string(), "pandas".to_string()], env()).unwrap();
        assert_eq!(args.track, Track::Pandas);

        assert_eq!(
            Args::parse(Vec::<String>::new(), env()).unwrap_err(),
            ArgsError::InvalidTrack { raw: "rust".into() }
        );
    }

    #[test]
    fn relative_db_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/course.sqlite3".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/course.sqlite3"));
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }

    #[test]
    fn memory_databases_need_no_file() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("sqlite:file:memdb_app?mode=memory&cache=shared").is_ok());
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
