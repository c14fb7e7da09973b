//! Line-oriented shell over the search service.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;
use tracing::info;

use crate::schema::entity::EntityKind;
use crate::search::service::SearchService;
use crate::shell::{format, validate};

pub const ERROR_LOADING_JSON_FILES: &str = "JSON files could not be loaded.";
pub const DATABASE_READY: &str = "Database ready.";
pub const INVALID_ENTITY: &str = "Invalid entity. Choose organization, ticket or user.";
pub const INVALID_FIELD: &str =
    "Invalid field. Use `fields <entity>` to list all available fields for an entity.";
pub const NOT_READY: &str = "The database has not been loaded. Run `load-database` first.";

const HELP: &str = "Available commands:
  load-database [dir]              load the json files and build the inverted indexes
  search <entity> <field> [value]  search for organizations, tickets or users
  fields <entity>                  list the searchable fields of an entity
  help                             show this message
  exit                             leave the shell";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

/// Interactive shell. Holds the availability flag gating `search` and
/// `fields` until a load has completed, which the service itself does not
/// enforce.
pub struct Repl {
    service: SearchService,
    default_data_dir: Option<PathBuf>,
    database_ready: bool,
    editor: DefaultEditor,
}

impl Repl {
    pub fn new(default_data_dir: Option<PathBuf>) -> Result<Self, ShellError> {
        Ok(Repl {
            service: SearchService::new(),
            default_data_dir,
            database_ready: false,
            editor: DefaultEditor::new()?,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        println!("searchdesk v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for available commands.\n");

        loop {
            match self.editor.readline("searchdesk> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);
                    match self.dispatch(line) {
                        Some(response) => println!("{response}"),
                        None => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Use `exit` or Ctrl-D to leave.");
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Execute one command line; `None` means the shell should exit.
    fn dispatch(&mut self, line: &str) -> Option<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "load-database" => Some(self.load_database(tokens.get(1).copied())),
            "search" => Some(self.search(&tokens[1..])),
            "fields" => Some(self.fields(&tokens[1..])),
            "help" => Some(HELP.to_string()),
            "exit" | "quit" => None,
            other => Some(format::format_error(&format!(
                "Unknown command '{other}'. Type `help` for available commands."
            ))),
        }
    }

    fn load_database(&mut self, directory: Option<&str>) -> String {
        info!("Loading JSON files and creating inverted index...");
        self.database_ready = false;

        let directory: Option<PathBuf> = directory
            .map(PathBuf::from)
            .or_else(|| self.default_data_dir.clone());

        if let Err(err) = self.service.load_database(directory.as_deref()) {
            info!("Error while loading files. Reason: {}", err);
            return format::format_error(ERROR_LOADING_JSON_FILES);
        }
        self.database_ready = true;
        info!("Files loaded successfully.");

        format::format_ready(DATABASE_READY)
    }

    fn search(&self, args: &[&str]) -> String {
        if !self.database_ready {
            return format::format_error(NOT_READY);
        }

        let entity = args.first().copied().unwrap_or("");
        let field = args.get(1).copied().unwrap_or("");
        let value = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();

        info!("Validating inputs...");
        if !validate::is_entity_valid(entity) {
            return format::format_error(INVALID_ENTITY);
        }
        if !validate::is_field_valid(entity, field) {
            return format::format_error(INVALID_FIELD);
        }

        info!("Performing search...");
        let mut response = match EntityKind::parse(entity) {
            Some(kind) => match self.service.search(kind, field.trim(), &value) {
                Ok(results) => format::format_results(&results),
                Err(_) => format::format_error(INVALID_FIELD),
            },
            None => format::format_error(INVALID_ENTITY),
        };
        response.push_str(&format::format_info(&format!(
            "\nSearch command: 'search {entity} {field} {value}'"
        )));

        info!("Search completed.");
        response
    }

    fn fields(&self, args: &[&str]) -> String {
        if !self.database_ready {
            return format::format_error(NOT_READY);
        }

        info!("Validating inputs...");
        let entity = args.first().copied().unwrap_or("");
        match EntityKind::parse(entity) {
            Some(kind) => format::format_fields(self.service.list_fields(kind)),
            None => format::format_error(INVALID_ENTITY),
        }
    }
}
