mod add;
mod exit;
mod group;
mod help;
mod list;
mod rated;
mod remove;
mod search;

pub use add::AddCmd;
pub use exit::ExitCmd;
pub use group::GroupCmd;
pub use help::HelpCmd;
pub use list::ListCmd;
pub use rated::RatedCmd;
pub use remove::RemoveCmd;
pub use search::SearchCmd;

use crate::error::{BibmanError, Result};
use crate::library::Library;

/// The command keywords the dispatcher understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Add,
    Exit,
    Group,
    Help,
    List,
    Rated,
    Remove,
    Search,
}

impl CommandType {
    pub const ALL: [CommandType; 8] = [
        CommandType::Add,
        CommandType::Exit,
        CommandType::Group,
        CommandType::Help,
        CommandType::List,
        CommandType::Rated,
        CommandType::Remove,
        CommandType::Search,
    ];

    /// Keyword as typed at the prompt
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Add => "ADD",
            CommandType::Exit => "EXIT",
            CommandType::Group => "GROUP",
            CommandType::Help => "HELP",
            CommandType::List => "LIST",
            CommandType::Rated => "RATED",
            CommandType::Remove => "REMOVE",
            CommandType::Search => "SEARCH",
        }
    }

    /// Resolve a keyword, ignoring case
    pub fn from_name(name: &str) -> Option<CommandType> {
        let upper = name.to_uppercase();
        CommandType::ALL
            .iter()
            .copied()
            .find(|command_type| command_type.name() == upper)
    }

    /// One-line usage string shown by HELP and in error reports
    pub fn usage(&self) -> &'static str {
        match self {
            CommandType::Add => "ADD <file.json>",
            CommandType::Exit => "EXIT",
            CommandType::Group => "GROUP <TITLE|AUTHOR>",
            CommandType::Help => "HELP",
            CommandType::List => "LIST [short|long|sorted]",
            CommandType::Rated => "RATED <0.0-5.0>",
            CommandType::Remove => "REMOVE <TITLE|AUTHOR> <value>",
            CommandType::Search => "SEARCH <term>",
        }
    }

    /// Short description shown by HELP
    pub fn summary(&self) -> &'static str {
        match self {
            CommandType::Add => "load book entries from a JSON file",
            CommandType::Exit => "leave the program",
            CommandType::Group => "group catalogue data by a book field",
            CommandType::Help => "show this command overview",
            CommandType::List => "list the catalogue",
            CommandType::Rated => "list books rated at or above a threshold",
            CommandType::Remove => "remove entries by exact title or author",
            CommandType::Search => "search titles for a term",
        }
    }
}

/// Output produced by one command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Complete output, lines joined with '\n'
    Text(String),
    /// Nothing to print
    None,
    /// Signal the read loop to stop
    Quit,
}

/// A fully constructed, validated command
///
/// Construction parses and validates the argument; `execute` never re-parses.
/// Commands hold no mutable state, so re-executing against an unchanged
/// library yields identical output.
pub trait Command {
    fn execute(&self, library: &mut Library) -> Result<CommandOutput>;
}

/// Construct the concrete command for a keyword and its argument
/// Fails without side effects when the argument is missing or invalid
pub fn build(command_type: CommandType, argument: Option<&str>) -> Result<Box<dyn Command>> {
    let command: Box<dyn Command> = match command_type {
        CommandType::Add => Box::new(AddCmd::new(argument)?),
        CommandType::Exit => Box::new(ExitCmd::new(argument)?),
        CommandType::Group => Box::new(GroupCmd::new(argument)?),
        CommandType::Help => Box::new(HelpCmd::new(argument)?),
        CommandType::List => Box::new(ListCmd::new(argument)?),
        CommandType::Rated => Box::new(RatedCmd::new(argument)?),
        CommandType::Remove => Box::new(RemoveCmd::new(argument)?),
        CommandType::Search => Box::new(SearchCmd::new(argument)?),
    };
    Ok(command)
}

/// Check a keyword's argument without constructing the command
pub fn validate(command_type: CommandType, argument: Option<&str>) -> Result<bool> {
    match command_type {
        CommandType::Add => AddCmd::validate(argument),
        CommandType::Exit => ExitCmd::validate(argument),
        CommandType::Group => GroupCmd::validate(argument),
        CommandType::Help => HelpCmd::validate(argument),
        CommandType::List => ListCmd::validate(argument),
        CommandType::Rated => RatedCmd::validate(argument),
        CommandType::Remove => RemoveCmd::validate(argument),
        CommandType::Search => SearchCmd::validate(argument),
    }
}

/// Split an input line into its keyword and optional argument
/// The keyword is the first whitespace-delimited token; the argument is the
/// remainder with leading whitespace removed
fn split_line(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, Some(rest.trim_start())),
        None => (line, None),
    }
}

/// Parse one input line and run the command it names
/// Empty lines produce no output; a command that fails construction never runs
pub fn dispatch(line: &str, library: &mut Library) -> Result<CommandOutput> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(CommandOutput::None);
    }

    let (keyword, argument) = split_line(line);
    let command_type = CommandType::from_name(keyword)
        .ok_or_else(|| BibmanError::UnknownCommand(keyword.to_string()))?;
    log::debug!("dispatching {} command", command_type.name());

    let command = build(command_type, argument)?;
    command.execute(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookEntry;

    fn sample_library() -> Library {
        Library::from_entries(vec![
            BookEntry::new("Dune", &["Frank Herbert"], 4.6, 1965, "English"),
            BookEntry::new("1984", &["George Orwell"], 4.5, 1949, "English"),
        ])
    }

    #[test]
    fn test_every_keyword_resolves_to_its_type() {
        for command_type in CommandType::ALL {
            assert_eq!(CommandType::from_name(command_type.name()), Some(command_type));
        }
    }

    #[test]
    fn test_keyword_lookup_ignores_case() {
        assert_eq!(CommandType::from_name("group"), Some(CommandType::Group));
        assert_eq!(CommandType::from_name("Search"), Some(CommandType::Search));
        assert_eq!(CommandType::from_name("frobnicate"), None);
    }

    #[test]
    fn test_usage_and_summary_exist_for_every_command() {
        for command_type in CommandType::ALL {
            assert!(command_type.usage().starts_with(command_type.name()));
            assert!(!command_type.summary().is_empty());
        }
    }

    #[test]
    fn test_split_line_keyword_only() {
        assert_eq!(split_line("GROUP"), ("GROUP", None));
    }

    #[test]
    fn test_split_line_trims_between_keyword_and_argument() {
        assert_eq!(split_line("GROUP   TITLE"), ("GROUP", Some("TITLE")));
    }

    #[test]
    fn test_split_line_keeps_interior_argument_whitespace() {
        assert_eq!(
            split_line("REMOVE AUTHOR Frank Herbert"),
            ("REMOVE", Some("AUTHOR Frank Herbert"))
        );
    }

    #[test]
    fn test_dispatch_empty_line_prints_nothing() {
        let mut library = sample_library();
        assert_eq!(dispatch("", &mut library).unwrap(), CommandOutput::None);
        assert_eq!(dispatch("   ", &mut library).unwrap(), CommandOutput::None);
    }

    #[test]
    fn test_dispatch_unknown_keyword_names_it() {
        let mut library = sample_library();
        match dispatch("FROBNICATE now", &mut library) {
            Err(BibmanError::UnknownCommand(keyword)) => assert_eq!(keyword, "FROBNICATE"),
            other => panic!("expected UnknownCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_runs_group_title_end_to_end() {
        let mut library = sample_library();
        let output = dispatch("GROUP TITLE", &mut library).unwrap();
        assert_eq!(
            output,
            CommandOutput::Text("Grouped data by TITLE\n## D\nDune\n## [0-9]\n1984".to_string())
        );
    }

    #[test]
    fn test_dispatch_keyword_case_does_not_affect_argument_rules() {
        let mut library = sample_library();
        assert!(dispatch("group TITLE", &mut library).is_ok());
        assert!(matches!(
            dispatch("group title", &mut library),
            Err(BibmanError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_dispatch_bare_keyword_reports_missing_argument() {
        let mut library = sample_library();
        assert!(matches!(
            dispatch("GROUP", &mut library),
            Err(BibmanError::MissingArgument)
        ));
    }

    #[test]
    fn test_dispatch_failed_construction_leaves_library_untouched() {
        let mut library = sample_library();
        assert!(dispatch("REMOVE TITLE", &mut library).is_err());
        assert_eq!(library.book_data().unwrap().len(), 2);
    }

    #[test]
    fn test_dispatch_exit_signals_quit() {
        let mut library = sample_library();
        assert_eq!(dispatch("EXIT", &mut library).unwrap(), CommandOutput::Quit);
    }

    #[test]
    fn test_validate_agrees_with_build() {
        let cases: [(CommandType, Option<&str>); 4] = [
            (CommandType::Group, Some("TITLE")),
            (CommandType::Group, Some("title")),
            (CommandType::Search, Some("two words")),
            (CommandType::List, None),
        ];
        for (command_type, argument) in cases {
            let buildable = build(command_type, argument).is_ok();
            let valid = validate(command_type, argument).unwrap();
            assert_eq!(buildable, valid, "{:?} {:?}", command_type, argument);
        }
    }
}
