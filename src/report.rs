use bibman_core::{BibmanError, CommandType};
use colored::Colorize;

/// Print a command error to the console
/// Argument failures get the offending command's usage line appended
pub fn print_error(error: &BibmanError, line: &str) {
    eprintln!("{} {}", "error:".red().bold(), error);

    match error {
        BibmanError::MissingArgument | BibmanError::InvalidArgument(_) => {
            let keyword = line.split_whitespace().next().unwrap_or_default();
            if let Some(command_type) = CommandType::from_name(keyword) {
                eprintln!("usage: {}", command_type.usage());
            }
        }
        BibmanError::NoBookData => {
            eprintln!("load a catalogue first, e.g. {}", CommandType::Add.usage());
        }
        BibmanError::InvalidBookFile(problems) => {
            for problem in problems {
                eprintln!("  {}", problem);
            }
        }
        BibmanError::UnknownCommand(_) => {
            eprintln!("type HELP for the command overview");
        }
        _ => {}
    }
}
