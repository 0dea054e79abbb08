use crate::commands::{Command, CommandOutput, CommandType};
use crate::error::{BibmanError, Result};
use crate::library::Library;

/// HELP: list every command with its usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCmd;

impl HelpCmd {
    /// HELP takes no argument
    pub fn new(argument: Option<&str>) -> Result<Self> {
        match argument.map(str::trim) {
            None | Some("") => Ok(HelpCmd),
            Some(other) => Err(BibmanError::InvalidArgument(format!(
                "HELP takes no argument, got '{}'",
                other
            ))),
        }
    }

    pub fn validate(argument: Option<&str>) -> Result<bool> {
        match Self::new(argument) {
            Ok(_) => Ok(true),
            Err(BibmanError::InvalidArgument(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Command for HelpCmd {
    fn execute(&self, _library: &mut Library) -> Result<CommandOutput> {
        let width = CommandType::ALL
            .iter()
            .map(|command_type| command_type.usage().len())
            .max()
            .unwrap_or(0);

        let mut lines = vec!["Available commands:".to_string()];
        for command_type in CommandType::ALL {
            lines.push(format!(
                "  {:width$}  {}",
                command_type.usage(),
                command_type.summary()
            ));
        }

        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
