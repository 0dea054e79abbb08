use crate::commands::{Command, CommandOutput};
use crate::error::{BibmanError, Result};
use crate::library::Library;

/// EXIT: stop the command loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCmd;

impl ExitCmd {
    /// EXIT takes no argument
    pub fn new(argument: Option<&str>) -> Result<Self> {
        match argument.map(str::trim) {
            None | Some("") => Ok(ExitCmd),
            Some(other) => Err(BibmanError::InvalidArgument(format!(
                "EXIT takes no argument, got '{}'",
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

impl Command for ExitCmd {
    fn execute(&self, _library: &mut Library) -> Result<CommandOutput> {
        Ok(CommandOutput::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_takes_no_argument() {
        assert_eq!(ExitCmd::validate(None).unwrap(), true);
        assert_eq!(ExitCmd::validate(Some("now")).unwrap(), false);
    }

    #[test]
    fn test_exit_signals_quit() {
        let mut library = Library::new();
        let output = ExitCmd::new(None).unwrap().execute(&mut library).unwrap();
        assert_eq!(output, CommandOutput::Quit);
    }
}
