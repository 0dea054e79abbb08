use crate::report;
use bibman_core::{dispatch, CommandOutput, Library};
use colored::Colorize;
use std::io::{self, BufRead, Write};

enum LineResult {
    Continue,
    Quit,
    Failed,
}

fn run_line(line: &str, library: &mut Library) -> LineResult {
    match dispatch(line, library) {
        Ok(CommandOutput::Text(text)) => {
            println!("{}", text);
            LineResult::Continue
        }
        Ok(CommandOutput::None) => LineResult::Continue,
        Ok(CommandOutput::Quit) => LineResult::Quit,
        Err(error) => {
            report::print_error(&error, line);
            LineResult::Failed
        }
    }
}

/// Run the interactive prompt until EXIT or end of input
pub fn run(library: &mut Library) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("{} ", "bibman>".cyan().bold());
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        if let LineResult::Quit = run_line(input.trim(), library) {
            break;
        }
    }

    Ok(())
}

/// Execute command lines in order, stopping early at EXIT
/// Returns false if any line failed
pub fn run_script(lines: &[String], library: &mut Library) -> bool {
    let mut ok = true;
    for line in lines {
        match run_line(line, library) {
            LineResult::Quit => break,
            LineResult::Failed => ok = false,
            LineResult::Continue => {}
        }
    }
    ok
}
