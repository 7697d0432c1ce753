//! Interactive menu loop
//!
//! A thin text front end over [`ElectionRegistry`]. The shell does all the
//! prompting and parsing; the registry only ever sees plain identifiers and a
//! [`LogStructure`]. Reader and writer are generic so the loop can be driven
//! from a script or a test as easily as from a terminal.

use std::io::{BufRead, Write};

use crate::config::{ResultsFormat, ShellConfig};
use crate::registry::ElectionRegistry;
use crate::types::{LogStructure, Registration};
use crate::{Result, VERSION};

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterVoter,
    RegisterCandidate,
    CastVote,
    DisplayResults,
    Exit,
    ShowBallotLogs,
}

impl MenuChoice {
    const ENTRIES: [(&'static str, MenuChoice); 6] = [
        ("1", Self::RegisterVoter),
        ("2", Self::RegisterCandidate),
        ("3", Self::CastVote),
        ("4", Self::DisplayResults),
        ("5", Self::Exit),
        ("6", Self::ShowBallotLogs),
    ];

    /// Map a trimmed input line onto a menu entry
    pub fn from_input(input: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(key, _)| *key == input)
            .map(|(_, choice)| *choice)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RegisterVoter => "Register Voter",
            Self::RegisterCandidate => "Register Candidate",
            Self::CastVote => "Cast Vote",
            Self::DisplayResults => "Display Results",
            Self::Exit => "Exit",
            Self::ShowBallotLogs => "Show Ballot Logs",
        }
    }
}

/// Whether the loop should keep going after handling a choice
enum Flow {
    Continue,
    Exit,
}

/// Menu loop bound to one registry
pub struct Shell<'a, R, W> {
    registry: &'a mut ElectionRegistry,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(registry: &'a mut ElectionRegistry, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            registry,
            input,
            output,
            config,
        }
    }

    /// Run until the user exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            writeln!(self.output, "Election simulator v{VERSION}")?;
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::from_input(&line) {
                Some(choice) => self.handle(choice)?,
                None => {
                    writeln!(self.output, "Invalid option selected. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Exiting the voting system. Goodbye!")?;
        self.output.flush()?;
        tracing::debug!("shell exited");
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::RegisterVoter => self.register_voter(),
            MenuChoice::RegisterCandidate => self.register_candidate(),
            MenuChoice::CastVote => self.cast_vote(),
            MenuChoice::DisplayResults => self.display_results().map(|_| Flow::Continue),
            MenuChoice::ShowBallotLogs => self.show_ballot_logs().map(|_| Flow::Continue),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nSelect an option:")?;
        for (key, choice) in MenuChoice::ENTRIES {
            writeln!(self.output, "{key}. {}", choice.label())?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn register_voter(&mut self) -> Result<Flow> {
        let Some(voter_id) = self.prompt("Enter voter ID to register: ")? else {
            return Ok(Flow::Exit);
        };

        match self.registry.register_voter(&voter_id) {
            Registration::Registered => writeln!(self.output, "Registered voter '{voter_id}'.")?,
            Registration::AlreadyRegistered => {
                writeln!(self.output, "Voter '{voter_id}' is already registered.")?
            }
        }
        Ok(Flow::Continue)
    }

    fn register_candidate(&mut self) -> Result<Flow> {
        let Some(candidate_id) = self.prompt("Enter candidate ID to register: ")? else {
            return Ok(Flow::Exit);
        };

        match self.registry.register_candidate(&candidate_id) {
            Registration::Registered => {
                writeln!(self.output, "Registered candidate '{candidate_id}'.")?
            }
            Registration::AlreadyRegistered => {
                writeln!(self.output, "Candidate '{candidate_id}' is already registered.")?
            }
        }
        Ok(Flow::Continue)
    }

    fn cast_vote(&mut self) -> Result<Flow> {
        let Some(voter_id) = self.prompt("Enter your voter ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(candidate_id) = self.prompt("Enter candidate ID to vote for: ")? else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "\nChoose the data structure to cast your vote:")?;
        for structure in LogStructure::ALL {
            writeln!(self.output, "   {}. {}", structure.menu_number(), structure)?;
        }
        let Some(selection) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let structure = match selection.parse::<LogStructure>() {
            Ok(structure) => structure,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        match self.registry.cast_vote(&voter_id, &candidate_id, structure) {
            Ok(receipt) => writeln!(self.output, "{receipt}")?,
            Err(err) if err.is_vote_rejection() => writeln!(self.output, "{err}")?,
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    fn display_results(&mut self) -> Result<()> {
        match self.config.results_format {
            ResultsFormat::Text => {
                writeln!(self.output, "\nVoting Results:")?;
                for result in self.registry.results() {
                    writeln!(self.output, "{result}")?;
                }
                writeln!(self.output)?;
            }
            ResultsFormat::Json => {
                let summary = serde_json::to_string_pretty(&self.registry.summary())?;
                writeln!(self.output, "{summary}")?;
            }
        }
        Ok(())
    }

    fn show_ballot_logs(&mut self) -> Result<()> {
        writeln!(self.output, "\nBallot Logs:")?;
        for log in self.registry.logs().iter() {
            writeln!(self.output, "{} ({} ballots):", log.structure(), log.len())?;
            if log.is_empty() {
                writeln!(self.output, "   (empty)")?;
            }
            for (position, ballot) in log.iter().enumerate() {
                writeln!(self.output, "   {}. {}", position + 1, ballot)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Cursor;

    fn run_script(registry: &mut ElectionRegistry, script: &str) -> String {
        let mut output = Vec::new();
        let config = Config::for_testing().shell;
        Shell::new(registry, Cursor::new(script.as_bytes()), &mut output, config)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::RegisterVoter));
        assert_eq!(MenuChoice::from_input("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("6"), Some(MenuChoice::ShowBallotLogs));
        assert_eq!(MenuChoice::from_input("7"), None);
        assert_eq!(MenuChoice::from_input(""), None);
    }

    #[test]
    fn test_exit_immediately() {
        let mut registry = ElectionRegistry::new();
        let output = run_script(&mut registry, "5\n");
        assert!(output.contains("1. Register Voter"));
        assert!(output.ends_with("Exiting the voting system. Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut registry = ElectionRegistry::new();
        let output = run_script(&mut registry, "1\n");
        assert!(output.ends_with("Exiting the voting system. Goodbye!\n"));
        assert!(registry.voters().is_empty());
    }

    #[test]
    fn test_invalid_structure_casts_nothing() {
        let mut registry = ElectionRegistry::new();
        let output = run_script(&mut registry, "1\nA\n2\nX\n3\nA\nX\n9\n5\n");
        assert!(output.contains("Invalid data structure option. Vote not cast."));
        assert!(!registry.has_voted("A"));
    }

    #[test]
    fn test_invalid_menu_option() {
        let mut registry = ElectionRegistry::new();
        let output = run_script(&mut registry, "hello\n5\n");
        assert!(output.contains("Invalid option selected. Please try again."));
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let mut registry = ElectionRegistry::new();
        let output = run_script(&mut registry, " 1 \n  A  \n5\n");
        assert!(output.contains("Registered voter 'A'."));
        assert!(registry.is_voter_registered("A"));
    }
}
