use crate::profile::OwnerProfile;

pub const PROMPT: &str = "root@mahad:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Help,
    Bio,
    Skills,
    Contact,
    Clear,
    Unknown(String),
}

impl TerminalCommand {
    /// Commands are matched exactly after trimming and lowercasing.
    pub fn parse(line: &str) -> Self {
        let cmd = line.trim().to_lowercase();
        match cmd.as_str() {
            "help" => TerminalCommand::Help,
            "bio" => TerminalCommand::Bio,
            "skills" => TerminalCommand::Skills,
            "contact" => TerminalCommand::Contact,
            "clear" => TerminalCommand::Clear,
            _ => TerminalCommand::Unknown(cmd),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutput {
    Text(String),
    Clear,
}

/// Scripted terminal with its own transcript.
pub struct Terminal {
    profile: OwnerProfile,
    transcript: Vec<String>,
}

impl Terminal {
    pub fn new(profile: OwnerProfile) -> Self {
        Self {
            profile,
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn execute(&mut self, line: &str) -> TerminalOutput {
        let command = TerminalCommand::parse(line);
        let echo = format!("{}~ {}", PROMPT, line.trim().to_lowercase());
        log::debug!("💻 Terminal command: {:?}", command);

        let text = match command {
            TerminalCommand::Help => "Available commands: bio, skills, contact, clear".to_string(),
            TerminalCommand::Bio => format!("{}: {}", self.profile.full_name, self.profile.bio),
            TerminalCommand::Skills => format!("{}.", self.profile.skills.join(", ")),
            TerminalCommand::Contact => format!(
                "Email: {} | WA: {}",
                self.profile.email, self.profile.whatsapp
            ),
            TerminalCommand::Clear => {
                self.transcript.clear();
                return TerminalOutput::Clear;
            }
            TerminalCommand::Unknown(cmd) => format!("Command not found: {}", cmd),
        };

        self.transcript.push(echo);
        self.transcript.push(text.clone());
        TerminalOutput::Text(text)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(OwnerProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(TerminalCommand::parse("  HELP "), TerminalCommand::Help);
        assert_eq!(TerminalCommand::parse("Skills"), TerminalCommand::Skills);
        assert_eq!(
            TerminalCommand::parse("sudo rm"),
            TerminalCommand::Unknown("sudo rm".to_string())
        );
    }

    #[test]
    fn test_builtin_responses() {
        let mut terminal = Terminal::default();
        assert_eq!(
            terminal.execute("help"),
            TerminalOutput::Text("Available commands: bio, skills, contact, clear".to_string())
        );
        assert_eq!(
            terminal.execute("bio"),
            TerminalOutput::Text(
                "Mahad Khan: A digital architect building next-gen solutions.".to_string()
            )
        );
        assert_eq!(
            terminal.execute("skills"),
            TerminalOutput::Text("React, Node.js, Tailwind, SEO, Growth Hacking.".to_string())
        );
        assert_eq!(
            terminal.execute("contact"),
            TerminalOutput::Text("Email: khanmahad768@gmail.com | WA: +923142253977".to_string())
        );
    }

    #[test]
    fn test_unknown_command_and_transcript() {
        let mut terminal = Terminal::default();
        assert_eq!(
            terminal.execute("LS"),
            TerminalOutput::Text("Command not found: ls".to_string())
        );
        assert_eq!(
            terminal.transcript(),
            &["root@mahad:~ ls".to_string(), "Command not found: ls".to_string()]
        );
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut terminal = Terminal::default();
        terminal.execute("help");
        assert_eq!(terminal.transcript().len(), 2);
        assert_eq!(terminal.execute("clear"), TerminalOutput::Clear);
        assert!(terminal.transcript().is_empty());
    }
}
