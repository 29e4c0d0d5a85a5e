use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use portfolio_assistant::profile::OwnerProfile;
use portfolio_assistant::terminal::{Terminal, TerminalOutput, PROMPT};
use portfolio_assistant::{logger, Config, PortfolioAgent};

fn main() -> Result<()> {
    logger::init();
    log::info!("🚀 Portfolio assistant started");

    let mode = std::env::args().nth(1).unwrap_or_else(|| "chat".to_string());
    match mode.as_str() {
        "chat" => run_chat(),
        "terminal" => run_terminal(),
        "vcard" => {
            println!("{}", OwnerProfile::default().to_vcard());
            Ok(())
        }
        other => bail!("unknown mode '{}', expected chat, terminal or vcard", other),
    }
}

fn run_chat() -> Result<()> {
    // Runtime for the async completion client
    let rt = tokio::runtime::Runtime::new()?;

    let config = Config::default();
    log::info!("📁 Configuration loaded");
    let mut agent = PortfolioAgent::new(config);
    println!("{} is online. Type a message, Ctrl-D to quit.", agent.assistant_name());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(answer) = rt.block_on(agent.get_response(&line)) {
            writeln!(stdout, "[{}] {}", agent.current_source().as_str(), answer)?;
            stdout.flush()?;
        }
    }

    log::info!("👋 Chat session closed");
    Ok(())
}

fn run_terminal() -> Result<()> {
    let mut terminal = Terminal::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}~ ", PROMPT)?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        match terminal.execute(&line?) {
            TerminalOutput::Text(text) => writeln!(stdout, "{}", text)?,
            // ANSI clear screen
            TerminalOutput::Clear => write!(stdout, "\x1B[2J\x1B[H")?,
        }
        write!(stdout, "{}~ ", PROMPT)?;
        stdout.flush()?;
    }

    Ok(())
}
