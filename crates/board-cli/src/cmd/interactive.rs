//! The `interactive` session.

use super::Output;
use dialoguer::Input;
use eyre::{Result, WrapErr};
use msgboard::{MessageBoard, wallet::WalletProvider};
use std::{
    io::{self, BufRead, IsTerminal},
    str::FromStr,
};

/// A line typed at the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Any text not starting with `:` replaces the draft.
    Draft(String),
    Get,
    Set,
    Network,
    Switch,
    Quit,
    Help,
}

impl FromStr for Line {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(cmd) = s.strip_prefix(':') else { return Ok(Self::Draft(s.to_string())) };
        match cmd.trim() {
            "get" | "g" => Ok(Self::Get),
            "set" | "s" => Ok(Self::Set),
            "network" | "n" => Ok(Self::Network),
            "switch" => Ok(Self::Switch),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "help" | "h" => Ok(Self::Help),
            other => Err(format!("unknown command `:{other}`, type `:help` for a list")),
        }
    }
}

const HELP: &str = "\
Type a message to use it as the draft, then `:set` to store it.

  :get      read the stored message
  :set      store the draft
  :network  check the wallet network
  :switch   switch the wallet to the target network
  :quit     leave";

/// Runs the prompt loop until `:quit` or end of input.
pub async fn run<P: WalletProvider>(board: &mut MessageBoard<P>, output: Output) -> Result<()> {
    board.check_network().await;
    output.banner(board)?;
    println!("{HELP}");

    loop {
        let Some(input) = prompt().await? else { break };
        let line = match input.parse::<Line>() {
            Ok(line) => line,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        trace!(?line, "interactive input");

        match line {
            Line::Draft(text) => {
                board.set_draft(text);
                continue;
            }
            Line::Get => {
                board.handle_get().await;
            }
            Line::Set => {
                board.handle_set().await;
            }
            Line::Network => {
                board.check_network().await;
                output.banner(board)?;
                continue;
            }
            Line::Switch => {
                board.switch_network().await;
                output.banner(board)?;
                continue;
            }
            Line::Help => {
                println!("{HELP}");
                continue;
            }
            Line::Quit => break,
        }
        output.render(board)?;
    }
    Ok(())
}

/// Reads one line on the blocking pool. `None` once input is closed.
///
/// Piped input is read line by line without a prompt.
async fn prompt() -> Result<Option<String>> {
    let read = tokio::task::spawn_blocking(|| {
        if !io::stdin().is_terminal() {
            return next_line(&mut io::stdin().lock());
        }
        match Input::<String>::new().with_prompt("msgboard").allow_empty(true).interact_text() {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(err) => Err(io::Error::other(err)),
        }
    })
    .await
    .wrap_err("prompt task failed")?;
    read.wrap_err("failed to read input")
}

/// Reads a line without its terminator, `None` at end of input.
fn next_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}
