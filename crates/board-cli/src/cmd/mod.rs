//! Subcommand implementations.

use crate::{
    opts::{BoardArgs, BoardSubcommand},
    utils,
};
use eyre::Result;
use msgboard::{BoardView, MessageBoard, wallet::WalletProvider};

pub mod interactive;

/// Runs the command in `args`.
///
/// A failed board operation is rendered like any other state and does not make this return an
/// error; only configuration and output failures do.
pub async fn run(args: BoardArgs) -> Result<()> {
    let BoardArgs { opts, cmd } = args;
    let config = opts.load_config()?;
    let provider = utils::wallet_provider(&config)?;
    let mut board = MessageBoard::new(provider, config);
    let output = Output { json: opts.json };

    match cmd {
        BoardSubcommand::Get => {
            board.handle_get().await;
            output.render(&board)
        }
        BoardSubcommand::Set { message } => {
            board.set_draft(message);
            board.handle_set().await;
            output.render(&board)
        }
        BoardSubcommand::Network => {
            board.check_network().await;
            output.banner(&board)
        }
        BoardSubcommand::SwitchNetwork => {
            board.switch_network().await;
            output.banner(&board)
        }
        BoardSubcommand::Interactive => interactive::run(&mut board, output).await,
    }
}

/// How the board state is printed.
#[derive(Clone, Copy, Debug)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn render<P: WalletProvider>(&self, board: &MessageBoard<P>) -> Result<()> {
        self.print(board, false)
    }

    /// Prints the network banner and the error only.
    pub fn banner<P: WalletProvider>(&self, board: &MessageBoard<P>) -> Result<()> {
        self.print(board, true)
    }

    fn print<P: WalletProvider>(&self, board: &MessageBoard<P>, banner_only: bool) -> Result<()> {
        let snapshot = board.snapshot();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(());
        }
        let view = BoardView::new(&snapshot);
        if banner_only {
            print!("{}", view.banner_only());
        } else {
            print!("{view}");
        }
        Ok(())
    }
}
