use clap::Parser;
use eyre::Result;
use msgboard_cli::{cmd, handler, opts::BoardArgs, utils};

fn main() -> Result<()> {
    handler::install();
    utils::subscriber();
    utils::enable_paint();
    let args = BoardArgs::parse();
    main_args(args)
}

#[tokio::main(flavor = "current_thread")]
async fn main_args(args: BoardArgs) -> Result<()> {
    cmd::run(args).await
}
