use clap::Parser;
use msgboard_cli::{cmd, opts::BoardArgs};
use msgboard_config::figment::Jail;

fn run(args: &[&str]) -> eyre::Result<()> {
    let args = BoardArgs::try_parse_from(args)?;
    tokio::runtime::Builder::new_current_thread().enable_all().build()?.block_on(cmd::run(args))
}

#[test]
fn failed_operations_still_succeed() {
    Jail::expect_with(|_| {
        // no wallet configured: every operation fails inside the board
        for args in [
            &["msgboard", "get"][..],
            &["msgboard", "set", "gm", "--json"],
            &["msgboard", "set", ""],
            &["msgboard", "network"],
            &["msgboard", "switch-network", "--json"],
        ] {
            run(args).map_err(|e| format!("{args:?}: {e}"))?;
        }
        Ok(())
    });
}

#[test]
fn config_errors_fail_the_command() {
    Jail::expect_with(|jail| {
        jail.create_file("msgboard.toml", "poll_interval_ms = \"soon\"")?;
        let err = run(&["msgboard", "get"]).unwrap_err().to_string();
        assert!(err.contains("poll_interval_ms"), "{err}");

        let err = run(&["msgboard", "get", "--config", "nope.toml"]).unwrap_err().to_string();
        assert!(err.contains("nope.toml"), "{err}");
        Ok(())
    });
}

#[test]
fn invalid_wallet_url_fails_the_command() {
    Jail::expect_with(|_| {
        let err = run(&["msgboard", "get", "--wallet-url", "not a url"]).unwrap_err();
        assert!(err.to_string().contains("invalid wallet URL"), "{err}");
        Ok(())
    });
}
