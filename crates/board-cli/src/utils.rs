use eyre::{Result, WrapErr};
use msgboard_config::Config;
use msgboard_wallet::RpcWalletProvider;
use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber writing to stderr.
///
/// The filter is read from `RUST_LOG`; only errors are logged when it is unset.
pub fn subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Enables colored output when stdout is a terminal that supports it.
pub fn enable_paint() {
    let enable = yansi::Condition::os_support() && yansi::Condition::tty_and_color_live();
    yansi::whenever(yansi::Condition::cached(enable));
}

/// Connects to the wallet endpoint in `config`, if there is one.
pub fn wallet_provider(config: &Config) -> Result<Option<RpcWalletProvider>> {
    let Some(url) = config.wallet_url.as_deref() else {
        debug!("no wallet endpoint configured");
        return Ok(None);
    };
    let provider = RpcWalletProvider::new(url)
        .wrap_err_with(|| format!("invalid wallet URL `{url}`"))?
        .with_metamask(config.is_metamask);
    Ok(Some(provider))
}
