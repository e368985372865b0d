use crate::contract::ContractError;
use msgboard_wallet::ProviderRpcError;

/// Everything that can fail a message board operation.
///
/// Never returned from the public operations: the controller converts it into the error text
/// shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("MetaMask not found. Please install MetaMask.")]
    ProviderMissing,
    #[error("Please use MetaMask as your wallet provider.")]
    ProviderUnsupported,
    #[error("Wrong network detected: {network}. Please switch to {target}.")]
    NetworkMismatch { network: String, target: String },
    #[error("Failed to check network")]
    NetworkCheck(#[source] ProviderRpcError),
    #[error("Failed to switch to {network} network")]
    SwitchNetwork {
        network: String,
        #[source]
        source: ProviderRpcError,
    },
    #[error("Failed to add {network} network to the wallet")]
    AddNetwork {
        network: String,
        #[source]
        source: ProviderRpcError,
    },
    #[error(transparent)]
    Authorization(ProviderRpcError),
    #[error("No accounts authorized by the wallet")]
    NoAccounts,
    #[error("Please enter a message before setting.")]
    EmptyMessage,
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl BoardError {
    /// The text shown to the user, `fallback` if the error carries no message.
    pub fn text_or(&self, fallback: &str) -> String {
        let text = self.to_string();
        if text.trim().is_empty() { fallback.to_string() } else { text }
    }
}
