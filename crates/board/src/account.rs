use crate::{BoardError, MessageBoard};
use alloy_primitives::Address;
use msgboard_wallet::WalletProvider;

impl<P: WalletProvider> MessageBoard<P> {
    /// Asks the wallet for account access. The wallet may prompt the user.
    ///
    /// Returns `false` and sets the error text if the wallet is missing or unsupported, the user
    /// declines, or no account is returned.
    pub async fn request_account(&mut self) -> bool {
        match self.authorize().await {
            Ok(_) => true,
            Err(err) => {
                self.report(&err, "Error requesting account access");
                false
            }
        }
    }

    pub(crate) async fn authorize(&mut self) -> Result<Address, BoardError> {
        let provider = self.supported_provider()?;
        let accounts = provider.request_accounts().await.map_err(BoardError::Authorization)?;
        let account = accounts.first().copied().ok_or(BoardError::NoAccounts)?;
        trace!(target: "msgboard::account", %account, "authorized");
        self.account = Some(account);
        Ok(account)
    }
}
