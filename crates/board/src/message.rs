//! Reading and writing the message.

use crate::{BoardError, MessageBoard, MessageBoardContract, OperationState};
use msgboard_wallet::{Receipt, WalletProvider};

impl<P: WalletProvider> MessageBoard<P> {
    /// Fetches the current message from the contract.
    ///
    /// On success the retrieved message is replaced and the error text cleared. On failure the
    /// retrieved message is left as it was.
    pub async fn handle_get(&mut self) -> bool {
        const OPERATION: &str = "get message";
        self.begin(OPERATION);
        match self.get_message().await {
            Ok(message) => {
                self.message = Some(message);
                self.finish(OPERATION);
                true
            }
            Err(err) => {
                self.fail(OPERATION, err, "Error retrieving message");
                false
            }
        }
    }

    /// Writes the draft to the contract and waits for the transaction to be mined.
    ///
    /// An empty draft fails before the wallet is contacted. On success the draft is cleared and
    /// a notice set; on failure the draft is kept so the user can retry.
    pub async fn handle_set(&mut self) -> bool {
        const OPERATION: &str = "set message";
        self.begin(OPERATION);
        match self.set_message().await {
            Ok(receipt) => {
                debug!(target: "msgboard", hash = %receipt.transaction_hash, "message set");
                self.draft.clear();
                let network = &self.config.chain.display_name;
                self.notice = Some(format!("Message set successfully on {network}!"));
                self.finish(OPERATION);
                true
            }
            Err(err) => {
                self.fail(OPERATION, err, "Error setting message");
                false
            }
        }
    }

    async fn get_message(&mut self) -> Result<String, BoardError> {
        self.prepare().await?;

        self.state.enter(OperationState::CallingContract);
        let provider = self.provider.as_ref().ok_or(BoardError::ProviderMissing)?;
        let contract = MessageBoardContract::new(self.config.contract, provider);
        Ok(contract.get_message().await?)
    }

    async fn set_message(&mut self) -> Result<Receipt, BoardError> {
        if self.draft.is_empty() {
            return Err(BoardError::EmptyMessage);
        }
        let from = self.prepare().await?;

        self.state.enter(OperationState::CallingContract);
        let provider = self.provider.as_ref().ok_or(BoardError::ProviderMissing)?;
        let contract = MessageBoardContract::new(self.config.contract, provider);
        let pending = contract
            .set_message(from, self.draft.clone())
            .await?
            .with_poll_interval(self.config.poll_interval());

        self.state.enter(OperationState::Confirming);
        Ok(pending.wait().await?)
    }
}
