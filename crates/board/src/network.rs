//! Network guard: keeps contract calls on the target chain.

use crate::{BoardError, MessageBoard, OperationState};
use alloy_chains::NamedChain;
use alloy_primitives::ChainId;
use msgboard_config::ChainConfig;
use msgboard_wallet::WalletProvider;
use serde::Serialize;

/// The network the wallet reported on the last check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkStatus {
    pub chain_id: ChainId,
    /// Display label, see [`network_label`].
    pub label: String,
    /// Whether `chain_id` is the target chain.
    pub on_target: bool,
}

impl NetworkStatus {
    pub fn new(chain_id: ChainId, target: &ChainConfig) -> Self {
        Self {
            chain_id,
            label: network_label(chain_id, target),
            on_target: chain_id == target.chain_id,
        }
    }
}

/// Maps a chain id to the label shown in the network banner.
pub fn network_label(chain_id: ChainId, target: &ChainConfig) -> String {
    if chain_id == target.chain_id {
        return target.display_name.clone();
    }
    match NamedChain::try_from(chain_id) {
        Ok(NamedChain::Mainnet) => "Ethereum Mainnet".to_string(),
        Ok(NamedChain::Sepolia) => "Sepolia Testnet".to_string(),
        _ => format!("Unknown Network ({chain_id:#x})"),
    }
}

impl<P: WalletProvider> MessageBoard<P> {
    /// Checks that the wallet is on the target chain and refreshes the network label.
    ///
    /// Returns `false` without touching the error text if no wallet is injected. On any other
    /// failure the error text describes it.
    pub async fn check_network(&mut self) -> bool {
        match self.guard_network().await {
            Ok(()) => true,
            Err(BoardError::ProviderMissing) => false,
            Err(err) => {
                self.report(&err, "Failed to check network");
                false
            }
        }
    }

    /// Asks the wallet to switch to the target chain, adding the chain first if the wallet does
    /// not know it.
    ///
    /// On success the network is checked again and its result returned.
    pub async fn switch_network(&mut self) -> bool {
        const OPERATION: &str = "switch network";
        self.begin(OPERATION);
        self.state.enter(OperationState::SwitchingNetwork);
        let res = async {
            self.switch_to_target().await?;
            self.state.enter(OperationState::CheckingNetwork);
            self.guard_network().await
        }
        .await;
        match res {
            Ok(()) => {
                self.finish(OPERATION);
                true
            }
            Err(err) => {
                self.fail(OPERATION, err, "Failed to switch network");
                false
            }
        }
    }

    pub(crate) async fn guard_network(&mut self) -> Result<(), BoardError> {
        let provider = self.provider.as_ref().ok_or(BoardError::ProviderMissing)?;
        let chain_id = provider.chain_id().await.map_err(BoardError::NetworkCheck)?;
        let status = NetworkStatus::new(chain_id, &self.config.chain);
        trace!(target: "msgboard::network", chain_id, label = %status.label, "wallet network");

        let on_target = status.on_target;
        let network = status.label.clone();
        self.network = Some(status);
        if !on_target {
            return Err(BoardError::NetworkMismatch {
                network,
                target: self.config.chain.display_name.clone(),
            });
        }
        Ok(())
    }

    pub(crate) async fn switch_to_target(&self) -> Result<(), BoardError> {
        let provider = self.provider.as_ref().ok_or(BoardError::ProviderMissing)?;
        let chain = &self.config.chain;
        let network = || chain.display_name.clone();

        match provider.switch_chain(chain.chain_id).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_unrecognized_chain() => {
                debug!(
                    target: "msgboard::network",
                    chain_id = chain.chain_id,
                    "chain unknown to the wallet, adding it"
                );
                provider
                    .add_chain(&chain.into())
                    .await
                    .map_err(|source| BoardError::AddNetwork { network: network(), source })?;
                provider
                    .switch_chain(chain.chain_id)
                    .await
                    .map_err(|source| BoardError::SwitchNetwork { network: network(), source })
            }
            Err(source) => Err(BoardError::SwitchNetwork { network: network(), source }),
        }
    }
}
