use crate::{BoardError, NetworkStatus, OperationState, Snapshot};
use alloy_primitives::Address;
use msgboard_config::Config;
use msgboard_wallet::WalletProvider;

/// The message board controller.
///
/// Owns the observable state (draft, retrieved message, error text, network label, notice) and
/// runs the user-triggered operations against an injected wallet. Operations never return
/// errors: failures end up in [`error`](Self::error).
///
/// Every operation takes `&mut self`, so a second one cannot start while another is awaiting
/// the wallet.
#[derive(Debug)]
pub struct MessageBoard<P> {
    /// `None` when no wallet is injected.
    pub(crate) provider: Option<P>,
    pub(crate) config: Config,
    pub(crate) draft: String,
    pub(crate) message: Option<String>,
    pub(crate) error: Option<String>,
    pub(crate) network: Option<NetworkStatus>,
    pub(crate) notice: Option<String>,
    pub(crate) account: Option<Address>,
    pub(crate) state: OperationState,
}

impl<P: WalletProvider> MessageBoard<P> {
    pub fn new(provider: Option<P>, config: Config) -> Self {
        Self {
            provider,
            config,
            draft: String::new(),
            message: None,
            error: None,
            network: None,
            notice: None,
            account: None,
            state: OperationState::Idle,
        }
    }

    /// Replaces the draft text, on every input change.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The last successfully retrieved message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The error of the most recent failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn network(&self) -> Option<&NetworkStatus> {
        self.network.as_ref()
    }

    /// Success acknowledgment of the last write.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The account authorized by the last successful account request.
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn state(&self) -> OperationState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// Replaces the injected wallet, e.g. when an extension shows up after start-up.
    ///
    /// The authorized account belongs to the old wallet and is forgotten.
    pub fn set_provider(&mut self, provider: Option<P>) {
        self.provider = provider;
        self.account = None;
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            draft: self.draft.clone(),
            message: self.message.clone(),
            error: self.error.clone(),
            network: self.network.clone(),
            notice: self.notice.clone(),
            account: self.account,
            state: self.state,
            target: self.config.chain.display_name.clone(),
        }
    }

    /// Returns the injected wallet if it is the supported kind.
    pub(crate) fn supported_provider(&self) -> Result<&P, BoardError> {
        match &self.provider {
            None => Err(BoardError::ProviderMissing),
            Some(provider) if !provider.is_metamask() => Err(BoardError::ProviderUnsupported),
            Some(provider) => Ok(provider),
        }
    }

    /// Starts a new operation: clears the previous error and notice.
    pub(crate) fn begin(&mut self, operation: &'static str) {
        debug!(target: "msgboard", operation, "starting");
        self.error = None;
        self.notice = None;
        self.state.enter(OperationState::Validating);
    }

    pub(crate) fn finish(&mut self, operation: &'static str) {
        debug!(target: "msgboard", operation, "done");
        self.error = None;
        self.state.enter(OperationState::Done);
    }

    /// Ends the operation with `err`, replacing any previous error text.
    pub(crate) fn fail(&mut self, operation: &'static str, err: BoardError, fallback: &str) {
        warn!(target: "msgboard", operation, %err, "failed");
        self.error = Some(err.text_or(fallback));
        self.state.enter(OperationState::Failed);
    }

    /// Records `err` without ending an operation, for the sub-steps callable on their own.
    pub(crate) fn report(&mut self, err: &BoardError, fallback: &str) {
        debug!(target: "msgboard", %err, "reporting");
        self.error = Some(err.text_or(fallback));
    }

    /// Checks the provider, the network and the account, in that order.
    ///
    /// Returns the account to act as.
    pub(crate) async fn prepare(&mut self) -> Result<Address, BoardError> {
        self.supported_provider()?;

        self.state.enter(OperationState::CheckingNetwork);
        match self.guard_network().await {
            Ok(()) => {}
            Err(BoardError::NetworkMismatch { network, .. }) if self.config.auto_switch => {
                debug!(target: "msgboard", %network, "wrong network, switching automatically");
                self.state.enter(OperationState::SwitchingNetwork);
                self.switch_to_target().await?;
                self.state.enter(OperationState::CheckingNetwork);
                self.guard_network().await?;
            }
            Err(err) => return Err(err),
        }

        self.state.enter(OperationState::Authorizing);
        self.authorize().await
    }
}
