use crate::utils::{MockWallet, SEPOLIA, board, config};
use msgboard::{MessageBoard, OperationState};
use std::sync::Arc;

#[tokio::test]
async fn accepts_target_network() {
    let (mut board, _wallet) = board(MockWallet::default());

    assert!(board.check_network().await);
    assert_eq!(board.error(), None);
    let network = board.network().unwrap();
    assert!(network.on_target);
    assert_eq!(network.label, "Sepolia Testnet");
}

#[tokio::test]
async fn rejects_every_other_network() {
    for (chain_id, label) in [
        (1, "Ethereum Mainnet"),
        (5, "Unknown Network (0x5)"),
        (137, "Unknown Network (0x89)"),
        (31337, "Unknown Network (0x7a69)"),
    ] {
        let (mut board, _wallet) = board(MockWallet::on_chain(chain_id));

        assert!(!board.check_network().await, "{chain_id}");
        assert_eq!(board.network().unwrap().label, label);
        assert_eq!(
            board.error().unwrap(),
            format!("Wrong network detected: {label}. Please switch to Sepolia Testnet.")
        );
    }
}

#[tokio::test]
async fn check_without_wallet_is_silent() {
    let mut board = MessageBoard::<Arc<MockWallet>>::new(None, config());

    assert!(!board.check_network().await);
    assert_eq!(board.error(), None);
    assert_eq!(board.network(), None);
}

#[tokio::test]
async fn reports_failed_check() {
    let wallet = MockWallet::default();
    wallet.state.lock().fail_chain_id = true;
    let (mut board, _wallet) = board(wallet);

    assert!(!board.check_network().await);
    assert_eq!(board.error(), Some("Failed to check network"));
}

#[tokio::test]
async fn switches_known_network() {
    let (mut board, wallet) = board(MockWallet::on_chain(1));
    assert!(!board.check_network().await);

    assert!(board.switch_network().await);
    assert_eq!(board.error(), None);
    assert_eq!(board.state(), OperationState::Done);
    assert!(board.network().unwrap().on_target);
    assert_eq!(
        wallet.calls(),
        ["eth_chainId", "wallet_switchEthereumChain", "eth_chainId"]
    );

    assert!(board.check_network().await);
}

#[tokio::test]
async fn adds_unknown_network_before_switching() {
    let wallet = MockWallet::on_chain(1);
    wallet.state.lock().known_chains.remove(&SEPOLIA);
    let (mut board, wallet) = board(wallet);

    assert!(board.switch_network().await);
    assert_eq!(
        wallet.calls(),
        [
            "wallet_switchEthereumChain",
            "wallet_addEthereumChain",
            "wallet_switchEthereumChain",
            "eth_chainId",
        ]
    );
    assert!(wallet.state.lock().known_chains.contains(&SEPOLIA));
    assert_eq!(wallet.state.lock().chain_id, SEPOLIA);
}

#[tokio::test]
async fn rejected_switch_sets_error() {
    let wallet = MockWallet::on_chain(1);
    wallet.state.lock().reject_switch = true;
    let (mut board, wallet) = board(wallet);

    assert!(!board.switch_network().await);
    assert_eq!(board.error(), Some("Failed to switch to Sepolia Testnet network"));
    assert_eq!(board.state(), OperationState::Failed);
    assert_eq!(wallet.state.lock().chain_id, 1);
}

#[tokio::test]
async fn rejected_add_sets_error() {
    let wallet = MockWallet::on_chain(1);
    {
        let mut state = wallet.state.lock();
        state.known_chains.remove(&SEPOLIA);
        state.reject_add = true;
    }
    let (mut board, wallet) = board(wallet);

    assert!(!board.switch_network().await);
    assert_eq!(board.error(), Some("Failed to add Sepolia Testnet network to the wallet"));
    assert_eq!(wallet.calls(), ["wallet_switchEthereumChain", "wallet_addEthereumChain"]);
}

#[tokio::test]
async fn switch_without_wallet() {
    let mut board = MessageBoard::<Arc<MockWallet>>::new(None, config());

    assert!(!board.switch_network().await);
    assert_eq!(board.error(), Some("MetaMask not found. Please install MetaMask."));
}

#[tokio::test]
async fn successful_switch_clears_previous_error() {
    let (mut board, _wallet) = board(MockWallet::on_chain(1));
    assert!(!board.handle_get().await);
    assert!(board.error().unwrap().starts_with("Wrong network detected"));

    assert!(board.switch_network().await);
    assert_eq!(board.error(), None);
}
