//! EIP-1193 provider errors.
//!
//! See <https://eips.ethereum.org/EIPS/eip-1193#provider-errors> and
//! <https://github.com/MetaMask/rpc-errors/blob/main/src/error-constants.ts>.

use alloy_transport::TransportError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An error returned by a wallet provider request.
///
/// Displays as the bare message, which is what ends up in front of the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ProviderRpcError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ProviderRpcError {
    /// New [`ProviderRpcError`] with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    /// Attaches additional error data.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The user rejected the request.
    pub fn user_rejected() -> Self {
        Self::new(ErrorCode::UserRejectedRequest, ErrorCode::UserRejectedRequest.message())
    }

    /// The wallet does not know the requested chain.
    pub fn unrecognized_chain(chain_id: u64) -> Self {
        Self::new(
            ErrorCode::UnrecognizedChain,
            format!(
                "Unrecognized chain ID {chain_id:#x}. \
                 Try adding the chain using wallet_addEthereumChain first."
            ),
        )
    }

    /// The method is not implemented by the provider.
    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            ErrorCode::MethodNotFound,
            format!("the method {method} does not exist/is not available"),
        )
    }

    /// Returns `true` if this is the "unrecognized chain" error wallets answer
    /// `wallet_switchEthereumChain` with.
    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == ErrorCode::UnrecognizedChain
    }

    /// Returns `true` if the provider does not implement the requested method.
    pub fn is_unsupported_method(&self) -> bool {
        matches!(self.code, ErrorCode::MethodNotFound | ErrorCode::UnsupportedMethod)
    }
}

impl From<TransportError> for ProviderRpcError {
    fn from(err: TransportError) -> Self {
        if let Some(payload) = err.as_error_resp() {
            let data = payload.try_data_as::<serde_json::Value>().and_then(Result::ok);
            return Self {
                code: payload.code.into(),
                message: payload.message.to_string(),
                data,
            };
        }
        if err.is_transport_error() {
            return Self::new(ErrorCode::Disconnected, err.to_string());
        }
        Self::new(ErrorCode::InternalError, err.to_string())
    }
}

/// List of provider error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// The user rejected the request.
    UserRejectedRequest,
    /// The requested method and/or account has not been authorized by the user.
    Unauthorized,
    /// The provider does not support the requested method.
    UnsupportedMethod,
    /// The provider is disconnected from all chains.
    Disconnected,
    /// The provider is not connected to the requested chain.
    ChainDisconnected,
    /// The chain has not been added to the wallet.
    UnrecognizedChain,
    /// Invalid JSON was received.
    ParseError,
    /// The JSON sent is not a valid request object.
    InvalidRequest,
    /// The method does not exist or is not available.
    MethodNotFound,
    /// Invalid method parameters.
    InvalidParams,
    /// Internal JSON-RPC error.
    InternalError,
    /// Execution reverted.
    ///
    /// <https://github.com/vapory-legacy/wiki/blob/master/JSON-RPC-Error-Codes-Improvement-Proposal.md>
    ExecutionError,
    /// Any other code.
    Other(i64),
}

impl ErrorCode {
    /// Returns the error code as `i64`
    pub fn code(&self) -> i64 {
        match *self {
            Self::UserRejectedRequest => 4001,
            Self::Unauthorized => 4100,
            Self::UnsupportedMethod => 4200,
            Self::Disconnected => 4900,
            Self::ChainDisconnected => 4901,
            Self::UnrecognizedChain => 4902,
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ExecutionError => 3,
            Self::Other(c) => c,
        }
    }

    /// Returns the standard message associated with the code
    pub const fn message(&self) -> &'static str {
        match *self {
            Self::UserRejectedRequest => "User rejected the request.",
            Self::Unauthorized => {
                "The requested account and/or method has not been authorized by the user."
            }
            Self::UnsupportedMethod => {
                "The requested method is not supported by this Ethereum provider."
            }
            Self::Disconnected => "The provider is disconnected from all chains.",
            Self::ChainDisconnected => "The provider is disconnected from the specified chain.",
            Self::UnrecognizedChain => "Unrecognized chain ID.",
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
            Self::ExecutionError => "Execution error",
            Self::Other(_) => "Unknown error",
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'a> Deserialize<'a> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'a>,
    {
        i64::deserialize(deserializer).map(Into::into)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        match code {
            4001 => Self::UserRejectedRequest,
            4100 => Self::Unauthorized,
            4200 => Self::UnsupportedMethod,
            4900 => Self::Disconnected,
            4901 => Self::ChainDisconnected,
            4902 => Self::UnrecognizedChain,
            -32700 => Self::ParseError,
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            3 => Self::ExecutionError,
            _ => Self::Other(code),
        }
    }
}
