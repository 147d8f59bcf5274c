use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, TxHash, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::{RpcError, TransportErrorKind},
};
use tracing::debug;
use url::Url;

mod config;
pub use config::EthConfig;

type ReadProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider,
>;

/// JSON-RPC client for the configured chain.
///
/// Construction performs no handshake; a dead endpoint only surfaces on the
/// first call. Signing providers are built per transfer and dropped right
/// after, since alloy providers keep polling in the background otherwise
/// (alloy-rs/alloy#1318).
pub struct EthClient {
    provider: ReadProvider,
    rpc: Url,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("RPC Error: {_0:?}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
}

impl EthClient {
    pub async fn connect(config: &EthConfig) -> Result<Self, ClientError> {
        debug!(?config);

        let provider = ProviderBuilder::new().connect(config.rpc.as_str()).await?;
        Ok(Self {
            provider,
            rpc: config.rpc.clone(),
        })
    }

    /// Native balance of an account, in wei
    pub async fn balance_of(&self, address: Address) -> Result<U256, ClientError> {
        Ok(self.provider.get_balance(address).await?)
    }

    /// Sign and broadcast a native value transfer.
    ///
    /// Returns as soon as the network accepts the transaction for
    /// inclusion; callers that need confirmation must watch the hash
    /// themselves.
    pub async fn send_value(
        &self,
        signer: PrivateKeySigner,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, ClientError> {
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect(self.rpc.as_str())
            .await?;

        let tx = TransactionRequest::default().with_to(to).with_value(amount);
        let pending = provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }
}
