use alloy::{
    primitives::{hex, Address, U256},
    signers::local::{
        coins_bip39::{English, Mnemonic, MnemonicError},
        LocalSignerError, MnemonicBuilder, PrivateKeySigner,
    },
};

mod store;
pub use store::WalletStore;

/// Word count for freshly generated recovery phrases
const MNEMONIC_WORDS: usize = 12;

/// A single keypair controlling one chain account.
///
/// The recovery phrase only exists for freshly generated wallets and is
/// never written to the store. The balance is transient state owned by the
/// last balance check; `None` means unchecked or failed to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub address: Address,
    /// 0x-prefixed hex encoding of the signing key
    pub private_key: String,
    pub mnemonic: Option<String>,
    pub balance: Option<U256>,
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Failed to generate recovery phrase: {_0}")]
    Mnemonic(#[from] MnemonicError),
    #[error("Failed to derive signing key: {_0}")]
    Signer(#[from] LocalSignerError),
}

impl Wallet {
    /// Rebuild the signing key for this wallet
    pub fn signer(&self) -> Result<PrivateKeySigner, WalletError> {
        Ok(self.private_key.parse()?)
    }
}

/// Generate a wallet from a fresh 12-word recovery phrase.
///
/// The address is the secp256k1 derivation of the key at the default
/// account index. Entropy or derivation failure is not recoverable here.
pub fn generate() -> Result<Wallet, WalletError> {
    let mnemonic = Mnemonic::<English>::new_with_count(&mut rand::thread_rng(), MNEMONIC_WORDS)?;
    let phrase = mnemonic.to_phrase();
    let signer = MnemonicBuilder::<English>::default()
        .phrase(phrase.as_str())
        .build()?;

    Ok(Wallet {
        address: signer.address(),
        private_key: format!("0x{}", hex::encode(signer.credential().to_bytes())),
        mnemonic: Some(phrase),
        balance: None,
    })
}
