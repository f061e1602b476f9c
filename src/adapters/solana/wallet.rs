use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::VersionedTransaction,
};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to load keypair from file: {0}")]
    LoadError(String),
    #[error("Failed to sign transaction: {0}")]
    SigningError(String),
    #[error("Invalid keypair bytes: {0}")]
    InvalidKeypair(String),
}

/// Wallet manager holding the one keypair a run signs with
pub struct WalletManager {
    keypair: Keypair,
}

impl WalletManager {
    /// Load from the SECRET_KEY (base58) env var when set, otherwise from the
    /// keypair file.
    pub fn from_env_or_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        match std::env::var("SECRET_KEY") {
            Ok(secret) if !secret.is_empty() => Self::from_base58(&secret),
            _ => Self::from_file(path),
        }
    }

    /// Load keypair from a file path (JSON array format)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| WalletError::LoadError(format!("Failed to read file: {}", e)))?;

        let bytes: Vec<u8> = serde_json::from_str(&contents)
            .map_err(|e| WalletError::LoadError(format!("Invalid JSON format: {}", e)))?;

        Self::from_bytes(&bytes)
    }

    /// Load keypair from a base58-encoded secret
    pub fn from_base58(secret: &str) -> Result<Self, WalletError> {
        let bytes = bs58::decode(secret)
            .into_vec()
            .map_err(|e| WalletError::InvalidKeypair(format!("Invalid base58: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Load keypair from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        let keypair =
            Keypair::try_from(bytes).map_err(|e| WalletError::InvalidKeypair(e.to_string()))?;

        Ok(Self { keypair })
    }

    /// Create a new random keypair (for testing)
    pub fn new_random() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Get the public key as a string
    pub fn public_key(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    /// Get the public key as Pubkey
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Sign a versioned transaction in place. Writes the signature slot only;
    /// the message is left untouched.
    pub fn sign_versioned(&self, transaction: &mut VersionedTransaction) -> Result<(), WalletError> {
        let message_bytes = transaction.message.serialize();
        let signature = self
            .keypair
            .try_sign_message(&message_bytes)
            .map_err(|e| WalletError::SigningError(e.to_string()))?;
        transaction.signatures = vec![signature];
        Ok(())
    }
}
