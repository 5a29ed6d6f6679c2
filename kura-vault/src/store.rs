//! Encrypted wallet persistence.
//!
//! A [`WalletStore`] keeps wallet records in a single JSON vault file.
//! Private keys are stored only as cipher blobs; names and public keys
//! stay readable so the UI can enumerate wallets without a password.
//! Writes go through a temp file and an atomic rename.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use kura::ChainType;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::cipher;
use crate::error::{Result, VaultError};

const VAULT_VERSION: u32 = 1;

/// One persisted wallet record. The private key is a cipher blob; all
/// other fields are plaintext metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WalletRecord {
    id: u64,
    name: String,
    chain: String,
    public_key: String,
    encrypted_private_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VaultFile {
    version: u32,
    next_id: u64,
    records: Vec<WalletRecord>,
}

impl Default for VaultFile {
    fn default() -> Self {
        Self {
            version: VAULT_VERSION,
            next_id: 1,
            records: Vec::new(),
        }
    }
}

/// A decrypted wallet returned by [`WalletStore::get_wallets`].
pub struct UnlockedWallet {
    /// User-visible wallet name.
    pub name: String,
    /// Public key / address.
    pub public_key: String,
    /// Decrypted private key (zeroized on drop).
    pub private_key: Zeroizing<String>,
}

impl std::fmt::Debug for UnlockedWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockedWallet")
            .field("name", &self.name)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Wallet metadata, available without a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSummary {
    /// User-visible wallet name.
    pub name: String,
    /// Public key / address.
    pub public_key: String,
}

/// Cooperative cancellation for batch decryption.
///
/// Cloned tokens share state; cancelling any clone stops the loop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A local encrypted wallet store backed by one JSON file.
#[derive(Debug)]
pub struct WalletStore {
    path: PathBuf,
    file: VaultFile,
}

impl WalletStore {
    /// Open a store at `path`, creating an empty one if the file does
    /// not exist yet. The file itself is only written on first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = if path.exists() {
            let raw = fs::read(&path)?;
            serde_json::from_slice(&raw)?
        } else {
            VaultFile::default()
        };
        debug!(path = %path.display(), records = file.records.len(), "vault opened");
        Ok(Self { path, file })
    }

    /// Encrypt and persist a wallet. Returns the new record's id.
    ///
    /// Fails with [`VaultError::MissingParameter`] on empty required
    /// fields and [`VaultError::DuplicateWallet`] when a record with the
    /// same (chain, public key) already exists; nothing is written in
    /// either case.
    pub fn save(
        &mut self,
        private_key: &str,
        password: &str,
        public_key: &str,
        chain: ChainType,
        name: Option<&str>,
    ) -> Result<u64> {
        Self::require(private_key, "private_key")?;
        Self::require(password, "password")?;
        Self::require(public_key, "public_key")?;

        if self
            .records_for(chain)
            .any(|r| r.public_key == public_key)
        {
            return Err(VaultError::DuplicateWallet {
                chain,
                public_key: public_key.to_owned(),
            });
        }

        let name = match name {
            Some(n) if !n.trim().is_empty() => n.trim().to_owned(),
            _ => self.default_name(chain),
        };

        let encrypted_private_key = cipher::encrypt(private_key, password)?;

        let id = self.file.next_id;
        self.file.next_id += 1;
        self.file.records.push(WalletRecord {
            id,
            name,
            chain: chain.as_str().to_owned(),
            public_key: public_key.to_owned(),
            encrypted_private_key,
        });
        if let Err(err) = self.persist() {
            // Roll back so a retry after the storage fault is not
            // rejected as a duplicate of a record that never hit disk.
            self.file.records.pop();
            self.file.next_id = id;
            return Err(err);
        }

        debug!(%chain, id, "wallet saved");
        Ok(id)
    }

    /// Decrypt all wallets for a chain, optionally filtered by name.
    ///
    /// Records that fail to decrypt are dropped from the result, not
    /// fatal; an empty result when records exist usually means the
    /// password is wrong. Duplicate public keys are removed keeping the
    /// first occurrence. A cancellation token short-circuits the loop.
    pub fn get_wallets(
        &self,
        password: &str,
        chain: ChainType,
        name: Option<&str>,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<UnlockedWallet>> {
        Self::require(password, "password")?;

        let mut unlocked: Vec<UnlockedWallet> = Vec::new();
        let mut duplicates = 0usize;

        for record in self.records_for(chain) {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                debug!(%chain, "wallet decryption cancelled");
                break;
            }
            if name.is_some_and(|n| n != record.name) {
                continue;
            }

            let private_key = match cipher::decrypt(&record.encrypted_private_key, password) {
                Ok(plain) => plain,
                Err(err) => {
                    warn!(%chain, id = record.id, %err, "skipping undecryptable record");
                    continue;
                }
            };

            if unlocked.iter().any(|w| w.public_key == record.public_key) {
                duplicates += 1;
                continue;
            }
            unlocked.push(UnlockedWallet {
                name: record.name.clone(),
                public_key: record.public_key.clone(),
                private_key,
            });
        }

        if duplicates > 0 {
            // Should be impossible while save() enforces uniqueness;
            // indicates the store was written by a racing process.
            warn!(%chain, duplicates, "removed duplicate wallet records on read");
        }
        Ok(unlocked)
    }

    /// List wallet metadata for a chain without decrypting anything.
    #[must_use]
    pub fn list_wallets(&self, chain: ChainType) -> Vec<WalletSummary> {
        self.records_for(chain)
            .map(|r| WalletSummary {
                name: r.name.clone(),
                public_key: r.public_key.clone(),
            })
            .collect()
    }

    /// Delete all records for `chain`, or every record when `None`.
    /// Idempotent.
    pub fn clear_wallets(&mut self, chain: Option<ChainType>) -> Result<()> {
        let before = self.file.records.len();
        match chain {
            Some(chain) => self
                .file
                .records
                .retain(|r| r.chain != chain.as_str()),
            None => self.file.records.clear(),
        }
        if self.file.records.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Delete the record with the given name under `chain`. Returns
    /// whether a record was removed.
    pub fn remove_wallet(&mut self, chain: ChainType, name: &str) -> Result<bool> {
        let before = self.file.records.len();
        self.file
            .records
            .retain(|r| !(r.chain == chain.as_str() && r.name == name));
        let removed = self.file.records.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Total number of stored records, across all chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.file.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file.records.is_empty()
    }

    fn records_for<'a>(&'a self, chain: ChainType) -> impl Iterator<Item = &'a WalletRecord> + 'a {
        self.file
            .records
            .iter()
            .filter(move |r| r.chain == chain.as_str())
    }

    /// Default name per chain: one past the highest existing
    /// `Wallet N`, never reusing a deleted number.
    fn default_name(&self, chain: ChainType) -> String {
        let max = self
            .records_for(chain)
            .filter_map(|r| r.name.strip_prefix("Wallet "))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("Wallet {}", max + 1)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = tmp_path(&self.path);
        let raw = serde_json::to_vec_pretty(&self.file)?;
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn require(value: &str, field: &'static str) -> Result<()> {
        if value.is_empty() {
            return Err(VaultError::MissingParameter { field });
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, WalletStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = WalletStore::open(dir.path().join("vault.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn save_and_unlock() {
        let (_dir, mut store) = temp_store();
        let id = store
            .save("secret-key", "Passw0rd!", "pubkey1", ChainType::Solana, None)
            .unwrap();
        assert_eq!(id, 1);

        let wallets = store
            .get_wallets("Passw0rd!", ChainType::Solana, None, None)
            .unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].public_key, "pubkey1");
        assert_eq!(wallets[0].private_key.as_str(), "secret-key");
    }

    #[test]
    fn duplicate_save_rejected_without_write() {
        let (_dir, mut store) = temp_store();
        store
            .save("k1", "pw123456", "samepub", ChainType::Solana, None)
            .unwrap();
        let err = store
            .save("k2", "other-pw", "samepub", ChainType::Solana, None)
            .unwrap_err();
        assert!(matches!(err, VaultError::DuplicateWallet { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_public_key_allowed_on_different_chains() {
        let (_dir, mut store) = temp_store();
        store
            .save("k1", "pw123456", "pub", ChainType::Solana, None)
            .unwrap();
        store
            .save("k2", "pw123456", "pub", ChainType::Ethereum, None)
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_fields_rejected() {
        let (_dir, mut store) = temp_store();
        for (pk, pw, pubkey, field) in [
            ("", "pw", "pub", "private_key"),
            ("k", "", "pub", "password"),
            ("k", "pw", "", "public_key"),
        ] {
            let err = store
                .save(pk, pw, pubkey, ChainType::Solana, None)
                .unwrap_err();
            match err {
                VaultError::MissingParameter { field: f } => assert_eq!(f, field),
                other => panic!("expected MissingParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn default_names_use_max_plus_one() {
        let (_dir, mut store) = temp_store();
        for pubkey in ["a", "b", "c"] {
            store
                .save("k", "pw123456", pubkey, ChainType::Solana, None)
                .unwrap();
        }
        let names: Vec<_> = store
            .list_wallets(ChainType::Solana)
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, ["Wallet 1", "Wallet 2", "Wallet 3"]);

        assert!(store.remove_wallet(ChainType::Solana, "Wallet 2").unwrap());
        store
            .save("k", "pw123456", "d", ChainType::Solana, None)
            .unwrap();
        let names: Vec<_> = store
            .list_wallets(ChainType::Solana)
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, ["Wallet 1", "Wallet 3", "Wallet 4"]);
    }

    #[test]
    fn explicit_names_kept_and_filterable() {
        let (_dir, mut store) = temp_store();
        store
            .save("k1", "pw123456", "p1", ChainType::Ethereum, Some("savings"))
            .unwrap();
        store
            .save("k2", "pw123456", "p2", ChainType::Ethereum, Some("trading"))
            .unwrap();

        let filtered = store
            .get_wallets("pw123456", ChainType::Ethereum, Some("trading"), None)
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].public_key, "p2");
    }

    #[test]
    fn wrong_password_yields_empty_not_error() {
        let (_dir, mut store) = temp_store();
        store
            .save("k", "rightpass", "pub", ChainType::Bitcoin, None)
            .unwrap();
        let wallets = store
            .get_wallets("wrongpass", ChainType::Bitcoin, None, None)
            .unwrap();
        assert!(wallets.is_empty());
        assert_eq!(store.list_wallets(ChainType::Bitcoin).len(), 1);
    }

    #[test]
    fn mixed_passwords_degrade_gracefully() {
        let (_dir, mut store) = temp_store();
        store
            .save("k1", "password-a", "p1", ChainType::Solana, None)
            .unwrap();
        store
            .save("k2", "password-b", "p2", ChainType::Solana, None)
            .unwrap();

        let wallets = store
            .get_wallets("password-a", ChainType::Solana, None, None)
            .unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].public_key, "p1");
    }

    #[test]
    fn cancel_token_short_circuits() {
        let (_dir, mut store) = temp_store();
        store
            .save("k", "pw123456", "pub", ChainType::Solana, None)
            .unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let wallets = store
            .get_wallets("pw123456", ChainType::Solana, None, Some(&cancel))
            .unwrap();
        assert!(wallets.is_empty());
    }

    #[test]
    fn clear_is_scoped_and_idempotent() {
        let (_dir, mut store) = temp_store();
        store
            .save("k", "pw123456", "p1", ChainType::Solana, None)
            .unwrap();
        store
            .save("k", "pw123456", "p2", ChainType::Ethereum, None)
            .unwrap();

        store.clear_wallets(Some(ChainType::Solana)).unwrap();
        assert!(store.list_wallets(ChainType::Solana).is_empty());
        assert_eq!(store.list_wallets(ChainType::Ethereum).len(), 1);

        store.clear_wallets(Some(ChainType::Solana)).unwrap();
        store.clear_wallets(None).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn reopen_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");

        let mut store = WalletStore::open(&path).unwrap();
        store
            .save("persisted", "pw123456", "pub", ChainType::Solana, None)
            .unwrap();
        drop(store);

        let store = WalletStore::open(&path).unwrap();
        let wallets = store
            .get_wallets("pw123456", ChainType::Solana, None, None)
            .unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].private_key.as_str(), "persisted");
    }

    #[test]
    fn failed_persist_rolls_back_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");
        let mut store = WalletStore::open(&path).unwrap();

        // Occupy the vault path with a directory so the rename fails.
        std::fs::create_dir(&path).unwrap();
        let err = store
            .save("k", "pw123456", "pub1", ChainType::Solana, None)
            .unwrap_err();
        assert!(matches!(err, VaultError::Storage(_)));
        assert!(store.is_empty());
        assert!(store.list_wallets(ChainType::Solana).is_empty());

        // Clear the fault and retry the identical save.
        std::fs::remove_dir(&path).unwrap();
        let id = store
            .save("k", "pw123456", "pub1", ChainType::Solana, None)
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn read_side_dedup_keeps_first_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");

        // A racing writer can bypass save's uniqueness check; write a
        // vault with colliding records directly.
        let file = VaultFile {
            version: VAULT_VERSION,
            next_id: 3,
            records: vec![
                WalletRecord {
                    id: 1,
                    name: "Wallet 1".into(),
                    chain: "SOLANA".into(),
                    public_key: "dup".into(),
                    encrypted_private_key: cipher::encrypt("first-key", "pw123456").unwrap(),
                },
                WalletRecord {
                    id: 2,
                    name: "Wallet 2".into(),
                    chain: "SOLANA".into(),
                    public_key: "dup".into(),
                    encrypted_private_key: cipher::encrypt("second-key", "pw123456").unwrap(),
                },
            ],
        };
        std::fs::write(&path, serde_json::to_vec(&file).unwrap()).unwrap();

        let store = WalletStore::open(&path).unwrap();
        let wallets = store
            .get_wallets("pw123456", ChainType::Solana, None, None)
            .unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].private_key.as_str(), "first-key");
    }

    #[test]
    fn corrupt_vault_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");
        std::fs::write(&path, b"not json").unwrap();
        assert!(matches!(
            WalletStore::open(&path),
            Err(VaultError::Storage(_))
        ));
    }

    #[test]
    fn ids_are_never_reused() {
        let (_dir, mut store) = temp_store();
        let first = store
            .save("k", "pw123456", "p1", ChainType::Solana, None)
            .unwrap();
        store.remove_wallet(ChainType::Solana, "Wallet 1").unwrap();
        let second = store
            .save("k", "pw123456", "p2", ChainType::Solana, None)
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn unlocked_wallet_debug_redacts_key() {
        let wallet = UnlockedWallet {
            name: "Wallet 1".into(),
            public_key: "pub".into(),
            private_key: Zeroizing::new("secret".into()),
        };
        let debug = format!("{wallet:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
