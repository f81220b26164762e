//! Identifier newtypes shared by every endpoint.
//!
//! Transaction ids, addresses, script hashes and block hashes all travel as
//! bare strings on the wire. Wrapping each in its own type keeps call sites
//! like `get_address_transactions_chain(address, last_txid)` from silently
//! accepting swapped arguments. Values are substituted into request paths
//! verbatim; the explorer is the one that rejects malformed input.

use bitcoin::hashes::{sha256, Hash};
use serde::{Deserialize, Serialize};

use crate::error::EsploraError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

// ==============================================================================
// String Identifiers
// ==============================================================================

string_id!(
    /// Hex transaction id as printed by explorers (byte-reversed).
    TxId
);

string_id!(
    /// Raw serialized transaction, hex encoded.
    TxHex
);

string_id!(
    /// A Bitcoin address in its string encoding.
    Address
);

string_id!(
    /// Hex SHA-256 of an output script, the lookup key of `/scripthash/...`.
    ScriptHash
);

string_id!(
    /// Hex block hash as printed by explorers (byte-reversed).
    BlockHash
);

impl TxId {
    /// Parse into a `bitcoin::Txid`.
    pub fn to_txid(&self) -> Result<bitcoin::Txid, EsploraError> {
        self.0
            .parse()
            .map_err(|e| EsploraError::Decode(format!("invalid txid `{}`: {e}", self.0)))
    }
}

impl From<bitcoin::Txid> for TxId {
    fn from(txid: bitcoin::Txid) -> Self {
        Self(txid.to_string())
    }
}

impl From<&bitcoin::Txid> for TxId {
    fn from(txid: &bitcoin::Txid) -> Self {
        Self(txid.to_string())
    }
}

impl BlockHash {
    /// Parse into a `bitcoin::BlockHash`.
    pub fn to_block_hash(&self) -> Result<bitcoin::BlockHash, EsploraError> {
        self.0
            .parse()
            .map_err(|e| EsploraError::Decode(format!("invalid block hash `{}`: {e}", self.0)))
    }
}

impl From<bitcoin::BlockHash> for BlockHash {
    fn from(hash: bitcoin::BlockHash) -> Self {
        Self(hash.to_string())
    }
}

impl From<&bitcoin::Address> for Address {
    fn from(address: &bitcoin::Address) -> Self {
        Self(address.to_string())
    }
}

impl ScriptHash {
    /// Compute the script hash Esplora indexes `script` under.
    pub fn from_script(script: &bitcoin::Script) -> Self {
        Self(sha256::Hash::hash(script.as_bytes()).to_string())
    }
}

// ==============================================================================
// Block Height
// ==============================================================================

/// A block height, wrapped for type safety.
///
/// `#[serde(transparent)]` keeps the JSON representation a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHeight(pub u32);

impl From<u32> for BlockHeight {
    fn from(h: u32) -> Self {
        Self(h)
    }
}

impl From<BlockHeight> for u32 {
    fn from(h: BlockHeight) -> Self {
        h.0
    }
}

impl std::ops::Deref for BlockHeight {
    type Target = u32;
    fn deref(&self) -> &u32 {
        &self.0
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ==============================================================================
// Script Type Classification
// ==============================================================================

/// Output script template, as detected by [`crate::enrich::classify_script`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    P2pk,
    P2pkh,
    P2sh,
    P2wpkh,
    P2wsh,
    P2tr,
    BareMultisig,
    OpReturn,
    Unknown,
}

impl std::fmt::Display for ScriptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P2pk => write!(f, "p2pk"),
            Self::P2pkh => write!(f, "p2pkh"),
            Self::P2sh => write!(f, "p2sh"),
            Self::P2wpkh => write!(f, "p2wpkh"),
            Self::P2wsh => write!(f, "p2wsh"),
            Self::P2tr => write!(f, "p2tr"),
            Self::BareMultisig => write!(f, "bare_multisig"),
            Self::OpReturn => write!(f, "op_return"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
