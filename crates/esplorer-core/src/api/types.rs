//! Response entities, one struct per JSON shape the explorer returns.
//!
//! Field names follow the Esplora wire format. Fields that explorers omit
//! for unconfirmed or unspent data are `Option`; a few `alias`es accept the
//! older key spellings still served by some mempool deployments.

use std::collections::HashMap;

use bitcoin::{Amount, ScriptBuf};
use serde::{Deserialize, Serialize};

use crate::enrich::{classify_script, compute_fee_rate, weight_to_vsize};
use crate::error::EsploraError;
use crate::types::{Address, BlockHash, BlockHeight, ScriptHash, ScriptType, TxId};

// ==============================================================================
// Transactions
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: TxId,
    /// Served unsigned; any 32-bit value is valid on the wire.
    pub version: u32,
    pub locktime: u32,
    pub vin: Vec<TransactionIn>,
    pub vout: Vec<TransactionOut>,
    pub size: u64,
    pub weight: u64,
    /// Fee in satoshis. Zero for coinbase transactions.
    #[serde(default)]
    pub fee: u64,
    pub status: TransactionStatus,
}

impl Transaction {
    #[must_use]
    pub fn vsize(&self) -> u64 {
        weight_to_vsize(self.weight)
    }

    /// Fee rate in sat/vB.
    #[must_use]
    pub fn fee_rate(&self) -> Option<f64> {
        compute_fee_rate(self.fee, self.weight)
    }

    #[must_use]
    pub fn is_coinbase(&self) -> bool {
        self.vin.len() == 1 && self.vin[0].is_coinbase
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionIn {
    pub txid: TxId,
    pub vout: u32,
    /// The spent output. `None` for coinbase inputs.
    pub prevout: Option<TransactionOut>,
    pub scriptsig: String,
    pub scriptsig_asm: String,
    #[serde(default)]
    pub witness: Vec<String>,
    #[serde(alias = "isCoinBase")]
    pub is_coinbase: bool,
    pub sequence: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_redeemscript_asm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_witnessscript_asm: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionOut {
    pub scriptpubkey: String,
    pub scriptpubkey_asm: String,
    pub scriptpubkey_type: String,
    /// Absent for scripts with no address form (OP_RETURN, bare multisig).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scriptpubkey_address: Option<Address>,
    /// Value in satoshis.
    pub value: u64,
}

impl TransactionOut {
    #[must_use]
    pub fn amount(&self) -> Amount {
        Amount::from_sat(self.value)
    }

    pub fn script_pubkey(&self) -> Result<ScriptBuf, EsploraError> {
        ScriptBuf::from_hex(&self.scriptpubkey)
            .map_err(|e| EsploraError::Decode(format!("invalid scriptpubkey hex: {e}")))
    }

    pub fn script_type(&self) -> Result<ScriptType, EsploraError> {
        Ok(classify_script(&self.script_pubkey()?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatus {
    pub confirmed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<BlockHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<BlockHash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_time: Option<u64>,
}

impl TransactionStatus {
    /// Confirmations relative to `tip`. `None` while unconfirmed.
    pub fn confirmations(&self, tip: BlockHeight) -> Option<u32> {
        if !self.confirmed {
            return None;
        }
        self.block_height
            .map(|h| tip.saturating_sub(*h).saturating_add(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMerkleProof {
    pub block_height: BlockHeight,
    /// Sibling hashes from the leaf up to the root.
    pub merkle: Vec<String>,
    pub pos: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutSpend {
    pub spent: bool,
    /// Spending transaction, when spent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txid: Option<TxId>,
    /// Index of the spending input within `txid`.
    #[serde(rename = "vin", default, skip_serializing_if = "Option::is_none")]
    pub vin_pos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}

// ==============================================================================
// Addresses and Script Hashes
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStats {
    pub funded_txo_count: u64,
    #[serde(alias = "founded_txo_sum")]
    pub funded_txo_sum: u64,
    pub spent_txo_count: u64,
    pub spent_txo_sum: u64,
    pub tx_count: u64,
}

impl ChainStats {
    /// Funded minus spent, in satoshis.
    #[must_use]
    pub fn balance(&self) -> u64 {
        self.funded_txo_sum.saturating_sub(self.spent_txo_sum)
    }
}

/// Mempool-only totals share the on-chain shape.
pub type MemStats = ChainStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: Address,
    pub chain_stats: ChainStats,
    #[serde(alias = "mem_stats")]
    pub mempool_stats: MemStats,
}

impl AddressInfo {
    #[must_use]
    pub fn confirmed_balance(&self) -> Amount {
        Amount::from_sat(self.chain_stats.balance())
    }

    /// Net mempool effect on the balance, in satoshis. May be negative.
    #[must_use]
    pub fn unconfirmed_balance(&self) -> i64 {
        let funded = i64::try_from(self.mempool_stats.funded_txo_sum).unwrap_or(i64::MAX);
        let spent = i64::try_from(self.mempool_stats.spent_txo_sum).unwrap_or(i64::MAX);
        funded.saturating_sub(spent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptHashInfo {
    pub scripthash: ScriptHash,
    pub chain_stats: ChainStats,
    #[serde(alias = "mem_stats")]
    pub mempool_stats: MemStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnspentTransactionOutput {
    pub txid: TxId,
    pub vout: u32,
    pub status: TransactionStatus,
    pub value: u64,
}

// ==============================================================================
// Blocks
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockHash,
    pub height: BlockHeight,
    pub version: u32,
    pub timestamp: u64,
    pub tx_count: u64,
    pub size: u64,
    pub weight: u64,
    pub merkle_root: String,
    /// `None` only for the genesis block.
    pub previousblockhash: Option<BlockHash>,
    pub nonce: u32,
    pub bits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mediantime: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStatus {
    pub in_best_chain: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<BlockHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_best: Option<BlockHash>,
}

// ==============================================================================
// Mempool
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemPoolStatistics {
    pub count: u64,
    pub vsize: u64,
    #[serde(alias = "totalFee")]
    pub total_fee: u64,
    /// `[feerate, vsize]` buckets. Kept opaque: the bucket shape is not
    /// part of the documented API.
    #[serde(default)]
    pub fee_histogram: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemPoolOverviewData {
    pub txid: TxId,
    pub fee: u64,
    pub vsize: u64,
    pub value: u64,
}

// ==============================================================================
// Fee Estimates
// ==============================================================================

/// Confirmation target in blocks (as a string key) to fee rate in sat/vB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeEstimates(pub HashMap<String, f64>);

impl FeeEstimates {
    /// Fee rate for the largest target that does not exceed `target` blocks.
    ///
    /// Keys that are not integers are ignored.
    pub fn rate_for_target(&self, target: u16) -> Option<f64> {
        self.0
            .iter()
            .filter_map(|(k, rate)| k.parse::<u16>().ok().map(|k| (k, *rate)))
            .filter(|(k, _)| *k <= target)
            .max_by_key(|(k, _)| *k)
            .map(|(_, rate)| rate)
    }
}

impl std::ops::Deref for FeeEstimates {
    type Target = HashMap<String, f64>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
