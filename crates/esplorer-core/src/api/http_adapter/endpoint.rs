use std::fmt;

use crate::types::{Address, BlockHash, BlockHeight, ScriptHash, TxId};

/// One GET endpoint of the explorer API. `Display` renders the request path
/// (leading slash, no base URL); identifiers are substituted verbatim.
#[derive(Debug, Clone, Copy)]
pub(super) enum Endpoint<'a> {
    Tx(&'a TxId),
    TxStatus(&'a TxId),
    TxHex(&'a TxId),
    TxMerkleProof(&'a TxId),
    TxOutSpend(&'a TxId, u32),
    TxOutSpends(&'a TxId),
    Address(&'a Address),
    ScriptHash(&'a ScriptHash),
    AddressTxs(&'a Address),
    ScriptHashTxs(&'a ScriptHash),
    AddressTxsChain(&'a Address, &'a TxId),
    ScriptHashTxsChain(&'a ScriptHash, &'a TxId),
    AddressTxsMempool(&'a Address),
    ScriptHashTxsMempool(&'a ScriptHash),
    AddressUtxo(&'a Address),
    ScriptHashUtxo(&'a ScriptHash),
    Block(&'a BlockHash),
    BlockStatus(&'a BlockHash),
    BlockTxs(&'a BlockHash, u32),
    BlockTxids(&'a BlockHash),
    BlockTxid(&'a BlockHash, u32),
    BlockHeight(BlockHeight),
    Blocks(BlockHeight),
    TipHeight,
    TipHash,
    Mempool,
    MempoolTxids,
    MempoolRecent,
    FeeEstimates,
}

impl Endpoint<'_> {
    /// Short stable name for log fields.
    pub(super) fn name(&self) -> &'static str {
        match self {
            Self::Tx(_) => "tx",
            Self::TxStatus(_) => "tx_status",
            Self::TxHex(_) => "tx_hex",
            Self::TxMerkleProof(_) => "tx_merkle_proof",
            Self::TxOutSpend(..) => "tx_outspend",
            Self::TxOutSpends(_) => "tx_outspends",
            Self::Address(_) => "address",
            Self::ScriptHash(_) => "scripthash",
            Self::AddressTxs(_) => "address_txs",
            Self::ScriptHashTxs(_) => "scripthash_txs",
            Self::AddressTxsChain(..) => "address_txs_chain",
            Self::ScriptHashTxsChain(..) => "scripthash_txs_chain",
            Self::AddressTxsMempool(_) => "address_txs_mempool",
            Self::ScriptHashTxsMempool(_) => "scripthash_txs_mempool",
            Self::AddressUtxo(_) => "address_utxo",
            Self::ScriptHashUtxo(_) => "scripthash_utxo",
            Self::Block(_) => "block",
            Self::BlockStatus(_) => "block_status",
            Self::BlockTxs(..) => "block_txs",
            Self::BlockTxids(_) => "block_txids",
            Self::BlockTxid(..) => "block_txid",
            Self::BlockHeight(_) => "block_height",
            Self::Blocks(_) => "blocks",
            Self::TipHeight => "tip_height",
            Self::TipHash => "tip_hash",
            Self::Mempool => "mempool",
            Self::MempoolTxids => "mempool_txids",
            Self::MempoolRecent => "mempool_recent",
            Self::FeeEstimates => "fee_estimates",
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tx(txid) => write!(f, "/tx/{txid}"),
            Self::TxStatus(txid) => write!(f, "/tx/{txid}/status"),
            Self::TxHex(txid) => write!(f, "/tx/{txid}/hex"),
            Self::TxMerkleProof(txid) => write!(f, "/tx/{txid}/merkle-proof"),
            Self::TxOutSpend(txid, vout) => write!(f, "/tx/{txid}/outspend/{vout}"),
            Self::TxOutSpends(txid) => write!(f, "/tx/{txid}/outspends"),
            Self::Address(address) => write!(f, "/address/{address}"),
            Self::ScriptHash(hash) => write!(f, "/scripthash/{hash}"),
            Self::AddressTxs(address) => write!(f, "/address/{address}/txs"),
            Self::ScriptHashTxs(hash) => write!(f, "/scripthash/{hash}/txs"),
            Self::AddressTxsChain(address, last) => {
                write!(f, "/address/{address}/txs/chain/{last}")
            }
            Self::ScriptHashTxsChain(hash, last) => {
                write!(f, "/scripthash/{hash}/txs/chain/{last}")
            }
            Self::AddressTxsMempool(address) => write!(f, "/address/{address}/txs/mempool"),
            Self::ScriptHashTxsMempool(hash) => write!(f, "/scripthash/{hash}/txs/mempool"),
            Self::AddressUtxo(address) => write!(f, "/address/{address}/utxo"),
            Self::ScriptHashUtxo(hash) => write!(f, "/scripthash/{hash}/utxo"),
            Self::Block(hash) => write!(f, "/block/{hash}"),
            Self::BlockStatus(hash) => write!(f, "/block/{hash}/status"),
            Self::BlockTxs(hash, start) => write!(f, "/block/{hash}/txs/{start}"),
            Self::BlockTxids(hash) => write!(f, "/block/{hash}/txids"),
            Self::BlockTxid(hash, index) => write!(f, "/block/{hash}/txid/{index}"),
            Self::BlockHeight(height) => write!(f, "/block-height/{height}"),
            Self::Blocks(height) => write!(f, "/blocks/{height}"),
            Self::TipHeight => f.write_str("/blocks/tip/height"),
            Self::TipHash => f.write_str("/blocks/tip/hash"),
            Self::Mempool => f.write_str("/mempool"),
            Self::MempoolTxids => f.write_str("/mempool/txids"),
            Self::MempoolRecent => f.write_str("/mempool/recent"),
            Self::FeeEstimates => f.write_str("/fee-estimates"),
        }
    }
}
