//! Esplora REST API abstraction layer.
//!
//! Defines the [`EsploraApi`] trait and provides an HTTP implementation
//! ([`HttpEsploraClient`]).

mod http_adapter;
pub mod types;

pub use http_adapter::HttpEsploraClient;
pub use types::{
    AddressInfo, Block, BlockStatus, ChainStats, FeeEstimates, MemPoolOverviewData,
    MemPoolStatistics, MemStats, ScriptHashInfo, Transaction, TransactionIn,
    TransactionMerkleProof, TransactionOut, TransactionOutSpend, TransactionStatus,
    UnspentTransactionOutput,
};

use async_trait::async_trait;

use crate::error::EsploraError;
use crate::types::{Address, BlockHash, BlockHeight, ScriptHash, TxHex, TxId};

/// Every read endpoint of an Esplora-compatible explorer.
///
/// Each call is one independent GET; implementations keep no per-call state,
/// do not retry and do not cache.
#[async_trait]
pub trait EsploraApi: Send + Sync {
    // -- Transactions ---------------------------------------------------------

    async fn get_transaction(&self, txid: &TxId) -> Result<Transaction, EsploraError>;

    async fn get_transaction_status(&self, txid: &TxId)
        -> Result<TransactionStatus, EsploraError>;

    /// Raw transaction hex, returned exactly as the explorer sent it.
    async fn get_transaction_hex(&self, txid: &TxId) -> Result<TxHex, EsploraError>;

    async fn get_transaction_merkle_proof(
        &self,
        txid: &TxId,
    ) -> Result<TransactionMerkleProof, EsploraError>;

    /// Spend status of output `vout` of `txid`.
    async fn get_transaction_out_spend(
        &self,
        txid: &TxId,
        vout: u32,
    ) -> Result<TransactionOutSpend, EsploraError>;

    /// Spend status of every output of `txid`, in output order.
    async fn get_transaction_out_spends(
        &self,
        txid: &TxId,
    ) -> Result<Vec<TransactionOutSpend>, EsploraError>;

    // -- Addresses and script hashes -----------------------------------------

    async fn get_address_info(&self, address: &Address) -> Result<AddressInfo, EsploraError>;

    async fn get_script_hash_info(&self, hash: &ScriptHash)
        -> Result<ScriptHashInfo, EsploraError>;

    /// Newest mempool transactions followed by the first page of confirmed ones.
    async fn get_address_transactions(
        &self,
        address: &Address,
    ) -> Result<Vec<Transaction>, EsploraError>;

    async fn get_script_hash_transactions(
        &self,
        hash: &ScriptHash,
    ) -> Result<Vec<Transaction>, EsploraError>;

    /// Next page of confirmed transactions after `last_txid`.
    async fn get_address_transactions_chain(
        &self,
        address: &Address,
        last_txid: &TxId,
    ) -> Result<Vec<Transaction>, EsploraError>;

    async fn get_script_hash_transactions_chain(
        &self,
        hash: &ScriptHash,
        last_txid: &TxId,
    ) -> Result<Vec<Transaction>, EsploraError>;

    async fn get_address_mempool_transactions(
        &self,
        address: &Address,
    ) -> Result<Vec<Transaction>, EsploraError>;

    async fn get_script_hash_mempool_transactions(
        &self,
        hash: &ScriptHash,
    ) -> Result<Vec<Transaction>, EsploraError>;

    async fn get_address_utxos(
        &self,
        address: &Address,
    ) -> Result<Vec<UnspentTransactionOutput>, EsploraError>;

    async fn get_script_hash_utxos(
        &self,
        hash: &ScriptHash,
    ) -> Result<Vec<UnspentTransactionOutput>, EsploraError>;

    // -- Blocks ---------------------------------------------------------------

    async fn get_block(&self, hash: &BlockHash) -> Result<Block, EsploraError>;

    async fn get_block_status(&self, hash: &BlockHash) -> Result<BlockStatus, EsploraError>;

    /// One page of the block's transactions starting at `start_index`.
    async fn get_block_transactions(
        &self,
        hash: &BlockHash,
        start_index: u32,
    ) -> Result<Vec<Transaction>, EsploraError>;

    async fn get_block_txids(&self, hash: &BlockHash) -> Result<Vec<TxId>, EsploraError>;

    async fn get_block_txid(&self, hash: &BlockHash, index: u32) -> Result<TxId, EsploraError>;

    /// Hash of the best-chain block at `height`.
    async fn get_block_hash(&self, height: BlockHeight) -> Result<BlockHash, EsploraError>;

    /// Up to ten blocks ending at `height`, newest first.
    async fn get_blocks(&self, height: BlockHeight) -> Result<Vec<Block>, EsploraError>;

    async fn get_tip_height(&self) -> Result<BlockHeight, EsploraError>;

    async fn get_tip_hash(&self) -> Result<BlockHash, EsploraError>;

    // -- Mempool and fees -----------------------------------------------------

    async fn get_mempool_statistics(&self) -> Result<MemPoolStatistics, EsploraError>;

    async fn get_mempool_txids(&self) -> Result<Vec<TxId>, EsploraError>;

    async fn get_mempool_recent(&self) -> Result<Vec<MemPoolOverviewData>, EsploraError>;

    async fn get_fee_estimates(&self) -> Result<FeeEstimates, EsploraError>;
}
