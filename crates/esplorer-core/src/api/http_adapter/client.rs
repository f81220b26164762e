use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, trace};

use crate::error::EsploraError;
use crate::types::{Address, BlockHash, BlockHeight, ScriptHash, TxHex, TxId};

use super::super::types::{
    AddressInfo, Block, BlockStatus, FeeEstimates, MemPoolOverviewData, MemPoolStatistics,
    ScriptHashInfo, Transaction, TransactionMerkleProof, TransactionOutSpend, TransactionStatus,
    UnspentTransactionOutput,
};
use super::super::EsploraApi;
use super::connection::parse_base_url;
use super::endpoint::Endpoint;
use super::parsing::{decode_json, decode_text, parse_block_height};

const USER_AGENT: &str = concat!("esplorer/", env!("CARGO_PKG_VERSION"));

/// Esplora REST client over HTTP(S).
///
/// Holds one `reqwest::Client` for its whole lifetime, so concurrent callers
/// share a single connection pool. Cheap to share behind `Arc`.
#[derive(Debug, Clone)]
pub struct HttpEsploraClient {
    client: reqwest::Client,
    base_url: String,
    debug: bool,
}

impl HttpEsploraClient {
    /// Create a client for `base_url` (e.g. `https://blockstream.info/api`)
    /// using reqwest's default transport settings.
    ///
    /// With `debug` set, request/response lines are logged at `info` and
    /// bodies at `debug` instead of `debug` and `trace`.
    pub fn new(base_url: &str, debug: bool) -> Result<Self, EsploraError> {
        let client = Self::transport_builder()
            .build()
            .expect("reqwest client builder uses valid static config");
        Self::with_transport(base_url, debug, client)
    }

    /// Transport builder with the client's user agent set. Start from this
    /// when configuring timeouts or a proxy for [`Self::with_transport`].
    pub fn transport_builder() -> reqwest::ClientBuilder {
        reqwest::Client::builder().user_agent(USER_AGENT)
    }

    /// Create a client on a caller-built transport, e.g. one with timeouts
    /// or a proxy configured.
    pub fn with_transport(
        base_url: &str,
        debug: bool,
        client: reqwest::Client,
    ) -> Result<Self, EsploraError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            client,
            base_url,
            debug,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and return the body bytes of a 200 response.
    async fn get_raw(&self, endpoint: Endpoint<'_>) -> Result<Vec<u8>, EsploraError> {
        let url = format!("{}{endpoint}", self.base_url);
        if self.debug {
            info!(endpoint = endpoint.name(), %url, "esplora request");
        } else {
            debug!(endpoint = endpoint.name(), %url, "esplora request");
        }

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(EsploraError::Connection)?;
        let status = response.status();
        let body = response.bytes().await.map_err(EsploraError::Connection)?;

        if self.debug {
            info!(endpoint = endpoint.name(), %status, body_len = body.len(), "esplora response");
            debug!(endpoint = endpoint.name(), body = %String::from_utf8_lossy(&body), "esplora response body");
        } else {
            debug!(endpoint = endpoint.name(), %status, body_len = body.len(), "esplora response");
            trace!(endpoint = endpoint.name(), body = %String::from_utf8_lossy(&body), "esplora response body");
        }

        if status != StatusCode::OK {
            return Err(EsploraError::Request {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, EsploraError> {
        let body = self.get_raw(endpoint).await?;
        decode_json(&body)
    }

    async fn get_text(&self, endpoint: Endpoint<'_>) -> Result<String, EsploraError> {
        decode_text(self.get_raw(endpoint).await?)
    }
}

#[async_trait]
impl EsploraApi for HttpEsploraClient {
    async fn get_transaction(&self, txid: &TxId) -> Result<Transaction, EsploraError> {
        self.get_json(Endpoint::Tx(txid)).await
    }

    async fn get_transaction_status(
        &self,
        txid: &TxId,
    ) -> Result<TransactionStatus, EsploraError> {
        self.get_json(Endpoint::TxStatus(txid)).await
    }

    async fn get_transaction_hex(&self, txid: &TxId) -> Result<TxHex, EsploraError> {
        self.get_text(Endpoint::TxHex(txid)).await.map(TxHex)
    }

    async fn get_transaction_merkle_proof(
        &self,
        txid: &TxId,
    ) -> Result<TransactionMerkleProof, EsploraError> {
        self.get_json(Endpoint::TxMerkleProof(txid)).await
    }

    async fn get_transaction_out_spend(
        &self,
        txid: &TxId,
        vout: u32,
    ) -> Result<TransactionOutSpend, EsploraError> {
        self.get_json(Endpoint::TxOutSpend(txid, vout)).await
    }

    async fn get_transaction_out_spends(
        &self,
        txid: &TxId,
    ) -> Result<Vec<TransactionOutSpend>, EsploraError> {
        self.get_json(Endpoint::TxOutSpends(txid)).await
    }

    async fn get_address_info(&self, address: &Address) -> Result<AddressInfo, EsploraError> {
        self.get_json(Endpoint::Address(address)).await
    }

    async fn get_script_hash_info(
        &self,
        hash: &ScriptHash,
    ) -> Result<ScriptHashInfo, EsploraError> {
        self.get_json(Endpoint::ScriptHash(hash)).await
    }

    async fn get_address_transactions(
        &self,
        address: &Address,
    ) -> Result<Vec<Transaction>, EsploraError> {
        self.get_json(Endpoint::AddressTxs(address)).await
    }

    async fn get_script_hash_transactions(
        &self,
        hash: &ScriptHash,
    ) -> Result<Vec<Transaction>, EsploraError> {
        self.get_json(Endpoint::ScriptHashTxs(hash)).await
    }

    async fn get_address_transactions_chain(
        &self,
        address: &Address,
        last_txid: &TxId,
    ) -> Result<Vec<Transaction>, EsploraError> {
        self.get_json(Endpoint::AddressTxsChain(address, last_txid))
            .await
    }

    async fn get_script_hash_transactions_chain(
        &self,
        hash: &ScriptHash,
        last_txid: &TxId,
    ) -> Result<Vec<Transaction>, EsploraError> {
        self.get_json(Endpoint::ScriptHashTxsChain(hash, last_txid))
            .await
    }

    async fn get_address_mempool_transactions(
        &self,
        address: &Address,
    ) -> Result<Vec<Transaction>, EsploraError> {
        self.get_json(Endpoint::AddressTxsMempool(address)).await
    }

    async fn get_script_hash_mempool_transactions(
        &self,
        hash: &ScriptHash,
    ) -> Result<Vec<Transaction>, EsploraError> {
        self.get_json(Endpoint::ScriptHashTxsMempool(hash)).await
    }

    async fn get_address_utxos(
        &self,
        address: &Address,
    ) -> Result<Vec<UnspentTransactionOutput>, EsploraError> {
        self.get_json(Endpoint::AddressUtxo(address)).await
    }

    async fn get_script_hash_utxos(
        &self,
        hash: &ScriptHash,
    ) -> Result<Vec<UnspentTransactionOutput>, EsploraError> {
        self.get_json(Endpoint::ScriptHashUtxo(hash)).await
    }

    async fn get_block(&self, hash: &BlockHash) -> Result<Block, EsploraError> {
        self.get_json(Endpoint::Block(hash)).await
    }

    async fn get_block_status(&self, hash: &BlockHash) -> Result<BlockStatus, EsploraError> {
        self.get_json(Endpoint::BlockStatus(hash)).await
    }

    async fn get_block_transactions(
        &self,
        hash: &BlockHash,
        start_index: u32,
    ) -> Result<Vec<Transaction>, EsploraError> {
        self.get_json(Endpoint::BlockTxs(hash, start_index)).await
    }

    async fn get_block_txids(&self, hash: &BlockHash) -> Result<Vec<TxId>, EsploraError> {
        self.get_json(Endpoint::BlockTxids(hash)).await
    }

    async fn get_block_txid(&self, hash: &BlockHash, index: u32) -> Result<TxId, EsploraError> {
        self.get_text(Endpoint::BlockTxid(hash, index))
            .await
            .map(TxId)
    }

    async fn get_block_hash(&self, height: BlockHeight) -> Result<BlockHash, EsploraError> {
        self.get_text(Endpoint::BlockHeight(height))
            .await
            .map(BlockHash)
    }

    async fn get_blocks(&self, height: BlockHeight) -> Result<Vec<Block>, EsploraError> {
        self.get_json(Endpoint::Blocks(height)).await
    }

    async fn get_tip_height(&self) -> Result<BlockHeight, EsploraError> {
        let text = self.get_text(Endpoint::TipHeight).await?;
        parse_block_height(&text)
    }

    async fn get_tip_hash(&self) -> Result<BlockHash, EsploraError> {
        self.get_text(Endpoint::TipHash).await.map(BlockHash)
    }

    async fn get_mempool_statistics(&self) -> Result<MemPoolStatistics, EsploraError> {
        self.get_json(Endpoint::Mempool).await
    }

    async fn get_mempool_txids(&self) -> Result<Vec<TxId>, EsploraError> {
        self.get_json(Endpoint::MempoolTxids).await
    }

    async fn get_mempool_recent(&self) -> Result<Vec<MemPoolOverviewData>, EsploraError> {
        self.get_json(Endpoint::MempoolRecent).await
    }

    async fn get_fee_estimates(&self) -> Result<FeeEstimates, EsploraError> {
        self.get_json(Endpoint::FeeEstimates).await
    }
}
