use eyre::WrapErr;
use serde::Serialize;
use serde_json::Value;

use esplorer_core::{
    Address, BlockHash, BlockHeight, EsploraApi, EsploraError, ScriptHash, TxId,
};

use crate::cli::Command;

/// Run one subcommand and return its result as JSON.
pub async fn run(api: &dyn EsploraApi, command: Command) -> eyre::Result<Value> {
    let name = command_name(&command);
    tracing::debug!(command = name, "running");
    dispatch(api, command)
        .await
        .wrap_err_with(|| format!("`{name}` failed"))
}

async fn dispatch(api: &dyn EsploraApi, command: Command) -> eyre::Result<Value> {
    match command {
        Command::Tx { txid } => to_json(api.get_transaction(&TxId(txid)).await),
        Command::TxStatus { txid } => to_json(api.get_transaction_status(&TxId(txid)).await),
        Command::TxHex { txid } => to_json(api.get_transaction_hex(&TxId(txid)).await),
        Command::TxMerkleProof { txid } => {
            to_json(api.get_transaction_merkle_proof(&TxId(txid)).await)
        }
        Command::TxOutspend { txid, vout } => {
            to_json(api.get_transaction_out_spend(&TxId(txid), vout).await)
        }
        Command::TxOutspends { txid } => {
            to_json(api.get_transaction_out_spends(&TxId(txid)).await)
        }

        Command::Address { address } => to_json(api.get_address_info(&Address(address)).await),
        Command::AddressTxs { address, after } => {
            let address = Address(address);
            match after {
                Some(last) => to_json(
                    api.get_address_transactions_chain(&address, &TxId(last))
                        .await,
                ),
                None => to_json(api.get_address_transactions(&address).await),
            }
        }
        Command::AddressMempool { address } => {
            to_json(api.get_address_mempool_transactions(&Address(address)).await)
        }
        Command::AddressUtxo { address } => {
            to_json(api.get_address_utxos(&Address(address)).await)
        }

        Command::Scripthash { hash } => {
            to_json(api.get_script_hash_info(&ScriptHash(hash)).await)
        }
        Command::ScripthashTxs { hash, after } => {
            let hash = ScriptHash(hash);
            match after {
                Some(last) => to_json(
                    api.get_script_hash_transactions_chain(&hash, &TxId(last))
                        .await,
                ),
                None => to_json(api.get_script_hash_transactions(&hash).await),
            }
        }
        Command::ScripthashMempool { hash } => {
            to_json(api.get_script_hash_mempool_transactions(&ScriptHash(hash)).await)
        }
        Command::ScripthashUtxo { hash } => {
            to_json(api.get_script_hash_utxos(&ScriptHash(hash)).await)
        }

        Command::Block { hash } => to_json(api.get_block(&BlockHash(hash)).await),
        Command::BlockStatus { hash } => to_json(api.get_block_status(&BlockHash(hash)).await),
        Command::BlockTxs { hash, start } => {
            to_json(api.get_block_transactions(&BlockHash(hash), start).await)
        }
        Command::BlockTxids { hash } => to_json(api.get_block_txids(&BlockHash(hash)).await),
        Command::BlockTxid { hash, index } => {
            to_json(api.get_block_txid(&BlockHash(hash), index).await)
        }
        Command::BlockHash { height } => to_json(api.get_block_hash(BlockHeight(height)).await),
        Command::Blocks { height } => to_json(api.get_blocks(BlockHeight(height)).await),
        Command::TipHeight => to_json(api.get_tip_height().await),
        Command::TipHash => to_json(api.get_tip_hash().await),

        Command::Mempool => to_json(api.get_mempool_statistics().await),
        Command::MempoolTxids => to_json(api.get_mempool_txids().await),
        Command::MempoolRecent => to_json(api.get_mempool_recent().await),
        Command::FeeEstimates { target } => {
            let estimates = api.get_fee_estimates().await?;
            match target {
                Some(target) => Ok(serde_json::json!({
                    "target": target,
                    "fee_rate": estimates.rate_for_target(target),
                })),
                None => Ok(serde_json::to_value(estimates)?),
            }
        }
    }
}

fn to_json<T: Serialize>(result: Result<T, EsploraError>) -> eyre::Result<Value> {
    Ok(serde_json::to_value(result?)?)
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Tx { .. } => "tx",
        Command::TxStatus { .. } => "tx-status",
        Command::TxHex { .. } => "tx-hex",
        Command::TxMerkleProof { .. } => "tx-merkle-proof",
        Command::TxOutspend { .. } => "tx-outspend",
        Command::TxOutspends { .. } => "tx-outspends",
        Command::Address { .. } => "address",
        Command::AddressTxs { .. } => "address-txs",
        Command::AddressMempool { .. } => "address-mempool",
        Command::AddressUtxo { .. } => "address-utxo",
        Command::Scripthash { .. } => "scripthash",
        Command::ScripthashTxs { .. } => "scripthash-txs",
        Command::ScripthashMempool { .. } => "scripthash-mempool",
        Command::ScripthashUtxo { .. } => "scripthash-utxo",
        Command::Block { .. } => "block",
        Command::BlockStatus { .. } => "block-status",
        Command::BlockTxs { .. } => "block-txs",
        Command::BlockTxids { .. } => "block-txids",
        Command::BlockTxid { .. } => "block-txid",
        Command::BlockHash { .. } => "block-hash",
        Command::Blocks { .. } => "blocks",
        Command::TipHeight => "tip-height",
        Command::TipHash => "tip-hash",
        Command::Mempool => "mempool",
        Command::MempoolTxids => "mempool-txids",
        Command::MempoolRecent => "mempool-recent",
        Command::FeeEstimates { .. } => "fee-estimates",
    }
}

/// Render a result for the terminal. Bare strings (hashes, hex) print
/// without JSON quoting so they can be piped.
pub fn render(value: &Value) -> eyre::Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}
