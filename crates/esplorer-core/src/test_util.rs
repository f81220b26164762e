#![allow(dead_code)]

//! Shared Esplora response fixtures.
//!
//! Plain `serde_json::Value` builders so the same payloads serve the unit
//! tests and the mock explorer in `tests/`. Identifiers passed in are echoed
//! back in the identifying field of each payload.

use serde_json::{json, Value};

pub const TXID: &str = "6b1d869856d857484ab0ac53575ac88f9a123616e22725deff7542537c827899";
pub const SPENDING_TXID: &str = "9a7ba47d71b2526b9f9a4376ea83c7afe4bf13cb0957a17148ce4adbb8eb47b0";
pub const ADDRESS: &str = "152f1muMCNa7goXYhYAQC61hxEgGacmncB";
pub const SCRIPT_HASH: &str = "c9e3c8a0c3d6f54b4f4c6f67a7bbc4e5a1e4e2ef6a2b1e0b4b6f0d1c2a3b4c5d";
pub const BLOCK_HASH: &str = "00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054";
pub const BLOCK_HASH_49999: &str =
    "000000000845517b31c6820d83f25cff46429bf136a7515fe504116427e60f8e";

// ==============================================================================
// Transactions
// ==============================================================================

pub fn status_json(height: u32) -> Value {
    json!({
        "confirmed": true,
        "block_height": height,
        "block_hash": BLOCK_HASH,
        "block_time": 1_690_168_629
    })
}

pub fn p2wpkh_output_json(value: u64) -> Value {
    json!({
        "scriptpubkey": "0014841b80d2cc75f5345c482af96294d04fdd66b2b7",
        "scriptpubkey_asm": "OP_0 OP_PUSHBYTES_20 841b80d2cc75f5345c482af96294d04fdd66b2b7",
        "scriptpubkey_type": "v0_p2wpkh",
        "scriptpubkey_address": "bc1qssdcp5kvwh6nghzg9tuk99xsflwkdv4hgvq58q",
        "value": value
    })
}

pub fn transaction_json(txid: &str) -> Value {
    json!({
        "txid": txid,
        "version": 2,
        "locktime": 0,
        "vin": [{
            "txid": SPENDING_TXID,
            "vout": 1,
            "prevout": p2wpkh_output_json(81_410),
            "scriptsig": "",
            "scriptsig_asm": "",
            "witness": [
                "3044022013d2a5d24b1b1fd1bb8b3a1e5c3b1b4f0b38f3e44e2b6e3e1c8e8a0f0c1d2e3f02201a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f801",
                "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
            ],
            "is_coinbase": false,
            "sequence": 4_294_967_293u32
        }],
        "vout": [
            p2wpkh_output_json(50_000),
            {
                "scriptpubkey": "6a0474657374",
                "scriptpubkey_asm": "OP_RETURN OP_PUSHBYTES_4 74657374",
                "scriptpubkey_type": "op_return",
                "value": 30_000
            }
        ],
        "size": 222,
        "weight": 561,
        "fee": 1410,
        "status": status_json(800_000)
    })
}

pub fn coinbase_json(txid: &str) -> Value {
    json!({
        "txid": txid,
        "version": 1,
        "locktime": 0,
        "vin": [{
            "txid": "0000000000000000000000000000000000000000000000000000000000000000",
            "vout": 4_294_967_295u32,
            "prevout": null,
            "scriptsig": "04ffff001d0104",
            "scriptsig_asm": "OP_PUSHBYTES_4 ffff001d OP_PUSHBYTES_1 04",
            "is_coinbase": true,
            "sequence": 4_294_967_295u32
        }],
        "vout": [p2wpkh_output_json(5_000_000_000)],
        "size": 134,
        "weight": 536,
        "fee": 0,
        "status": status_json(1)
    })
}

pub fn outspend_json(spending_txid: &str, vin: u32) -> Value {
    json!({
        "spent": true,
        "txid": spending_txid,
        "vin": vin,
        "status": status_json(800_001)
    })
}

pub fn merkle_proof_json(height: u32) -> Value {
    json!({
        "block_height": height,
        "merkle": [
            "ac0ba3f4a4a4b0d5cfc6bb4c8df7dd9d9d8b5d4bd7bd4e1c1d0f4d2f0aef1e2c",
            "7c1f2b5d52d3b1c6d39d5c0cfc3b6a2f77ddda4d66c5d8f8a1d0f0b4c7d4d1a0"
        ],
        "pos": 17
    })
}

// ==============================================================================
// Addresses and Script Hashes
// ==============================================================================

pub fn stats_json(funded: u64, spent: u64, tx_count: u64) -> Value {
    json!({
        "funded_txo_count": tx_count,
        "funded_txo_sum": funded,
        "spent_txo_count": tx_count.saturating_sub(1),
        "spent_txo_sum": spent,
        "tx_count": tx_count
    })
}

pub fn address_info_json(address: &str) -> Value {
    json!({
        "address": address,
        "chain_stats": stats_json(120_000, 20_000, 4),
        "mempool_stats": stats_json(0, 0, 0)
    })
}

pub fn script_hash_info_json(hash: &str) -> Value {
    json!({
        "scripthash": hash,
        "chain_stats": stats_json(120_000, 20_000, 4),
        "mempool_stats": stats_json(5_000, 0, 1)
    })
}

pub fn utxo_json(txid: &str, vout: u32, value: u64) -> Value {
    json!({
        "txid": txid,
        "vout": vout,
        "status": status_json(800_000),
        "value": value
    })
}

// ==============================================================================
// Blocks
// ==============================================================================

pub fn block_json(id: &str, height: u32) -> Value {
    json!({
        "id": id,
        "height": height,
        "version": 536_870_912,
        "timestamp": 1_690_168_629,
        "tx_count": 3721,
        "size": 1_597_465,
        "weight": 3_993_013,
        "merkle_root": "0b33a4ff2d2a3c7a1bb7a3b2a64bbc2f0e4a9fb0d8b6b0c3b3fbf2a4d9a5c6e1",
        "previousblockhash": "000000000000000000038b2b4a0c4fbe2c1ecc8a3c2e29b7d0b0f6d2f8f1e2a3",
        "mediantime": 1_690_165_851,
        "nonce": 2_940_407_744u32,
        "bits": 386_236_009,
        "difficulty": 53_911_173_001_054.59
    })
}

pub fn block_status_json(height: u32) -> Value {
    json!({
        "in_best_chain": true,
        "height": height,
        "next_best": "00000000000000000001b3c2a36f1a6a4d2c1b0a9f8e7d6c5b4a392817160504"
    })
}

// ==============================================================================
// Mempool and Fees
// ==============================================================================

pub fn mempool_statistics_json() -> Value {
    json!({
        "count": 4,
        "vsize": 1_240,
        "total_fee": 12_400,
        "fee_histogram": [[12.5, 560], [8.0, 680]]
    })
}

pub fn mempool_recent_json(txid: &str) -> Value {
    json!([{ "txid": txid, "fee": 1410, "vsize": 141, "value": 80_000 }])
}

pub fn fee_estimates_json() -> Value {
    json!({ "1": 20.5, "3": 15.1, "6": 10.0, "144": 1.02 })
}
