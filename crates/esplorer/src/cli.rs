use clap::{Parser, Subcommand};

/// Query an Esplora-compatible block explorer from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Explorer API base URL.
    #[arg(
        long,
        global = true,
        default_value = "https://blockstream.info/api",
        env = "ESPLORER_URL"
    )]
    pub url: String,

    /// Log every request and response body.
    #[arg(long, global = true, env = "ESPLORER_DEBUG")]
    pub debug: bool,

    /// TCP/TLS connect timeout in seconds (transport default if omitted).
    #[arg(long, global = true)]
    pub connect_timeout_secs: Option<u64>,

    /// Whole-request timeout in seconds (transport default if omitted).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transaction by id.
    Tx { txid: String },
    /// Confirmation status of a transaction.
    TxStatus { txid: String },
    /// Raw transaction hex.
    TxHex { txid: String },
    /// Merkle inclusion proof of a transaction.
    TxMerkleProof { txid: String },
    /// Spend status of one output.
    TxOutspend { txid: String, vout: u32 },
    /// Spend status of every output.
    TxOutspends { txid: String },

    /// Funding/spending totals of an address.
    Address { address: String },
    /// Transactions of an address, optionally paging after `--after`.
    AddressTxs {
        address: String,
        /// Last txid of the previous page.
        #[arg(long)]
        after: Option<String>,
    },
    /// Unconfirmed transactions of an address.
    AddressMempool { address: String },
    /// Unspent outputs of an address.
    AddressUtxo { address: String },

    /// Funding/spending totals of a script hash.
    Scripthash { hash: String },
    /// Transactions of a script hash, optionally paging after `--after`.
    ScripthashTxs {
        hash: String,
        /// Last txid of the previous page.
        #[arg(long)]
        after: Option<String>,
    },
    /// Unconfirmed transactions of a script hash.
    ScripthashMempool { hash: String },
    /// Unspent outputs of a script hash.
    ScripthashUtxo { hash: String },

    /// Block header summary by hash.
    Block { hash: String },
    /// Best-chain membership of a block.
    BlockStatus { hash: String },
    /// Transactions of a block starting at `--start`.
    BlockTxs {
        hash: String,
        #[arg(long, default_value = "0")]
        start: u32,
    },
    /// All transaction ids of a block.
    BlockTxids { hash: String },
    /// Transaction id at a position within a block.
    BlockTxid { hash: String, index: u32 },
    /// Hash of the best-chain block at a height.
    BlockHash { height: u32 },
    /// Recent blocks ending at a height.
    Blocks { height: u32 },
    /// Current best-chain height.
    TipHeight,
    /// Current best-chain block hash.
    TipHash,

    /// Mempool size and fee histogram.
    Mempool,
    /// Every txid currently in the mempool.
    MempoolTxids,
    /// Most recent mempool entries.
    MempoolRecent,
    /// Fee rate per confirmation target.
    FeeEstimates {
        /// Only print the rate for this confirmation target.
        #[arg(long)]
        target: Option<u16>,
    },
}
