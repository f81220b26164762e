pub mod api;
pub mod enrich;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use api::{EsploraApi, HttpEsploraClient};
pub use error::EsploraError;
pub use types::{Address, BlockHash, BlockHeight, ScriptHash, ScriptType, TxHex, TxId};
