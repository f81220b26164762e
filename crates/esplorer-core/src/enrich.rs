//! Derived facts that explorers leave to the client.
//!
//! Script classification, virtual size and fee rate.

use bitcoin::Script;

use crate::types::ScriptType;

// ==============================================================================
// Script Classification
// ==============================================================================

/// Classify a script using the `bitcoin` crate's built-in detection methods.
#[must_use]
pub fn classify_script(script: &Script) -> ScriptType {
    if script.is_p2pkh() {
        ScriptType::P2pkh
    } else if script.is_p2sh() {
        ScriptType::P2sh
    } else if script.is_p2wpkh() {
        ScriptType::P2wpkh
    } else if script.is_p2wsh() {
        ScriptType::P2wsh
    } else if script.is_p2tr() {
        ScriptType::P2tr
    } else if script.is_p2pk() {
        ScriptType::P2pk
    } else if script.is_multisig() {
        ScriptType::BareMultisig
    } else if script.is_op_return() {
        ScriptType::OpReturn
    } else {
        ScriptType::Unknown
    }
}

// ==============================================================================
// Size and Feerate
// ==============================================================================

/// Virtual size in vbytes: weight / 4, rounded up.
#[must_use]
pub fn weight_to_vsize(weight: u64) -> u64 {
    weight.div_ceil(4)
}

/// Fee rate in sat/vB. `None` for a zero-weight transaction.
#[must_use]
pub fn compute_fee_rate(fee_sats: u64, weight: u64) -> Option<f64> {
    let vsize = weight_to_vsize(weight);
    if vsize == 0 {
        return None;
    }
    Some(fee_sats as f64 / vsize as f64)
}
