use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use chainseal_core::TransactionData;

use crate::error::ExplorerError;

// OP_RETURN followed by a 32-byte push.
const OP_RETURN_PREFIX: &str = "6a20";

fn missing(what: &str) -> ExplorerError {
    ExplorerError::Parse(format!("missing {what}"))
}

fn op_return_payload(script: &str) -> Result<String, ExplorerError> {
    script
        .strip_prefix(OP_RETURN_PREFIX)
        .map(str::to_string)
        .ok_or_else(|| ExplorerError::Parse(format!("not a 32-byte op_return script: {script}")))
}

fn unix_time(seconds: i64) -> Result<DateTime<Utc>, ExplorerError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| ExplorerError::Parse(format!("timestamp {seconds} out of range")))
}

fn rfc3339_time(value: &str) -> Result<DateTime<Utc>, ExplorerError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ExplorerError::Parse(format!("bad timestamp '{value}': {e}")))
}

fn hex_number(value: &str) -> Result<i64, ExplorerError> {
    i64::from_str_radix(value.trim_start_matches("0x"), 16)
        .map_err(|e| ExplorerError::Parse(format!("bad hex number '{value}': {e}")))
}

/// Esplora transaction format (blockstream.info, mempool.space).
pub fn parse_esplora(value: &Value) -> Result<TransactionData, ExplorerError> {
    let outputs = value
        .get("vout")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("outputs"))?;
    let script = outputs
        .iter()
        .find(|out| out.get("scriptpubkey_type").and_then(Value::as_str) == Some("op_return"))
        .and_then(|out| out.get("scriptpubkey").and_then(Value::as_str))
        .ok_or_else(|| missing("op_return output"))?;
    let remote_hash = op_return_payload(script)?;

    let issuing_address = value
        .pointer("/vin/0/prevout/scriptpubkey_address")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("input address"))?
        .to_string();

    let time = unix_time(
        value
            .pointer("/status/block_time")
            .and_then(Value::as_i64)
            .ok_or_else(|| missing("block time"))?,
    )?;

    let revoked_addresses: HashSet<String> = outputs
        .iter()
        .filter_map(|out| out.get("scriptpubkey_address").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    Ok(TransactionData {
        remote_hash,
        issuing_address,
        time,
        revoked_addresses,
    })
}

/// Blockcypher Bitcoin transaction format.
pub fn parse_blockcypher_btc(value: &Value) -> Result<TransactionData, ExplorerError> {
    let outputs = value
        .get("outputs")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("outputs"))?;
    let op_return = outputs
        .iter()
        .find(|out| {
            out.get("script")
                .and_then(Value::as_str)
                .is_some_and(|script| script.starts_with(OP_RETURN_PREFIX))
        })
        .ok_or_else(|| missing("op_return output"))?;
    let remote_hash = match op_return.get("data_hex").and_then(Value::as_str) {
        Some(data_hex) => data_hex.to_string(),
        None => op_return_payload(
            op_return
                .get("script")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )?,
    };

    let issuing_address = value
        .pointer("/inputs/0/addresses/0")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("input address"))?
        .to_string();

    let confirmed = value
        .get("confirmed")
        .or_else(|| value.get("received"))
        .and_then(Value::as_str)
        .ok_or_else(|| missing("confirmation time"))?;
    let time = rfc3339_time(confirmed)?;

    let revoked_addresses: HashSet<String> = outputs
        .iter()
        .filter_map(|out| out.get("addresses").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();

    Ok(TransactionData {
        remote_hash,
        issuing_address,
        time,
        revoked_addresses,
    })
}

/// Blockcypher Ethereum transaction format. Addresses come unprefixed.
pub fn parse_blockcypher_eth(value: &Value) -> Result<TransactionData, ExplorerError> {
    let remote_hash = value
        .pointer("/outputs/0/script")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("output script"))?
        .to_string();

    let issuing_address = value
        .pointer("/inputs/0/addresses/0")
        .and_then(Value::as_str)
        .map(|address| format!("0x{}", address.to_lowercase()))
        .ok_or_else(|| missing("input address"))?;

    let confirmed = value
        .get("confirmed")
        .or_else(|| value.get("received"))
        .and_then(Value::as_str)
        .ok_or_else(|| missing("confirmation time"))?;
    let time = rfc3339_time(confirmed)?;

    Ok(TransactionData {
        remote_hash,
        issuing_address,
        time,
        revoked_addresses: HashSet::new(),
    })
}

/// Raw JSON-RPC transaction plus its enclosing block (Etherscan/Arbiscan
/// proxy endpoints).
pub fn parse_rpc_transaction(tx: &Value, block: &Value) -> Result<TransactionData, ExplorerError> {
    let input = tx
        .pointer("/result/input")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("transaction input data"))?;
    let remote_hash = input.trim_start_matches("0x").to_string();
    if remote_hash.is_empty() {
        return Err(missing("anchored hash in transaction input"));
    }

    let issuing_address = tx
        .pointer("/result/from")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("sender address"))?
        .to_lowercase();

    let timestamp = block
        .pointer("/result/timestamp")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("block timestamp"))?;
    let time = unix_time(hex_number(timestamp)?)?;

    Ok(TransactionData {
        remote_hash,
        issuing_address,
        time,
        revoked_addresses: HashSet::new(),
    })
}

/// Blockscout `gettxinfo` format (bloxberg explorer).
pub fn parse_blockscout(value: &Value) -> Result<TransactionData, ExplorerError> {
    let result = value.get("result").ok_or_else(|| missing("result"))?;

    let input = result
        .get("input")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("transaction input data"))?;
    let remote_hash = input.trim_start_matches("0x").to_string();
    if remote_hash.is_empty() {
        return Err(missing("anchored hash in transaction input"));
    }

    let issuing_address = result
        .get("from")
        .and_then(Value::as_str)
        .ok_or_else(|| missing("sender address"))?
        .to_lowercase();

    let seconds = match result.get("timeStamp") {
        Some(Value::String(s)) if s.starts_with("0x") => hex_number(s)?,
        Some(Value::String(s)) => s
            .parse::<i64>()
            .map_err(|e| ExplorerError::Parse(format!("bad timestamp '{s}': {e}")))?,
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| missing("timestamp"))?,
        _ => return Err(missing("timestamp")),
    };
    let time = unix_time(seconds)?;

    Ok(TransactionData {
        remote_hash,
        issuing_address,
        time,
        revoked_addresses: HashSet::new(),
    })
}
