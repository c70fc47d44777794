use chrono::{DateTime, Utc};

use chainseal_core::{IssuerKeyMap, IssuerKeyRecord};

use crate::error::IdentityError;

/// Validate that the issuer key behind `address` was live when the anchoring
/// transaction happened.
///
/// The address lookup is case-insensitive. Checks run in order
/// created → revoked → expired; the first violated constraint names the
/// error. The transaction must be strictly after creation and strictly
/// before revocation/expiry.
pub fn ensure_valid_issuing_key(
    key_map: &IssuerKeyMap,
    address: &str,
    tx_time: DateTime<Utc>,
) -> Result<(), IdentityError> {
    let record = case_insensitive_get(key_map, address)
        .ok_or_else(|| IdentityError::UnknownIssuingAddress(address.to_string()))?;
    let tx_timestamp = tx_time.timestamp();

    if let Some(created) = record.created {
        if tx_timestamp <= created {
            return Err(IdentityError::KeyNotYetValid);
        }
    }
    if let Some(revoked) = record.revoked {
        if tx_timestamp >= revoked {
            return Err(IdentityError::KeyRevoked);
        }
    }
    if let Some(expires) = record.expires {
        if tx_timestamp >= expires {
            return Err(IdentityError::KeyExpired);
        }
    }
    Ok(())
}

/// Case-insensitive comparison of the derived address against the
/// transaction's issuing address.
pub fn compare_issuing_address(derived: &str, on_chain: &str) -> Result<(), IdentityError> {
    if !derived.eq_ignore_ascii_case(on_chain) {
        return Err(IdentityError::IssuingAddressMismatch);
    }
    Ok(())
}

fn case_insensitive_get<'a>(key_map: &'a IssuerKeyMap, address: &str) -> Option<&'a IssuerKeyRecord> {
    key_map
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(address))
        .map(|(_, record)| record)
}
