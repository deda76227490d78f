//! The five operation handlers.
//!
//! Each handler is a single-step state transition: validate arguments,
//! touch the store through the stub, return the success payload. Failures
//! are terminal for the invocation; the dispatcher converts them into
//! failure responses. No handler retries, and none holds state beyond the
//! invocation.

use keystone_primitives::{
    amount_from_bytes, amount_to_bytes, ContractError, ContractResult, QueryResponse, LOG_INFO,
};

use crate::stub::LedgerStub;
use crate::validation::{expect_arity, parse_amount, require_key};

/// `init` — create or overwrite an entity.
///
/// Args: `[key, value]`. The write is an unconditional overwrite; `init`
/// is deliberately not guarded against re-initializing an existing key.
/// Returns an empty payload.
pub fn init(stub: &mut dyn LedgerStub, args: &[String]) -> ContractResult<Vec<u8>> {
    expect_arity(args, 2)?;
    let key = require_key(&args[0])?;
    let amount = parse_amount(&args[1])?;

    stub.state_put(key, &amount_to_bytes(amount))?;
    stub.log(LOG_INFO, &format!("initialized {} = {}", key, amount));

    Ok(Vec::new())
}

/// `query` — read-only lookup of an entity.
///
/// Args: `[key]`. The payload is the raw stored bytes; the structured
/// `{"Name","Amount"}` form is recorded as the query-response log line.
/// A store failure and a store miss are distinguishable failures, so the
/// caller can retry one and not the other.
pub fn query(stub: &mut dyn LedgerStub, args: &[String]) -> ContractResult<Vec<u8>> {
    expect_arity(args, 1)?;
    let key = require_key(&args[0])?;

    let bytes = stub
        .state_get(key)
        .map_err(|_| ContractError::StateReadFailed {
            key: key.to_string(),
        })?
        .ok_or_else(|| ContractError::MissingValue {
            key: key.to_string(),
        })?;

    // Stored values must be decimal text; anything else is corrupt state.
    if amount_from_bytes(&bytes).is_none() {
        return Err(ContractError::CorruptValue {
            key: key.to_string(),
        });
    }

    let response = QueryResponse {
        name: key.to_string(),
        amount: String::from_utf8_lossy(&bytes).into_owned(),
    };
    stub.log(LOG_INFO, &format!("Query Response:{}", response.to_json()));

    Ok(bytes)
}

/// `update` — overwrite an entity and return platform-confirmed state.
///
/// Args: `[key, newValue]`. The write behaves exactly like `init` (no
/// existence check); the key is then immediately re-read so the caller
/// receives the bytes the store actually holds, not just the value it
/// sent. A post-write miss yields an empty payload rather than an error;
/// the write directly above makes that unreachable.
pub fn update(stub: &mut dyn LedgerStub, args: &[String]) -> ContractResult<Vec<u8>> {
    expect_arity(args, 2)?;
    let key = require_key(&args[0])?;
    let amount = parse_amount(&args[1])?;

    stub.state_put(key, &amount_to_bytes(amount))?;

    let fresh = stub
        .state_get(key)
        .map_err(|_| ContractError::StateReadFailed {
            key: key.to_string(),
        })?
        .unwrap_or_default();
    stub.log(LOG_INFO, &format!("updated {} = {}", key, amount));

    Ok(fresh)
}

/// `delete` — remove an entity.
///
/// Args: `[key]`. Removal is idempotent at the store layer; deleting an
/// absent key succeeds, and only a store failure is an error. Returns an
/// empty payload.
pub fn delete(stub: &mut dyn LedgerStub, args: &[String]) -> ContractResult<Vec<u8>> {
    expect_arity(args, 1)?;
    let key = require_key(&args[0])?;

    stub.state_delete(key)
        .map_err(|_| ContractError::StateDeleteFailed)?;
    stub.log(LOG_INFO, &format!("deleted {}", key));

    Ok(Vec::new())
}

/// `putMultiple` — write the same value a given number of times.
///
/// Args: `[key, value, times]`. Every write carries the same literal
/// bytes — this exercises write repetition in the store, not a counter.
/// `times <= 0` performs no writes and still succeeds. The first failing
/// write aborts the loop and surfaces that write's error; earlier writes
/// stay committed, since envelope-level rollback belongs to the platform.
pub fn put_multiple(stub: &mut dyn LedgerStub, args: &[String]) -> ContractResult<Vec<u8>> {
    expect_arity(args, 3)?;
    let key = require_key(&args[0])?;
    let amount = parse_amount(&args[1])?;
    let times = parse_amount(&args[2])?;

    let value = amount_to_bytes(amount);
    for _ in 0..times {
        stub.state_put(key, &value)?;
    }
    stub.log(
        LOG_INFO,
        &format!("state put {} times for {}", times, key),
    );

    Ok(Vec::new())
}
