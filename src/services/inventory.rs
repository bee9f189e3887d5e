//! Inventory adjustment commands.
//!
//! Commands arrive as natural-language text of the form
//! `adjust inventory by <quantity> for <SKU|UUID>`; bulk input separates
//! commands with newlines, commas, or semicolons. Parsed adjustments are
//! applied through a [`VariantStore`], the persistence boundary.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tagpress_core::{Outcome, Status};

static ADJUSTMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)adjust inventory by (-?\d+) for (.+)").expect("adjustment regex")
});

const FORMAT_HINT: &str = "Use 'adjust inventory by [quantity] for [SKU|UUID]'";

/// One parsed adjustment instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub quantity: i64,
    pub identifier: String,
}

/// What an applied adjustment did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentReceipt {
    pub identifier: String,
    pub previous_quantity: i64,
    pub new_quantity: i64,
}

/// Results of a bulk run; parse failures abort before anything is applied,
/// so `failed` only holds unknown identifiers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkReceipt {
    pub applied: Vec<AdjustmentReceipt>,
    pub failed: Vec<String>,
}

/// The persistence boundary: look up and store a variant's on-hand
/// quantity by SKU or UUID.
pub trait VariantStore {
    fn quantity(&self, identifier: &str) -> Option<i64>;
    fn set_quantity(&mut self, identifier: &str, quantity: i64);
}

/// Parses a single adjustment command.
pub fn parse(command: &str) -> Outcome<Adjustment> {
    let input = command.trim();
    log::info!("Parsing inventory command: {input}");
    let Some(captures) = ADJUSTMENT_RE.captures(input) else {
        log::warn!("Invalid command format: {input}");
        return Outcome::error(
            format!("Invalid command format. {FORMAT_HINT}"),
            Status::Unprocessable,
        );
    };
    // Both captures are guaranteed by the regex.
    let quantity: i64 = match captures[1].parse() {
        Ok(quantity) => quantity,
        Err(_) => {
            return Outcome::error(
                format!("Quantity out of range. {FORMAT_HINT}"),
                Status::Unprocessable,
            );
        }
    };
    Outcome::success(Adjustment {
        quantity,
        identifier: captures[2].trim().to_string(),
    })
}

/// Parses a bulk command string; any malformed entry rejects the whole
/// batch.
pub fn parse_bulk(input: &str) -> Outcome<Vec<Adjustment>> {
    let commands: Vec<&str> = input
        .split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    log::info!("Found {} commands to process", commands.len());

    let mut adjustments = Vec::with_capacity(commands.len());
    for command in commands {
        let parsed = parse(command);
        match parsed.data {
            Some(adjustment) if parsed.success => adjustments.push(adjustment),
            _ => {
                return Outcome::error(
                    format!("Invalid command format: {command}. {FORMAT_HINT}"),
                    Status::Unprocessable,
                );
            }
        }
    }
    Outcome::success(adjustments)
}

/// Applies one adjustment. Quantities never drop below zero.
pub fn adjust<S: VariantStore>(
    store: &mut S,
    identifier: &str,
    delta: i64,
) -> Outcome<AdjustmentReceipt> {
    let Some(current) = store.quantity(identifier) else {
        log::warn!("No variant found for '{identifier}'");
        return Outcome::error(
            format!("No variant found for '{identifier}'"),
            Status::NotFound,
        );
    };
    let next = (current + delta).max(0);
    store.set_quantity(identifier, next);
    log::info!("Adjusted '{identifier}' from {current} to {next}");
    Outcome::success(AdjustmentReceipt {
        identifier: identifier.to_string(),
        previous_quantity: current,
        new_quantity: next,
    })
}

/// Parses and applies a single command.
pub fn process<S: VariantStore>(command: &str, store: &mut S) -> Outcome<AdjustmentReceipt> {
    if command.trim().is_empty() {
        return Outcome::error("Command cannot be empty", Status::Unprocessable);
    }
    let parsed = parse(command);
    let Some(adjustment) = parsed.data.filter(|_| parsed.success) else {
        return Outcome::error(
            parsed.error.unwrap_or_else(|| "Invalid command".to_string()),
            parsed.status,
        );
    };
    adjust(store, &adjustment.identifier, adjustment.quantity)
}

/// Parses and applies a bulk command string. Unknown identifiers are
/// recorded and skipped; the batch itself still succeeds.
pub fn process_bulk<S: VariantStore>(input: &str, store: &mut S) -> Outcome<BulkReceipt> {
    if input.trim().is_empty() {
        return Outcome::error("Command cannot be empty", Status::Unprocessable);
    }
    let parsed = parse_bulk(input);
    let Some(adjustments) = parsed.data.filter(|_| parsed.success) else {
        return Outcome::error(
            parsed.error.unwrap_or_else(|| "Invalid command".to_string()),
            parsed.status,
        );
    };

    let mut receipt = BulkReceipt::default();
    for adjustment in adjustments {
        let applied = adjust(store, &adjustment.identifier, adjustment.quantity);
        match applied.data {
            Some(entry) if applied.success => receipt.applied.push(entry),
            _ => receipt.failed.push(adjustment.identifier),
        }
    }
    log::info!(
        "Bulk adjustment applied {} of {} commands",
        receipt.applied.len(),
        receipt.applied.len() + receipt.failed.len()
    );
    Outcome::success(receipt)
}
