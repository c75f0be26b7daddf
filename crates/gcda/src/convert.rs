//! Decoded stream to JSON summary conversion.
//!
//! Host-side reporting helper: renders a decoded data stream as a
//! `serde_json::Value` with gcc's counter-kind names spelled out.

use serde_json::{json, Value as JsonValue};

use crate::constants::CounterKind;
use crate::decoder::GcdaFile;

/// Converts a decoded stream into a readable JSON summary.
pub fn gcda_to_json(file: &GcdaFile) -> JsonValue {
    let functions: Vec<JsonValue> = file
        .functions
        .iter()
        .map(|func| {
            let counters: Vec<JsonValue> = func
                .counters
                .iter()
                .map(|block| {
                    json!({
                        "kind": kind_name(block.kind),
                        "values": block.values,
                    })
                })
                .collect();
            json!({
                "ident": func.ident,
                "lineno_checksum": func.lineno_checksum,
                "cfg_checksum": func.cfg_checksum,
                "counters": counters,
            })
        })
        .collect();
    json!({
        "version": file.version,
        "stamp": file.stamp,
        "checksum": file.checksum,
        "functions": functions,
    })
}

fn kind_name(kind: usize) -> JsonValue {
    match CounterKind::from_index(kind) {
        Some(k) => JsonValue::from(k.name()),
        None => JsonValue::from(kind as u64),
    }
}
