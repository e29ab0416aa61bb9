//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod entropy;
pub mod host;

pub use clock::ReplayingClock;
pub use entropy::ReplayingEntropy;
pub use host::ReplayingHostInfo;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

/// Pulls the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`.
pub(crate) fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;

    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;

    /// Builds a replayer over `(port, method, output)` triples.
    pub(crate) fn replayer(entries: &[(&str, &str, serde_json::Value)]) -> CassetteReplayer {
        let interactions = entries
            .iter()
            .enumerate()
            .map(|(seq, (port, method, output))| Interaction {
                seq: seq as u64,
                port: (*port).into(),
                method: (*method).into(),
                input: serde_json::Value::Null,
                output: output.clone(),
            })
            .collect();
        CassetteReplayer::new(&Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            version: "0.1.0".into(),
            interactions,
        })
    }
}
