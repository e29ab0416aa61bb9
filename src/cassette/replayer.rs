//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays interactions from a loaded cassette, serving them in recorded
/// order per `port::method` pair.
///
/// Pairs are independent: interleaving calls to different methods in a
/// different order than recorded still yields each method's own sequence.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet served for the given pair.
    #[must_use]
    pub fn remaining(&self, port: &str, method: &str) -> usize {
        self.queues.get(&(port.to_string(), method.to_string())).map_or(0, VecDeque::len)
    }

    /// Take the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair. A
    /// replay that outruns its recording cannot produce meaningful output,
    /// so the message names what was requested and what the cassette holds.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };
        queue.pop_front().unwrap_or_else(|| {
            panic!(
                "Cassette exhausted: every interaction for port={port:?} method={method:?} \
                 has been consumed"
            )
        })
    }
}
