use crate::core::traits::IndexPicker;

/// Uniform random position for shuffle mode.
///
/// Computes `floor(random() * len)` with `random()` in `[0, 1)`:
/// - every position is equally likely, including the current one
/// - an empty list always yields 0
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIndexPicker;

impl RandomIndexPicker {
    pub fn new() -> Self {
        Self
    }
}

impl IndexPicker for RandomIndexPicker {
    fn pick(&mut self, len: usize) -> usize {
        let roll: f64 = rand::random();
        let index = (roll * len as f64).floor() as usize;

        // Keeps the index in range if rounding ever reaches 1.0
        index.min(len.saturating_sub(1))
    }
}

/// Replays a fixed list of indices, for deterministic shuffle tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: std::collections::VecDeque<usize>,
    requested: Vec<usize>,
}

#[cfg(test)]
impl ScriptedPicker {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script: script.into(),
            requested: Vec::new(),
        }
    }

    /// The `len` argument of every `pick` call so far
    pub fn requested_lengths(&self) -> &[usize] {
        &self.requested
    }
}

#[cfg(test)]
impl IndexPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.requested.push(len);
        self.script.pop_front().unwrap_or(0)
    }
}
