use crate::games::RandomSource;

/// Replays a fixed list of indices, cycling when exhausted.
pub struct ScriptedRng {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: &[usize]) -> Self {
        assert!(!values.is_empty(), "ScriptedRng needs at least one value");
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
