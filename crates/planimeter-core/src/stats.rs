//! Statistics history and number formatting for gallery cards.

/// Load state of a gallery card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Append-only history of the areas computed for one shape.
///
/// Entries grow on every recalculation and are never cleared or reordered.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    calculations: Vec<f64>,
    state: LoadState,
}

impl DisplayRecord {
    pub fn new() -> Self {
        Self {
            calculations: Vec::new(),
            state: LoadState::Loading,
        }
    }

    pub(crate) fn push(&mut self, area: f64) {
        self.calculations.push(area);
    }

    pub(crate) fn set_state(&mut self, state: LoadState) {
        self.state = state;
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Number of recalculations performed so far.
    pub fn count(&self) -> usize {
        self.calculations.len()
    }

    /// Most recently computed area.
    pub fn latest(&self) -> Option<f64> {
        self.calculations.last().copied()
    }

    /// Arithmetic mean of every area ever computed, in computation order.
    pub fn mean(&self) -> Option<f64> {
        if self.calculations.is_empty() {
            None
        } else {
            Some(self.calculations.iter().sum::<f64>() / self.calculations.len() as f64)
        }
    }
}

impl Default for DisplayRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an area for display: two decimal places, then drop a `.00`
/// suffix entirely, else drop a single trailing zero.
pub fn format_area(value: f64) -> String {
    let fixed = format!("{value:.2}");
    if let Some(head) = fixed.strip_suffix(".00") {
        head.to_string()
    } else if let Some(head) = fixed.strip_suffix('0') {
        head.to_string()
    } else {
        fixed
    }
}
