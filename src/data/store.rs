//! Series Store Module
//! Index-aligned reading sequences and the window slices cut from them.

use serde::Serialize;

/// In-memory table of parsed readings.
///
/// All four sequences always have the same length; `push_reading` is the only
/// way to grow them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    labels: Vec<String>,
    heart_rate: Vec<f64>,
    gsr: Vec<f64>,
    cortisol: Vec<f64>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one reading to every sequence.
    pub fn push_reading(&mut self, label: String, heart_rate: f64, gsr: f64, cortisol: f64) {
        self.labels.push(label);
        self.heart_rate.push(heart_rate);
        self.gsr.push(gsr);
        self.cortisol.push(cortisol);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Copy out `[start, min(start + window_size, len))` of every sequence.
    ///
    /// A `start` beyond the end yields an empty slice anchored at `len`.
    pub fn window(&self, start: usize, window_size: usize) -> WindowSlice {
        let len = self.len();
        let start = start.min(len);
        let end = start.saturating_add(window_size).min(len);

        WindowSlice {
            start,
            end,
            labels: self.labels[start..end].to_vec(),
            heart_rate: self.heart_rate[start..end].to_vec(),
            gsr: self.gsr[start..end].to_vec(),
            cortisol: self.cortisol[start..end].to_vec(),
        }
    }
}

#[cfg(test)]
impl SeriesStore {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn heart_rate(&self) -> &[f64] {
        &self.heart_rate
    }

    pub fn gsr(&self) -> &[f64] {
        &self.gsr
    }

    pub fn cortisol(&self) -> &[f64] {
        &self.cortisol
    }
}

/// Readings visible during one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowSlice {
    pub start: usize,
    pub end: usize,
    pub labels: Vec<String>,
    pub heart_rate: Vec<f64>,
    pub gsr: Vec<f64>,
    pub cortisol: Vec<f64>,
}

impl WindowSlice {
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
