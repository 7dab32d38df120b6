use std::collections::VecDeque;

use nalgebra::Vector3;

/// Bounded [History] of past epochs, most recent last.
/// Oldest entries are evicted once the depth is exceeded.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    depth: usize,
    positions: VecDeque<Vector3<f64>>,
    clock_biases: VecDeque<f64>,
    pseudo_ranges: VecDeque<Vec<f64>>,
}

impl History {
    /// Creates an empty [History] retaining up to `depth` epochs.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            positions: VecDeque::with_capacity(depth + 1),
            clock_biases: VecDeque::with_capacity(depth + 1),
            pseudo_ranges: VecDeque::with_capacity(depth + 1),
        }
    }

    /// Appends a new epoch
    pub fn push(&mut self, position: Vector3<f64>, clock_bias_m: f64, pseudo_ranges: &[f64]) {
        self.positions.push_back(position);
        self.clock_biases.push_back(clock_bias_m);
        self.pseudo_ranges.push_back(pseudo_ranges.to_vec());

        while self.positions.len() > self.depth {
            self.positions.pop_front();
            self.clock_biases.pop_front();
            self.pseudo_ranges.pop_front();
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Most recent (position, clock bias, pseudo ranges) epoch
    pub fn latest(&self) -> Option<(&Vector3<f64>, f64, &[f64])> {
        let position = self.positions.back()?;
        let clock_bias = self.clock_biases.back()?;
        let pseudo_ranges = self.pseudo_ranges.back()?;
        Some((position, *clock_bias, pseudo_ranges.as_slice()))
    }

    pub fn positions(&self) -> &VecDeque<Vector3<f64>> {
        &self.positions
    }

    pub fn clock_biases(&self) -> &VecDeque<f64> {
        &self.clock_biases
    }

    pub fn pseudo_ranges(&self) -> &VecDeque<Vec<f64>> {
        &self.pseudo_ranges
    }
}
