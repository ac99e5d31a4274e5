//! Arrangement strategies for distributing children along an axis

/// Trait implemented by arrangement strategies that distribute children on an axis.
pub trait Arrangement {
    /// Writes the leading position of each child given the available space and their sizes.
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]);
}

/// Linear arrangements as offered by Row and Column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinearArrangement {
    /// Pack children at the leading edge.
    Start,
    /// Pack children so the last one touches the trailing edge.
    End,
    /// Pack children as a centered block.
    Center,
    /// Free space goes between children only.
    SpaceBetween,
    /// Free space goes around each child; edges get half a gap.
    SpaceAround,
    /// Free space is split into equal gaps, edges included.
    SpaceEvenly,
    /// Fixed gap between neighbours.
    SpacedBy(f32),
}

impl Default for LinearArrangement {
    fn default() -> Self {
        LinearArrangement::Start
    }
}

impl LinearArrangement {
    pub fn spaced_by(spacing: f32) -> Self {
        Self::SpacedBy(spacing)
    }

    /// Fixed spacing this arrangement inserts between children, if any.
    pub fn spacing(&self) -> f32 {
        match self {
            LinearArrangement::SpacedBy(value) => value.max(0.0),
            _ => 0.0,
        }
    }

    /// Leading offset and inter-child gap for `count` children with `remaining` free space.
    fn start_and_gap(&self, remaining: f32, count: usize) -> (f32, f32) {
        let count = count as f32;
        match *self {
            LinearArrangement::Start => (0.0, 0.0),
            LinearArrangement::End => (remaining, 0.0),
            LinearArrangement::Center => (remaining / 2.0, 0.0),
            LinearArrangement::SpaceBetween if count > 1.0 => (0.0, remaining / (count - 1.0)),
            LinearArrangement::SpaceBetween => (0.0, 0.0),
            LinearArrangement::SpaceAround => {
                let gap = remaining / count;
                (gap / 2.0, gap)
            }
            LinearArrangement::SpaceEvenly => {
                let gap = remaining / (count + 1.0);
                (gap, gap)
            }
            LinearArrangement::SpacedBy(spacing) => (0.0, spacing),
        }
    }
}

impl Arrangement for LinearArrangement {
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        if sizes.is_empty() {
            return;
        }

        let occupied: f32 = sizes.iter().sum();
        let (start, gap) = self.start_and_gap(total_size - occupied, sizes.len());

        let mut cursor = start;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + gap;
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
