//! Arrangement strategies for distributing children along an axis

/// Distributes children along a main axis.
pub trait Arrangement {
    /// Writes the main-axis position of each child into `out_positions`.
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]);

    /// Fixed space inserted between adjacent children; counted when a
    /// container wraps its content.
    fn spacing(&self) -> f32 {
        0.0
    }

    /// Main-axis size a container needs to fit `sizes` without extra room.
    fn content_size(&self, sizes: &[f32]) -> f32 {
        let gaps = sizes.len().saturating_sub(1) as f32;
        sizes.iter().sum::<f32>() + self.spacing() * gaps
    }
}

/// Compose-style linear arrangements.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LinearArrangement {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    /// Fixed gap between children in dp, packed at the leading edge.
    SpacedBy(f32),
}

impl LinearArrangement {
    pub fn spaced_by(spacing: f32) -> Self {
        Self::SpacedBy(spacing)
    }

    /// Converts a dp gap to pixels.
    pub fn scaled(self, density: f32) -> Self {
        match self {
            LinearArrangement::SpacedBy(spacing) => LinearArrangement::SpacedBy(spacing * density),
            other => other,
        }
    }

    /// Leading offset and gap for `count` children with `remaining` free space.
    fn start_and_gap(&self, remaining: f32, count: usize) -> (f32, f32) {
        let count_f = count as f32;
        match *self {
            LinearArrangement::Start => (0.0, 0.0),
            LinearArrangement::End => (remaining, 0.0),
            LinearArrangement::Center => (remaining / 2.0, 0.0),
            LinearArrangement::SpaceBetween if count > 1 => (0.0, remaining / (count_f - 1.0)),
            LinearArrangement::SpaceBetween => (0.0, 0.0),
            LinearArrangement::SpaceAround => {
                let gap = remaining / count_f;
                (gap / 2.0, gap)
            }
            LinearArrangement::SpaceEvenly => {
                let gap = remaining / (count_f + 1.0);
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
        let remaining = total_size - sizes.iter().sum::<f32>();
        let (start, gap) = self.start_and_gap(remaining, sizes.len());

        let mut cursor = start;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + gap;
        }
    }

    fn spacing(&self) -> f32 {
        match self {
            LinearArrangement::SpacedBy(spacing) => *spacing,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
