//! Per-shell frame accounting.

use std::collections::VecDeque;

use animlab_core::NANOS_PER_SECOND;

/// Number of frames to average for the frame rate.
const FRAME_HISTORY_SIZE: usize = 60;

#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    frame_times: VecDeque<u64>,
    frame_count: u64,
    render_count: u64,
}

impl FrameStats {
    pub(crate) fn record_frame(&mut self, frame_time_nanos: u64) {
        self.frame_times.push_back(frame_time_nanos);
        self.frame_count += 1;
        while self.frame_times.len() > FRAME_HISTORY_SIZE {
            self.frame_times.pop_front();
        }
    }

    pub(crate) fn record_render(&mut self) {
        self.render_count += 1;
    }

    /// Frames driven since the shell started.
    pub fn frames(&self) -> u64 {
        self.frame_count
    }

    /// Renders (screen re-evaluations) since the shell started.
    pub fn renders(&self) -> u64 {
        self.render_count
    }

    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.frame_times.back().copied()
    }

    /// Average frame rate over the recent history.
    pub fn fps(&self) -> f32 {
        let (Some(first), Some(last)) = (self.frame_times.front(), self.frame_times.back()) else {
            return 0.0;
        };
        let span = last.saturating_sub(*first);
        if span == 0 {
            return 0.0;
        }
        (self.frame_times.len() - 1) as f32 * NANOS_PER_SECOND as f32 / span as f32
    }
}
