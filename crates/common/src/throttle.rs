//! Frame-skip throttling.
//!
//! A modulo counter that selects every Nth frame. Purely a CPU knob; skipped
//! frames never reach the landmark source.

/// Selects one frame out of every `stride`.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    stride: u32,
    counter: u32,
}

impl FrameThrottle {
    /// Create a throttle. A stride of 0 is treated as 1.
    pub fn new(stride: u32) -> Self {
        Self {
            stride: stride.max(1),
            counter: 0,
        }
    }

    /// Advance the counter by one frame. Returns true when this frame should
    /// be processed, i.e. when the counter wraps back to zero.
    pub fn should_process(&mut self) -> bool {
        self.counter = (self.counter + 1) % self.stride;
        self.counter == 0
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Restart the stride from the next frame.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

impl Default for FrameThrottle {
    fn default() -> Self {
        Self::new(1)
    }
}
