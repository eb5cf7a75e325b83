/// Caret blink phase driven by accumulated frame time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretBlink {
    blink_ms: u64,
    elapsed_ms: u64,
    visible: bool,
}

impl CaretBlink {
    pub fn new(blink_ms: u64) -> Self {
        Self {
            blink_ms: blink_ms.max(1),
            elapsed_ms: 0,
            visible: true,
        }
    }

    /// Advance by `dt_ms`. Returns true when visibility flipped.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < self.blink_ms {
            return false;
        }
        let flips = self.elapsed_ms / self.blink_ms;
        self.elapsed_ms %= self.blink_ms;
        if flips % 2 == 1 {
            self.visible = !self.visible;
            true
        } else {
            false
        }
    }

    /// Show the caret and restart the phase (after input).
    pub fn reset(&mut self) {
        self.visible = true;
        self.elapsed_ms = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
