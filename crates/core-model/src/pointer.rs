//! Mouse gesture bookkeeping: multi-click counting and drag state.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerState {
    pub click_count: u32,
    pub last_click_ms: Option<u64>,
    /// Offset the current drag selection is anchored at.
    pub drag_anchor: Option<usize>,
    pub pressed: bool,
}

impl PointerState {
    /// Count a press at `now_ms`. Presses closer together than `interval_ms`
    /// continue the sequence; anything slower starts over at 1.
    pub fn register_press(&mut self, now_ms: u64, interval_ms: u64) -> u32 {
        self.click_count = match self.last_click_ms {
            Some(last) if now_ms >= last && now_ms - last < interval_ms => {
                self.click_count.saturating_add(1)
            }
            _ => 1,
        };
        self.last_click_ms = Some(now_ms);
        self.pressed = true;
        self.click_count
    }

    pub fn begin_drag(&mut self, anchor: usize) {
        self.drag_anchor = Some(anchor);
    }

    pub fn is_dragging(&self) -> bool {
        self.pressed && self.drag_anchor.is_some()
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.drag_anchor = None;
    }
}
