/// How long a scroll container must stay quiet before scrolling is considered finished.
pub const DEFAULT_SCROLL_RESET_DELAY_MS: u64 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Tracks the raw scroll position reported by a UI scroll container, plus the `is_scrolling`
/// flag and its debounced reset.
///
/// The tracker never reads a clock; adapters pass `now_ms` with every event and tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTracker {
    scroll_top: u64,
    is_scrolling: bool,
    direction: Option<ScrollDirection>,
    last_event_ms: Option<u64>,
    reset_delay_ms: u64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            scroll_top: 0,
            is_scrolling: false,
            direction: None,
            last_event_ms: None,
            reset_delay_ms: DEFAULT_SCROLL_RESET_DELAY_MS,
        }
    }

    pub fn with_reset_delay_ms(mut self, reset_delay_ms: u64) -> Self {
        self.reset_delay_ms = reset_delay_ms;
        self
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn reset_delay_ms(&self) -> u64 {
        self.reset_delay_ms
    }

    pub fn set_reset_delay_ms(&mut self, reset_delay_ms: u64) {
        self.reset_delay_ms = reset_delay_ms;
    }

    /// Records a scroll event.
    ///
    /// Returns `false` (and changes nothing) when the position did not move. Otherwise marks the
    /// container as scrolling and restarts the reset delay from `now_ms`.
    pub fn on_scroll_event(&mut self, scroll_top: u64, now_ms: u64) -> bool {
        if scroll_top == self.scroll_top {
            return false;
        }
        self.direction = Some(if scroll_top > self.scroll_top {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        });
        self.scroll_top = scroll_top;
        self.is_scrolling = true;
        self.last_event_ms = Some(now_ms);
        true
    }

    /// Clears `is_scrolling` once no event arrived for `reset_delay_ms`.
    ///
    /// Returns `true` on the tick that ends the scroll.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling {
            return false;
        }
        let Some(last) = self.last_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.reset_delay_ms {
            return false;
        }
        self.is_scrolling = false;
        self.direction = None;
        self.last_event_ms = None;
        true
    }
}
