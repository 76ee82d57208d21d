/// Raw measurements taken from the document on a scroll frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollView {
    pub back_to_top_visible: bool,
    pub progress: f64,
    pub active_section: Option<String>,
}

pub fn back_to_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Percentage of the scrollable distance covered, 0 when nothing scrolls.
pub fn progress_percent(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Every section whose top is within `lookahead` of the offset overwrites the
/// previous pick, so the last qualifying one in document order wins.
pub fn active_section(offset: f64, sections: &[SectionBounds], lookahead: f64) -> Option<String> {
    let mut current = None;
    for section in sections {
        if offset >= section.top - lookahead {
            current = Some(section.id.clone());
        }
    }
    current
}

impl ScrollView {
    pub fn compute(
        metrics: &ScrollMetrics,
        sections: &[SectionBounds],
        back_to_top_offset: f64,
        lookahead: f64,
    ) -> Self {
        Self {
            back_to_top_visible: back_to_top_visible(metrics.offset, back_to_top_offset),
            progress: progress_percent(metrics),
            active_section: active_section(metrics.offset, sections, lookahead),
        }
    }
}

/// Coalesces bursts of scroll events into one pending animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Option<i32>,
}

impl FrameGate {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn hold(&mut self, request_id: i32) {
        self.pending = Some(request_id);
    }

    /// Clears the gate, returning the request id that was outstanding.
    pub fn release(&mut self) -> Option<i32> {
        self.pending.take()
    }
}
