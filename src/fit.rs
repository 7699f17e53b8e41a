//! Text-fit engine and font-size controls.
//!
//! Fitting is greedy and shrink-only: every pass resets the node to its
//! stylesheet size, then steps the size down by 6% until the node no longer
//! overflows its container, the floor is reached or the iteration cap is hit.
//! Nodes with a user-pinned size are never touched.

use crate::slot::SlotKind;

pub const SHRINK_FACTOR: f64 = 0.94;
pub const MIN_FONT_PX: f64 = 11.0;
pub const MAX_ITERATIONS: u32 = 40;
pub const FALLBACK_FONT_PX: f64 = 16.0;
pub const MIN_LINE_HEIGHT: f64 = 1.02;
pub const MAX_LINE_HEIGHT: f64 = 1.2;

/// A text node that can be measured and resized.
pub trait FitTarget {
    /// True when the user pinned a size through the +/- controls.
    fn is_user_sized(&self) -> bool;

    /// Drops inline sizing so the stylesheet size applies again.
    fn reset(&mut self);

    /// Current rendered size in px, `None` when unreadable.
    fn font_size(&self) -> Option<f64>;

    fn set_font_size(&mut self, px: f64);

    fn set_line_height(&mut self, ratio: f64);

    /// Content exceeds the container box on either axis.
    fn overflows(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitOutcome {
    /// Pinned by the user, left alone.
    Skipped,
    Fitted { font_size: f64, iterations: u32 },
}

pub fn fit(target: &mut impl FitTarget) -> FitOutcome {
    if target.is_user_sized() {
        return FitOutcome::Skipped;
    }
    target.reset();

    let base = target
        .font_size()
        .filter(|px| px.is_finite() && *px > 0.0)
        .unwrap_or(FALLBACK_FONT_PX);
    let mut font_size = base;
    let mut iterations = 0;

    while target.overflows() && iterations < MAX_ITERATIONS && font_size > MIN_FONT_PX {
        font_size = (font_size * SHRINK_FACTOR).max(MIN_FONT_PX);
        target.set_font_size(font_size);
        target.set_line_height((font_size / base).clamp(MIN_LINE_HEIGHT, MAX_LINE_HEIGHT));
        iterations += 1;
    }

    FitOutcome::Fitted {
        font_size,
        iterations,
    }
}

/// Range the +/- controls may move a headline within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontBounds {
    pub min: f64,
    pub max: f64,
}

impl FontBounds {
    pub fn for_kind(kind: SlotKind) -> Self {
        match kind {
            SlotKind::SmallNotice => Self { min: 10.0, max: 14.0 },
            SlotKind::Quote => Self { min: 10.0, max: 20.0 },
            _ => Self { min: 10.0, max: 999.0 },
        }
    }

    /// One px up or down from `current`; `None` when already at the bound.
    pub fn step(&self, current: f64, step: FontStep) -> Option<f64> {
        match step {
            FontStep::Increase if current < self.max => Some(current + 1.0),
            FontStep::Decrease if current > self.min => Some(current - 1.0),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStep {
    Increase,
    Decrease,
}
