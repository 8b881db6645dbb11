//! Discrete time slider
//!
//! Positions are `min + k * step` for `k` in `0..=rows`, the last one clamped
//! to `max`. The positions are an even subdivision of the axis and need not
//! land on row timestamps; selection always goes through the nearest-row
//! lookup.

use crate::dataset::TimeRange;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlider {
    range: TimeRange,
    position: usize,
    last: usize,
}

impl TimeSlider {
    /// Slider parked at the start of the range
    pub fn new(range: TimeRange) -> Self {
        let last = if range.is_degenerate() { 0 } else { range.rows };
        Self {
            range,
            position: 0,
            last,
        }
    }

    pub fn range(&self) -> &TimeRange {
        &self.range
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of selectable values, at least one
    pub fn positions(&self) -> usize {
        self.last + 1
    }

    /// Time under the slider
    pub fn value(&self) -> f64 {
        self.value_at(self.position)
    }

    fn value_at(&self, position: usize) -> f64 {
        if position == self.last {
            return self.range.max;
        }
        (self.range.min + position as f64 * self.range.step).min(self.range.max)
    }

    /// Fraction of the axis covered, for gauges
    pub fn ratio(&self) -> f64 {
        if self.last == 0 {
            0.0
        } else {
            self.position as f64 / self.last as f64
        }
    }

    pub fn forward(&mut self, steps: usize) {
        self.position = self.position.saturating_add(steps).min(self.last);
    }

    pub fn back(&mut self, steps: usize) {
        self.position = self.position.saturating_sub(steps);
    }

    pub fn first(&mut self) {
        self.position = 0;
    }

    pub fn last(&mut self) {
        self.position = self.last;
    }

    /// Move to the position closest to `time`
    pub fn set_value(&mut self, time: f64) {
        if self.last == 0 || !time.is_finite() {
            self.position = 0;
            return;
        }
        let k = ((time - self.range.min) / self.range.step).round();
        self.position = if k <= 0.0 {
            0
        } else {
            (k as usize).min(self.last)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64, rows: usize) -> TimeRange {
        TimeRange {
            min,
            max,
            step: (max - min) / rows as f64,
            rows,
        }
    }

    #[test]
    fn test_starts_at_min() {
        let slider = TimeSlider::new(range(1.0, 3.0, 4));
        assert_eq!(slider.value(), 1.0);
        assert_eq!(slider.positions(), 5);
        assert_eq!(slider.ratio(), 0.0);
    }

    #[test]
    fn test_forward_and_back_clamp() {
        let mut slider = TimeSlider::new(range(0.0, 2.0, 4));
        slider.forward(1);
        assert_eq!(slider.value(), 0.5);
        slider.forward(100);
        assert_eq!(slider.value(), 2.0);
        assert_eq!(slider.ratio(), 1.0);
        slider.back(3);
        assert_eq!(slider.value(), 0.5);
        slider.back(10);
        assert_eq!(slider.position(), 0);
    }

    #[test]
    fn test_last_hits_max_exactly() {
        let mut slider = TimeSlider::new(range(0.1, 0.7, 3));
        slider.last();
        assert_eq!(slider.value(), 0.7);
    }

    #[test]
    fn test_zero_step_single_position() {
        let mut slider = TimeSlider::new(range(5.0, 5.0, 3));
        assert_eq!(slider.positions(), 1);
        slider.forward(1);
        assert_eq!(slider.position(), 0);
        assert_eq!(slider.value(), 5.0);
        slider.set_value(9.0);
        assert_eq!(slider.value(), 5.0);
        assert_eq!(slider.ratio(), 0.0);
    }

    #[test]
    fn test_set_value_snaps() {
        let mut slider = TimeSlider::new(range(0.0, 10.0, 5));
        slider.set_value(4.9);
        assert_eq!(slider.value(), 4.0);
        slider.set_value(-3.0);
        assert_eq!(slider.position(), 0);
        slider.set_value(50.0);
        assert_eq!(slider.value(), 10.0);
    }
}
