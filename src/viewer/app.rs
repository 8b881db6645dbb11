//! Interactive viewer state

use crossterm::event::KeyCode;
use tracing::warn;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::slider::TimeSlider;
use crate::snapshot::Snapshot;

/// Slider positions moved by PageUp/PageDown
const PAGE: usize = 10;

pub struct App {
    dataset: Dataset,
    slider: TimeSlider,
    /// Snapshot under the slider, or why it could not be built
    current: std::result::Result<Snapshot, String>,
    pub should_quit: bool,
}

impl App {
    /// Fails with `EmptyDataset` when there is nothing to scrub through
    pub fn new(dataset: Dataset) -> Result<Self> {
        let slider = TimeSlider::new(dataset.range()?);
        let mut app = Self {
            dataset,
            slider,
            current: Err(String::new()),
            should_quit: false,
        };
        app.refresh();
        Ok(app)
    }

    pub fn slider(&self) -> &TimeSlider {
        &self.slider
    }

    pub fn rows(&self) -> usize {
        self.dataset.len()
    }

    pub fn snapshot(&self) -> std::result::Result<&Snapshot, &str> {
        self.current.as_ref().map_err(String::as_str)
    }

    /// Apply a key press, recomputing the snapshot when the slider moved
    pub fn handle_key(&mut self, code: KeyCode) {
        let before = self.slider.position();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Right | KeyCode::Char('l') => self.slider.forward(1),
            KeyCode::Left | KeyCode::Char('h') => self.slider.back(1),
            KeyCode::PageUp => self.slider.forward(PAGE),
            KeyCode::PageDown => self.slider.back(PAGE),
            KeyCode::End => self.slider.last(),
            KeyCode::Home => self.slider.first(),
            _ => {}
        }
        if self.slider.position() != before {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        let requested = self.slider.value();
        self.current = self.dataset.select(requested).map_err(|e| {
            warn!(requested, error = %e, "Failed to build snapshot");
            e.to_string()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Row;
    use crate::error::ViewerError;

    fn quoted(time: f64) -> Row {
        Row {
            price: Some(100.0 + time),
            bid_ask_spread: Some(0.5),
            ..Row::new(time)
        }
    }

    #[test]
    fn test_new_selects_first_row() {
        let app = App::new(Dataset::from_rows(vec![quoted(0.0), quoted(1.0), quoted(2.0)])).unwrap();
        assert_eq!(app.snapshot().unwrap().time, 0.0);
        assert_eq!(app.rows(), 3);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(
            App::new(Dataset::default()),
            Err(ViewerError::EmptyDataset)
        ));
    }

    #[test]
    fn test_keys_move_selection() {
        // step = 2 / 3, positions at 0, 0.67, 1.33, 2
        let mut app = App::new(Dataset::from_rows(vec![quoted(0.0), quoted(1.0), quoted(2.0)])).unwrap();
        app.handle_key(KeyCode::Right);
        assert_eq!(app.snapshot().unwrap().time, 1.0);
        app.handle_key(KeyCode::End);
        assert_eq!(app.snapshot().unwrap().time, 2.0);
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.snapshot().unwrap().time, 0.0);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_missing_field_is_reported_per_row() {
        let mut app = App::new(Dataset::from_rows(vec![quoted(0.0), Row::new(1.0)])).unwrap();
        assert!(app.snapshot().is_ok());
        app.handle_key(KeyCode::End);
        let message = app.snapshot().unwrap_err();
        assert!(message.contains("BidAskSpread"));
        app.handle_key(KeyCode::Home);
        assert!(app.snapshot().is_ok());
    }
}
