//! Slide sequencing for the player.
//!
//! Walks the experiment's slides in order. Each slide is shown according
//! to its `Repeat` mode; the showing counter (`iteration`) selects the
//! item of list-bound elements.

use eframe::egui;
use log::{debug, info, warn};

use crate::entities::{Experiment, Repeat, Slide};

/// Outcome of an advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Same slide shown again with the next iteration
    Repeat,
    /// Moved on to another slide
    Next,
    /// Past the last slide
    Finished,
}

#[derive(Debug)]
pub struct PlayerController {
    experiment: Experiment,
    slide: usize,
    iteration: usize,
    finished: bool,
}

impl PlayerController {
    pub fn new(experiment: Experiment) -> Self {
        let finished = experiment.is_empty();
        for (i, slide) in experiment.slides.iter().enumerate() {
            if matches!(slide.repeat, Repeat::UntilKey(_)) && slide.repeat.until_key().is_none() {
                warn!(
                    "Slide {} repeats {} which is no key; it is shown once",
                    i + 1,
                    slide.repeat.describe()
                );
            }
        }
        info!(
            "Player ready: '{}' with {} slides",
            experiment.name,
            experiment.len()
        );
        Self {
            experiment,
            slide: 0,
            iteration: 0,
            finished,
        }
    }

    pub fn experiment(&self) -> &Experiment {
        &self.experiment
    }

    /// Slide on screen, None once the experiment is over.
    pub fn current_slide(&self) -> Option<&Slide> {
        if self.finished {
            None
        } else {
            self.experiment.slide(self.slide)
        }
    }

    pub fn slide_index(&self) -> usize {
        self.slide
    }

    /// Showings of the current slide before this one (0 on first showing).
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handle an advance request.
    ///
    /// `key` is the key pressed, or None for a pointer click.
    /// A slide repeating until a key is left only by that key. An until
    /// name that matches no key behaves like `Once`.
    pub fn advance(&mut self, key: Option<egui::Key>) -> Step {
        let Some(slide) = self.current_slide() else {
            return Step::Finished;
        };

        let again = match &slide.repeat {
            Repeat::Once => false,
            Repeat::Times(n) => self.iteration + 1 < *n as usize,
            Repeat::UntilKey(_) => match slide.repeat.until_key() {
                Some(until) => key != Some(until),
                None => false,
            },
        };

        if again {
            self.iteration += 1;
            debug!("Slide {} iteration {}", self.slide, self.iteration);
            return Step::Repeat;
        }
        self.next_slide()
    }

    fn next_slide(&mut self) -> Step {
        self.iteration = 0;
        if self.slide + 1 >= self.experiment.len() {
            self.finished = true;
            info!("Experiment finished");
            return Step::Finished;
        }
        self.slide += 1;
        debug!("Slide {}", self.slide);
        Step::Next
    }

    /// Back to the first slide.
    pub fn restart(&mut self) {
        self.slide = 0;
        self.iteration = 0;
        self.finished = self.experiment.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experiment(repeats: Vec<Repeat>) -> Experiment {
        let mut exp = Experiment::new("t");
        exp.slides.clear();
        for (i, repeat) in repeats.into_iter().enumerate() {
            let mut slide = Slide::new(format!("Slide {}", i + 1));
            slide.repeat = repeat;
            exp.slides.push(slide);
        }
        exp
    }

    #[test]
    fn test_once_slides_advance_in_order() {
        let mut c = PlayerController::new(experiment(vec![Repeat::Once, Repeat::Once]));
        assert_eq!(c.slide_index(), 0);
        assert_eq!(c.advance(Some(egui::Key::Space)), Step::Next);
        assert_eq!(c.slide_index(), 1);
        assert_eq!(c.advance(None), Step::Finished);
        assert!(c.current_slide().is_none());
        assert_eq!(c.advance(None), Step::Finished);
    }

    #[test]
    fn test_times_repeats_with_iteration() {
        let mut c = PlayerController::new(experiment(vec![Repeat::Times(3), Repeat::Once]));
        assert_eq!(c.advance(None), Step::Repeat);
        assert_eq!(c.iteration(), 1);
        assert_eq!(c.advance(None), Step::Repeat);
        assert_eq!(c.iteration(), 2);
        assert_eq!(c.advance(None), Step::Next);
        assert_eq!(c.iteration(), 0);
        assert_eq!(c.slide_index(), 1);
    }

    #[test]
    fn test_times_zero_or_one_shows_once() {
        let mut c = PlayerController::new(experiment(vec![Repeat::Times(0), Repeat::Times(1)]));
        assert_eq!(c.advance(None), Step::Next);
        assert_eq!(c.advance(None), Step::Finished);
    }

    #[test]
    fn test_until_key_needs_that_key() {
        let mut c = PlayerController::new(experiment(vec![
            Repeat::UntilKey("Y".to_string()),
            Repeat::Once,
        ]));
        assert_eq!(c.advance(Some(egui::Key::Space)), Step::Repeat);
        assert_eq!(c.advance(None), Step::Repeat);
        assert_eq!(c.iteration(), 2);
        assert_eq!(c.advance(Some(egui::Key::Y)), Step::Next);
        assert_eq!(c.slide_index(), 1);
    }

    #[test]
    fn test_until_key_names_match_pressed_key() {
        for (stored, key) in [
            ("space", egui::Key::Space),
            ("Return", egui::Key::Enter),
            ("y", egui::Key::Y),
        ] {
            let mut c = PlayerController::new(experiment(vec![
                Repeat::UntilKey(stored.to_string()),
                Repeat::Once,
            ]));
            assert_eq!(c.advance(None), Step::Repeat, "{stored}");
            assert_eq!(c.advance(Some(key)), Step::Next, "{stored}");
        }
    }

    #[test]
    fn test_unknown_until_key_shows_once() {
        for stored in ["", "NoSuchKey"] {
            let mut c = PlayerController::new(experiment(vec![
                Repeat::UntilKey(stored.to_string()),
                Repeat::Once,
            ]));
            assert_eq!(c.advance(Some(egui::Key::Space)), Step::Next, "{stored:?}");
        }
    }

    #[test]
    fn test_empty_experiment_is_finished() {
        let mut c = PlayerController::new(experiment(vec![]));
        assert!(c.is_finished());
        assert_eq!(c.advance(None), Step::Finished);
    }

    #[test]
    fn test_restart() {
        let mut c = PlayerController::new(experiment(vec![Repeat::Once]));
        c.advance(None);
        assert!(c.is_finished());
        c.restart();
        assert!(!c.is_finished());
        assert_eq!(c.slide_index(), 0);
    }
}
