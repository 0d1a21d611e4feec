//! Logging observer.
//!
//! Solvers stay free of side effects; this observer turns their events into
//! records on the [`log`] facade so that any installed logger can trace a
//! solve.

use log::Level;
use sluice_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// Default log target used by [`LogObserver`].
const DEFAULT_TARGET: &str = "sluice::solve";

/// An observer that writes one log record per solver event.
///
/// It never returns an action, so attaching it cannot change a solve's result.
///
/// # Example
///
/// ```ignore
/// let solution = newton::solve(&model, &problem, x0, &config, LogObserver::new())?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl LogObserver {
    /// Creates an observer logging at [`Level::Debug`] under `sluice::solve`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            target: DEFAULT_TARGET,
        }
    }

    /// Sets the level of the emitted records.
    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Sets the target of the emitted records.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(
            target: self.target,
            self.level,
            "iter {}: x = {:.9}, residual = {:.6e}",
            event.iter(),
            event.x(),
            event.residual(),
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Mutex, Once};

    use log::{LevelFilter, Metadata, Record};

    struct Captured {
        records: Mutex<Vec<(Level, String, String)>>,
    }

    impl log::Log for Captured {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((
                    record.level(),
                    record.target().to_owned(),
                    record.args().to_string(),
                ));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: Captured = Captured {
        records: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    fn install() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger in this test binary");
            log::set_max_level(LevelFilter::Trace);
        });
    }

    struct FakeEvent {
        iter: usize,
        x: f64,
        residual: f64,
    }

    impl HasEstimate for FakeEvent {
        fn iter(&self) -> usize {
            self.iter
        }

        fn x(&self) -> f64 {
            self.x
        }
    }

    impl HasResidual for FakeEvent {
        fn residual(&self) -> f64 {
            self.residual
        }
    }

    #[test]
    fn writes_one_record_per_event() {
        install();

        let mut observer = LogObserver::new()
            .with_level(Level::Info)
            .with_target("sluice::test::writes_one_record");

        for iter in 1..=3 {
            let event = FakeEvent {
                iter,
                x: 1.25,
                residual: -0.5,
            };
            let action: Option<()> = observer.observe(&event);
            assert!(action.is_none());
        }

        let records = LOGGER.records.lock().expect("lock");
        let ours: Vec<_> = records
            .iter()
            .filter(|(_, target, _)| target == "sluice::test::writes_one_record")
            .collect();

        assert_eq!(ours.len(), 3);
        assert!(ours.iter().all(|(level, _, _)| *level == Level::Info));
        assert!(ours[0].2.starts_with("iter 1: x = 1.250000000"));
    }

    #[test]
    fn defaults_to_debug() {
        let observer = LogObserver::default();
        assert_eq!(observer, LogObserver::new().with_level(Level::Debug));
    }
}
