use std::time::Duration;

use tracing::info;

use crate::engine::{Module, ProcessTime};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsReport {
    pub frames: u64,
    pub elapsed: Duration,
    pub fps: f64,
    pub average_frame_ms: f64,
}

/// Periodically reports the frame rate.
pub struct Statistics {
    interval: Duration,
    frames: u64,
    accumulated: Duration,
    reports: u64,
    last_report: Option<StatisticsReport>,
}

impl Statistics {
    /// `interval_ms` is the reporting period in milliseconds.
    pub fn new(interval_ms: u64) -> Self {
        Statistics {
            interval: Duration::from_millis(interval_ms),
            frames: 0,
            accumulated: Duration::ZERO,
            reports: 0,
            last_report: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_report(&self) -> Option<&StatisticsReport> {
        self.last_report.as_ref()
    }

    pub fn report_count(&self) -> u64 {
        self.reports
    }

    fn report(&mut self) -> StatisticsReport {
        let ms = self.accumulated.as_secs_f64() * 1000.0;
        let average_frame_ms = if self.frames > 0 {
            ms / self.frames as f64
        } else {
            0.0
        };
        let fps = if ms > 0.0 {
            self.frames as f64 * 1000.0 / ms
        } else {
            0.0
        };
        StatisticsReport {
            frames: self.frames,
            elapsed: self.accumulated,
            fps,
            average_frame_ms,
        }
    }
}

impl Module for Statistics {
    fn name(&self) -> &str {
        "statistics"
    }

    fn process(&mut self, time: &ProcessTime) {
        self.frames += 1;
        self.accumulated += time.delta;
        if self.accumulated < self.interval {
            return;
        }

        let report = self.report();
        info!(
            "{:>5.1} FPS | {:>5.2} ms/frame | {} frames in {:?}",
            report.fps, report.average_frame_ms, report.frames, report.elapsed
        );
        self.last_report = Some(report);
        self.reports += 1;
        self.frames = 0;
        self.accumulated = Duration::ZERO;
    }
}
