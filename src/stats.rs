use std::time::{Duration, Instant};

use cgolpaint::{Camera, Controller, RunState};

/// How often a new report is produced
const REPORT_INTERVAL: Duration = Duration::from_millis(500);
/// Window over which frames are counted for the fps figure
const RATE_WINDOW: Duration = Duration::from_secs(1);

/// Counts events and publishes the count once per [`RATE_WINDOW`]
pub struct RateCounter {
    start: Instant,
    counted: u32,
    rate: u32,
}
impl Default for RateCounter {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            counted: 0,
            rate: 0,
        }
    }
}
impl RateCounter {
    pub fn update(&mut self) {
        self.counted += 1;
        if self.start.elapsed() >= RATE_WINDOW {
            self.start = Instant::now();
            self.rate = self.counted;
            self.counted = 0;
        }
    }

    #[inline]
    pub fn rate(&self) -> u32 {
        self.rate
    }
}

/// Frame and generation statistics for the status line
pub struct SimpleRecord {
    frames: RateCounter,
    gens_in_report: u64,
    last_report: Instant,
}
impl Default for SimpleRecord {
    fn default() -> Self {
        Self {
            frames: RateCounter::default(),
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl SimpleRecord {
    /// Records one frame that applied `gens` generations
    pub fn record(&mut self, gens: u64) {
        self.frames.update();
        self.gens_in_report += gens;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    /// Builds the status line, including the camera when there is one to show
    pub fn report(&mut self, controller: &Controller, camera: Option<&Camera>) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format_report(self.frames.rate(), gens_per_sec, controller, camera)
    }
}

fn format_report(
    fps: u32,
    gens_per_sec: f64,
    controller: &Controller,
    camera: Option<&Camera>,
) -> String {
    let state = match controller.state() {
        RunState::Paused => "paused",
        RunState::Running => "running",
    };
    let mut report = format!(
        "{}fps {:.02}gen/s gen:{} alive:{} rate:{}/s {}",
        fps,
        gens_per_sec,
        controller.generation(),
        controller.board().alive_count(),
        controller.iterations_per_second(),
        state
    );
    if let Some(camera) = camera {
        let offset = camera.offset();
        report += &format!(
            " cam:({:.1},{:.1}) zoom:{:.02}x",
            offset.x,
            offset.y,
            camera.zoom()
        );
    }
    report
}
