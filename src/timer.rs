/// Wall-clock stopwatch used for the CLI's `--stats` report.
#[derive(Copy, Clone)]
pub struct Timer {
    start_time: u64,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: time::precise_time_ns(),
        }
    }

    /// Returns the time elapsed in seconds since the timer was created.
    pub fn elapsed(&self) -> f32 {
        let dt = time::precise_time_ns() - self.start_time;
        dt as f32 / 1000000000.0
    }
}
