use std::time::Instant;

/// Wall-clock measurement that compiles to nothing without `perf_timing`.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch(Option<Instant>);

impl Stopwatch {
    #[inline]
    pub fn start() -> Self {
        if cfg!(feature = "perf_timing") {
            Self(Some(Instant::now()))
        } else {
            Self(None)
        }
    }

    #[inline]
    pub fn elapsed_ms(&self) -> Option<f32> {
        self.0.map(|t| t.elapsed().as_secs_f32() * 1000.0)
    }
}
