use crate::domain::ports::{Clock, RandomSource};
use chrono::{DateTime, Local};
use rand::Rng;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Uniform picks from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
