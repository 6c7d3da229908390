pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const FRAME_MS: f64 = 16.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CounterTick {
    /// The floored value did not change this frame; nothing to write.
    Pending,
    Show(u64),
    Done(u64),
}

impl CounterTick {
    pub fn label(self) -> Option<String> {
        match self {
            Self::Pending => None,
            Self::Show(value) | Self::Done(value) => Some(format!("{value}+")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    shown: Option<u64>,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / (COUNTER_DURATION_MS / FRAME_MS),
            current: 0.0,
            shown: None,
            finished: false,
        }
    }

    /// Counter that finishes on its first tick.
    pub fn instant(target: u64) -> Self {
        let mut counter = Self::new(target);
        counter.current = target as f64;
        counter
    }

    pub fn parse_target(raw: &str) -> Option<u64> {
        raw.trim().parse::<u64>().ok()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> CounterTick {
        if self.finished {
            return CounterTick::Done(self.target);
        }

        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            return CounterTick::Done(self.target);
        }

        let floored = self.current.floor() as u64;
        if self.shown.is_some_and(|shown| shown >= floored) {
            return CounterTick::Pending;
        }

        self.shown = Some(floored);
        CounterTick::Show(floored)
    }
}
