//! Sources of the single random draw each fight consumes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomError {
    /// The underlying source could not be read.
    #[error("random source unreachable: {0}")]
    Transport(#[from] std::io::Error),
    /// The source answered with something that is not a fraction in [0, 1].
    #[error("invalid random value: '{0}'")]
    Format(String),
    #[error("random source has no values left")]
    Exhausted,
}

pub trait RandomSource {
    /// Next value in [0.0, 1.0].
    fn next_fraction(&mut self) -> Result<f64, RandomError>;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_fraction(&mut self) -> Result<f64, RandomError> {
        (**self).next_fraction()
    }
}

/// Parse a plain-text decimal fraction such as `0.47`.
pub fn parse_fraction(text: &str) -> Result<f64, RandomError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| RandomError::Format(trimmed.to_string()))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(RandomError::Format(trimmed.to_string()));
    }
    Ok(value)
}

/// Thread-local OS-seeded generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_fraction(&mut self) -> Result<f64, RandomError> {
        Ok(rand::thread_rng().gen::<f64>())
    }
}

/// Reproducible generator for replays.
#[derive(Clone, Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_fraction(&mut self) -> Result<f64, RandomError> {
        Ok(self.0.gen::<f64>())
    }
}

/// One fraction per line, e.g. pre-fetched random.org `decimal-fractions` output.
#[derive(Debug)]
pub struct LineRandom<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineRandom<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> RandomSource for LineRandom<R> {
    fn next_fraction(&mut self) -> Result<f64, RandomError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(RandomError::Exhausted);
            }
            if !self.line.trim().is_empty() {
                break;
            }
        }
        log::debug!("Raw random text: '{}'", self.line.trim());
        parse_fraction(&self.line)
    }
}

/// Fixed queue of draws, handed out in order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_fraction(&mut self) -> Result<f64, RandomError> {
        self.values.pop_front().ok_or(RandomError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_source_skips_blank_lines_and_rejects_garbage() {
        let mut source = LineRandom::new(Cursor::new("0.42\n\n0.07\nabc\n1.5\n"));
        assert_eq!(source.next_fraction().unwrap(), 0.42);
        assert_eq!(source.next_fraction().unwrap(), 0.07);
        assert!(matches!(source.next_fraction(), Err(RandomError::Format(s)) if s == "abc"));
        assert!(matches!(source.next_fraction(), Err(RandomError::Format(s)) if s == "1.5"));
        assert!(matches!(source.next_fraction(), Err(RandomError::Exhausted)));
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..5 {
            let x = a.next_fraction().unwrap();
            assert_eq!(x, b.next_fraction().unwrap());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn scripted_source_runs_dry() {
        let mut source = ScriptedRandom::new([0.1]);
        assert_eq!(source.next_fraction().unwrap(), 0.1);
        assert_eq!(source.remaining(), 0);
        assert!(matches!(source.next_fraction(), Err(RandomError::Exhausted)));
    }
}
