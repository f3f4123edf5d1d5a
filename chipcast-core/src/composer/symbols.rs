//! Symbol selection for the default supply commentary.

use rand::seq::IndexedRandom;

/// Picks one symbol out of a fixed set.
///
/// Keeps the random draw out of the rendering functions so that rendering
/// stays deterministic under a scripted source.
pub trait SymbolSource {
    fn pick(&mut self, choices: &[&'static str]) -> &'static str;
}

impl<F> SymbolSource for F
where
    F: FnMut(&[&'static str]) -> &'static str,
{
    fn pick(&mut self, choices: &[&'static str]) -> &'static str {
        self(choices)
    }
}

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSymbols;

impl SymbolSource for RandomSymbols {
    fn pick(&mut self, choices: &[&'static str]) -> &'static str {
        choices.choose(&mut rand::rng()).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: [&str; 4] = ["a", "b", "c", "d"];

    #[test]
    fn test_random_symbols_stay_in_set() {
        let mut source = RandomSymbols;
        for _ in 0..100 {
            assert!(CHOICES.contains(&source.pick(&CHOICES)));
        }
    }

    #[test]
    fn test_random_symbols_on_empty_set() {
        assert_eq!(RandomSymbols.pick(&[]), "");
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = |choices: &[&'static str]| {
            calls += 1;
            choices[calls % choices.len()]
        };
        assert_eq!(source.pick(&CHOICES), "b");
        assert_eq!(source.pick(&CHOICES), "c");
    }
}
