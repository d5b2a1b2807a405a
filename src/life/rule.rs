use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::grid::StateVector;

/// An outer-totalistic birth/survival rule over the 8-cell neighborhood.
///
/// `birth[n]` is true when a dead cell with `n` live neighbors comes alive,
/// `survive[n]` when a live cell with `n` live neighbors stays alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rule {
    birth: [bool; 9],
    survive: [bool; 9],
}

impl Rule {
    /// Conway's Game of Life: B3/S23.
    pub const CONWAY: Rule = Rule {
        birth:   [false, false, false, true, false, false, false, false, false],
        survive: [false, false, true, true, false, false, false, false, false],
    };

    /// Build a rule from lists of neighbor counts, each in `0..=8`.
    pub fn new(birth: &[u8], survive: &[u8]) -> Result<Self> {
        if birth.iter().chain(survive).any(|&n| n > 8) {
            let digits = |counts: &[u8]| counts.iter().map(|n| n.to_string()).collect::<String>();
            return Err(LifeError::Rule(format!("B{}/S{}", digits(birth), digits(survive))));
        }
        let mut rule = Rule { birth: [false; 9], survive: [false; 9] };
        birth.iter().for_each(|&n| rule.birth[n as usize] = true);
        survive.iter().for_each(|&n| rule.survive[n as usize] = true);
        Ok(rule)
    }

    /// Next state of one cell.
    #[inline]
    pub fn next(&self, alive: bool, neighbors: u32) -> bool {
        let table = if alive { &self.survive } else { &self.birth };
        table.get(neighbors as usize).copied().unwrap_or(false)
    }

    /// Apply the rule elementwise. Any state value other than `1` is dead.
    ///
    /// Returns a fresh vector; `state` is left untouched.
    pub fn apply(&self, state: &[u8], counts: &[u32]) -> Result<StateVector> {
        if state.len() != counts.len() {
            return Err(LifeError::Shape { context: "neighbor count length", expected: state.len(), found: counts.len() });
        }
        Ok(state.iter()
            .zip(counts)
            .map(|(&cell, &n)| self.next(cell == 1, n) as u8)
            .collect())
    }
}

impl Default for Rule {
    fn default() -> Self { Rule::CONWAY }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |table: &[bool; 9]| {
            table.iter().enumerate().filter(|(_, on)| **on).map(|(n, _)| char::from(b'0' + n as u8)).collect::<String>()
        };
        write!(f, "B{}/S{}", digits(&self.birth), digits(&self.survive))
    }
}

impl FromStr for Rule {
    type Err = LifeError;

    /// Parse `B<digits>/S<digits>` notation, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LifeError::Rule(s.to_string());

        let (b, s_part) = s.trim().split_once('/').ok_or_else(invalid)?;
        let b = b.strip_prefix(['B', 'b']).ok_or_else(invalid)?;
        let sv = s_part.strip_prefix(['S', 's']).ok_or_else(invalid)?;

        let counts = |digits: &str| -> Result<Vec<u8>> {
            digits.chars()
                .map(|ch| ch.to_digit(10).filter(|&d| d <= 8).map(|d| d as u8).ok_or_else(invalid))
                .collect()
        };
        Rule::new(&counts(b)?, &counts(sv)?)
    }
}

impl TryFrom<String> for Rule {
    type Error = LifeError;

    fn try_from(value: String) -> Result<Self> { value.parse() }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self { rule.to_string() }
}
