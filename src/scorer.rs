/*
 * Copyright (c) 2021 Works Applications Co., Ltd.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Sentence-level polarity scoring

use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::lexicon::{Lexicon, Polarity};
use crate::tokenizer::Token;

/// Surface forms which invert the latest polarity
pub const NEGATION: &[&str] = &["ない", "ず", "ぬ"];

/// Maximum number of preceding lemmas in a collocation key
pub const COLLOCATION_WINDOW: usize = 10;

/// Sum of polarities and the number of polarity-bearing matches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScorePair {
    pub sum: i32,
    pub count: usize,
}

impl ScorePair {
    pub fn new(sum: i32, count: usize) -> Self {
        ScorePair { sum, count }
    }

    /// `sum / count`, or exactly 0.0 when nothing matched
    pub fn ratio(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            f64::from(self.sum) / self.count as f64
        }
    }
}

impl Add for ScorePair {
    type Output = ScorePair;

    fn add(self, rhs: Self) -> Self::Output {
        ScorePair {
            sum: self.sum + rhs.sum,
            count: self.count + rhs.count,
        }
    }
}

impl AddAssign for ScorePair {
    fn add_assign(&mut self, rhs: Self) {
        self.sum += rhs.sum;
        self.count += rhs.count;
    }
}

/// Matches tokens of one sentence against the polarity dictionaries
pub struct PolarityScorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> PolarityScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        PolarityScorer { lexicon }
    }

    /// Scores tokens of a single sentence
    pub fn score(&self, tokens: &[Token]) -> ScorePair {
        let mut polarities: Vec<i32> = Vec::new();
        let mut lemmas: Vec<&str> = Vec::with_capacity(tokens.len());
        let mut polarity_seen = false;

        for token in tokens.iter().filter(|t| !t.is_boundary()) {
            let lemma = token.lemma();
            let matched = self
                .lexicon
                .lookup_single(lemma)
                .or_else(|| self.lookup_collocation(lemma, &lemmas));

            match matched {
                Some(polarity) => {
                    tracing::trace!(lemma, sign = polarity.sign(), "polarity");
                    polarities.push(polarity.sign());
                    polarity_seen = true;
                }
                None if polarity_seen && NEGATION.contains(&token.surface()) => {
                    if let Some(last) = polarities.last_mut() {
                        *last *= -1;
                        tracing::trace!(surface = token.surface(), sign = *last, "negation");
                    }
                }
                None => {}
            }
            lemmas.push(lemma);
        }

        ScorePair::new(polarities.iter().sum(), polarities.len())
    }

    /// Looks up the lemma preceded by 10, 9, ..., 1 lemmas, then the lemma alone.
    /// The longest match wins.
    fn lookup_collocation(&self, lemma: &str, preceding: &[&str]) -> Option<Polarity> {
        let mut key = String::with_capacity(64);
        // a window longer than the context is the whole context
        let longest = preceding.len().min(COLLOCATION_WINDOW).max(1);
        for width in (1..=longest).rev() {
            let start = preceding.len().saturating_sub(width);
            key.clear();
            for (i, prev) in preceding[start..].iter().enumerate() {
                if i != 0 {
                    key.push(' ');
                }
                key.push_str(prev);
            }
            key.push(' ');
            key.push_str(lemma);
            if let Some(p) = self.lexicon.lookup_sequence(&key) {
                return Some(p);
            }
        }
        // the bare lemma is the shortest candidate, checked last so longer keys win
        self.lexicon.lookup_sequence(lemma)
    }
}
