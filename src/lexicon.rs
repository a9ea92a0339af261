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

//! Polarity dictionaries
//!
//! Two tables are used: a single-lemma table (`pn_noun.json`) and a
//! collocation table (`pn_wago.json`) whose keys may be several lemmas
//! joined by a single space. Both are JSON objects mapping keys to labels;
//! labels are resolved to a [`Polarity`] once, at load time.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::prelude::*;

/// Label of a positive entry in the single-lemma table
const NOUN_POSITIVE_LABEL: &str = "p";
/// Prefix of positive labels in the collocation table, e.g. `ポジ（経験）`
const WAGO_POSITIVE_PREFIX: &str = "ポジ";

/// Sign attached to a dictionary entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// +1 or -1
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
        }
    }
}

/// How a label string maps to a polarity.
/// Anything which is not recognized as positive is negative.
#[derive(Clone, Copy, Debug)]
enum LabelRule {
    Exact(&'static str),
    Prefix(&'static str),
}

impl LabelRule {
    fn polarity_of(self, label: &str) -> Polarity {
        let positive = match self {
            LabelRule::Exact(p) => label == p,
            LabelRule::Prefix(p) => label.starts_with(p),
        };
        if positive {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

#[derive(Debug, Default)]
struct PolarityTable {
    entries: HashMap<String, Polarity>,
}

impl PolarityTable {
    fn read<R: Read>(reader: R, rule: LabelRule) -> OsetiResult<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_reader(reader)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let label = value.as_str().ok_or_else(|| {
                OsetiError::LexiconLoad(format!("label of {:?} is not a string: {}", key, value))
            })?;
            entries.insert(key, rule.polarity_of(label));
        }
        Ok(PolarityTable { entries })
    }

    #[inline]
    fn get(&self, key: &str) -> Option<Polarity> {
        self.entries.get(key).copied()
    }
}

/// Single-lemma and collocation polarity dictionaries.
/// Immutable once loaded, share it between analyzers with `Arc`.
#[derive(Debug, Default)]
pub struct Lexicon {
    words: PolarityTable,
    collocations: PolarityTable,
}

impl Lexicon {
    /// Loads both dictionaries from json files
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(noun_path: P, wago_path: Q) -> OsetiResult<Self> {
        let noun = Self::open(noun_path.as_ref())?;
        let wago = Self::open(wago_path.as_ref())?;
        Self::from_readers(noun, wago)
    }

    /// Loads the dictionaries named in the config
    pub fn from_config(config: &Config) -> OsetiResult<Self> {
        Self::load(&config.noun_dict, &config.wago_dict)
    }

    /// Reads both dictionaries from json sources
    pub fn from_readers<R1: Read, R2: Read>(noun: R1, wago: R2) -> OsetiResult<Self> {
        let words = PolarityTable::read(noun, LabelRule::Exact(NOUN_POSITIVE_LABEL))
            .map_err(|e| e.with_context("single-lemma dictionary"))?;
        let collocations = PolarityTable::read(wago, LabelRule::Prefix(WAGO_POSITIVE_PREFIX))
            .map_err(|e| e.with_context("collocation dictionary"))?;
        Ok(Lexicon {
            words,
            collocations,
        })
    }

    fn open(path: &Path) -> OsetiResult<BufReader<File>> {
        match File::open(path) {
            Ok(f) => Ok(BufReader::new(f)),
            Err(e) => Err(OsetiError::from(e).with_context(path.to_string_lossy())),
        }
    }

    /// Looks up a lemma in the single-lemma dictionary
    #[inline]
    pub fn lookup_single(&self, lemma: &str) -> Option<Polarity> {
        self.words.get(lemma)
    }

    /// Looks up a lemma or a space-joined lemma sequence in the collocation dictionary
    #[inline]
    pub fn lookup_sequence(&self, key: &str) -> Option<Polarity> {
        self.collocations.get(key)
    }

    pub fn len_single(&self) -> usize {
        self.words.entries.len()
    }

    pub fn len_sequence(&self) -> usize {
        self.collocations.entries.len()
    }
}
