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

//! Sentiment polarity scoring of Japanese text with polarity dictionaries
//!
//! The main entry point of the library is the
//! [`Analyzer`](analyzer/struct.Analyzer.html) struct. Text is normalized,
//! split into sentences and tokenized; lemmas are matched against a
//! single-lemma and a collocation dictionary and the polarities are summed
//! per sentence or per document.
//!
//! ```no_run
//! use oseti::prelude::*;
//!
//! let analyzer = Analyzer::new("")?;
//! let scores = analyzer.analyze("遅刻したけど楽しかったし嬉しかった。", false, Target::Sentence)?;
//! # Ok::<(), OsetiError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod scorer;
pub mod sentence_splitter;
pub mod tokenizer;

pub mod prelude {
    pub use crate::{
        analyzer::{Analyzer, Score, Scores, Target},
        error::OsetiError,
        error::OsetiResult,
        lexicon::{Lexicon, Polarity},
        scorer::ScorePair,
        tokenizer::{Token, Tokenize},
    };
}
