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

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::lexicon::Lexicon;
use crate::normalizer::normalize;
use crate::prelude::*;
use crate::scorer::{PolarityScorer, ScorePair};
use crate::sentence_splitter::{SentenceSplitter, SplitSentences};
use crate::tokenizer::{LinderaTokenizer, Tokenize};

/// Unit of the analysis result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// One score per sentence
    Sentence,

    /// One score for the whole text
    Document,
}

impl Default for Target {
    fn default() -> Self {
        Target::Sentence
    }
}

impl FromStr for Target {
    type Err = OsetiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sentence" | "sent" => Ok(Target::Sentence),
            "document" | "doc" => Ok(Target::Document),
            _ => Err(OsetiError::InvalidArgument(format!(
                "target must be \"sentence\" or \"document\", was {:?}",
                s
            ))),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Target::Sentence => "sentence",
            Target::Document => "document",
        };
        f.write_str(repr)
    }
}

/// Score of a sentence or a document
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    /// Sum of polarities and number of matches
    Raw(ScorePair),

    /// `sum / count`, 0.0 when there were no matches
    Ratio(f64),
}

impl Score {
    fn from_pair(pair: ScorePair, raw_score: bool) -> Self {
        if raw_score {
            Score::Raw(pair)
        } else {
            Score::Ratio(pair.ratio())
        }
    }

    /// Ratio of the score, computed from the pair for raw scores
    pub fn ratio(&self) -> f64 {
        match self {
            Score::Raw(pair) => pair.ratio(),
            Score::Ratio(r) => *r,
        }
    }

    pub fn as_raw(&self) -> Option<ScorePair> {
        match self {
            Score::Raw(pair) => Some(*pair),
            Score::Ratio(_) => None,
        }
    }
}

/// Result of the analysis
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scores {
    Sentences(Vec<Score>),
    Document(Score),
}

impl Scores {
    /// Per-sentence scores, `None` for a document score
    pub fn sentences(&self) -> Option<&[Score]> {
        match self {
            Scores::Sentences(v) => Some(v),
            Scores::Document(_) => None,
        }
    }

    /// Whole-document score, `None` for per-sentence scores
    pub fn document(&self) -> Option<Score> {
        match self {
            Scores::Sentences(_) => None,
            Scores::Document(s) => Some(*s),
        }
    }
}

/// Computes sentiment polarity of Japanese text.
///
/// The lexicon is shared and never modified. Access to the tokenizer is not
/// synchronized by the analyzer: use one analyzer per thread, or wrap a
/// tokenizer which can't be shared into a `Mutex`.
pub struct Analyzer<T = LinderaTokenizer> {
    lexicon: Arc<Lexicon>,
    tokenizer: T,
    splitter: SentenceSplitter,
}

impl Analyzer<LinderaTokenizer> {
    /// Creates an analyzer with the bundled settings and dictionaries,
    /// `tokenizer_config` is passed to the tokenizer as its dictionary uri,
    /// empty for the configured one (embedded IPADIC by default)
    pub fn new(tokenizer_config: &str) -> OsetiResult<Self> {
        let config = Config::new(None, None)?;
        Self::from_config(&config, tokenizer_config)
    }

    pub fn from_config(config: &Config, tokenizer_config: &str) -> OsetiResult<Self> {
        let lexicon = Lexicon::from_config(config)?;
        tracing::info!(
            words = lexicon.len_single(),
            collocations = lexicon.len_sequence(),
            "polarity dictionaries loaded"
        );
        let tokenizer = LinderaTokenizer::from_config(config, tokenizer_config)?;
        Ok(Self::with_tokenizer(Arc::new(lexicon), tokenizer))
    }
}

impl<T: Tokenize> Analyzer<T> {
    /// Creates an analyzer from an already loaded lexicon and any tokenizer
    pub fn with_tokenizer(lexicon: Arc<Lexicon>, tokenizer: T) -> Self {
        Analyzer {
            lexicon,
            tokenizer,
            splitter: SentenceSplitter::new(),
        }
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Computes sentiment polarity per sentence or for the whole document.
    ///
    /// With `raw_score` the result holds `(sum, count)` pairs, otherwise `sum / count` ratios.
    pub fn analyze(&self, text: &str, raw_score: bool, target: Target) -> OsetiResult<Scores> {
        let text = normalize(text);
        let sentences = self.splitter.split(&text).map(|(_, sentence)| sentence);

        match target {
            Target::Sentence => {
                let mut scores = Vec::new();
                for sentence in sentences {
                    let pair = self.score_sentence(sentence)?;
                    scores.push(Score::from_pair(pair, raw_score));
                }
                Ok(Scores::Sentences(scores))
            }
            Target::Document => {
                let mut total = ScorePair::default();
                for sentence in sentences {
                    total += self.score_sentence(sentence)?;
                }
                tracing::debug!(sum = total.sum, count = total.count, "document");
                Ok(Scores::Document(Score::from_pair(total, raw_score)))
            }
        }
    }

    /// Same as [`analyze`](Self::analyze), with the target given by name
    /// (`"sentence"`/`"sent"` or `"document"`/`"doc"`)
    pub fn analyze_str(&self, text: &str, raw_score: bool, target: &str) -> OsetiResult<Scores> {
        let target = target.parse()?;
        self.analyze(text, raw_score, target)
    }

    /// Scores one normalized sentence
    pub fn score_sentence(&self, sentence: &str) -> OsetiResult<ScorePair> {
        let tokens = self.tokenizer.tokenize(sentence)?;
        let pair = PolarityScorer::new(&self.lexicon).score(&tokens);
        tracing::debug!(sentence, sum = pair.sum, count = pair.count, "sentence");
        Ok(pair)
    }
}
