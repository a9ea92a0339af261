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

//! Tokenizer backed by lindera

use std::borrow::Cow;
use std::str::FromStr;

use ::lindera::dictionary::{load_dictionary, load_user_dictionary};
use ::lindera::mode::Mode;
use ::lindera::segmenter::Segmenter;

use crate::config::Config;
use crate::prelude::*;
use crate::tokenizer::{Token, Tokenize};

/// Dictionary used when no uri is given
pub const DEFAULT_DICTIONARY: &str = "embedded://ipadic";

/// Morphological analysis with a lindera segmenter.
///
/// Token details are used as the feature vector, with IPADIC the base form
/// is the 7th column.
pub struct LinderaTokenizer {
    inner: Segmenter,
    lemma_field: usize,
}

impl LinderaTokenizer {
    /// Loads the dictionary at `dict_uri` and creates a segmenter.
    ///
    /// Fails with `TokenizerInit` if the mode is unknown or a dictionary can't be loaded.
    pub fn new(
        dict_uri: &str,
        mode_str: &str,
        user_dict_uri: Option<&str>,
        lemma_field: usize,
    ) -> OsetiResult<Self> {
        let mode = Mode::from_str(mode_str).map_err(|e| {
            OsetiError::TokenizerInit(format!("invalid mode '{}': {}", mode_str, e))
        })?;
        let dict = load_dictionary(dict_uri).map_err(|e| {
            OsetiError::TokenizerInit(format!("failed to load dictionary {}: {}", dict_uri, e))
        })?;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(uri, &dict.metadata).map_err(|e| {
                OsetiError::TokenizerInit(format!("failed to load user dictionary {}: {}", uri, e))
            })?),
            None => None,
        };

        Ok(LinderaTokenizer {
            inner: Segmenter::new(mode, dict, user_dict),
            lemma_field,
        })
    }

    /// Creates a tokenizer from the config.
    ///
    /// A non-empty `tokenizer_config` is the dictionary uri and overrides the configured one.
    pub fn from_config(config: &Config, tokenizer_config: &str) -> OsetiResult<Self> {
        let dict_uri = match tokenizer_config.trim() {
            "" => config.dictionary.as_str(),
            uri => uri,
        };
        let user_dict = config
            .user_dict_path()
            .map(|p| p.to_string_lossy().into_owned());
        Self::new(
            dict_uri,
            &config.mode,
            user_dict.as_deref(),
            config.lemma_field,
        )
    }
}

impl Tokenize for LinderaTokenizer {
    fn tokenize(&self, sentence: &str) -> OsetiResult<Vec<Token>> {
        let segmented = self
            .inner
            .segment(Cow::Borrowed(sentence))
            .map_err(|e| OsetiError::Tokenizer(format!("failed to segment text: {}", e)))?;

        let mut tokens = Vec::with_capacity(segmented.len());
        for mut token in segmented {
            let features: Vec<String> = token.details().into_iter().map(str::to_owned).collect();
            tokens.push(Token::with_features(
                token.surface.as_ref(),
                features,
                self.lemma_field,
            ));
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LEMMA_FIELD;

    fn tokenizer() -> LinderaTokenizer {
        LinderaTokenizer::new(DEFAULT_DICTIONARY, "normal", None, DEFAULT_LEMMA_FIELD)
            .expect("embedded ipadic")
    }

    #[test]
    fn lemmas_and_surfaces() {
        let tokens = tokenizer().tokenize("料理は美味しくなかった").unwrap();
        let surfaces: Vec<_> = tokens.iter().map(|t| t.surface()).collect();
        assert_eq!(vec!["料理", "は", "美味しく", "なかっ", "た"], surfaces);
        let lemmas: Vec<_> = tokens.iter().map(|t| t.lemma()).collect();
        assert_eq!(vec!["料理", "は", "美味しい", "ない", "た"], lemmas);
        assert!(tokens.iter().all(|t| !t.is_boundary()));
    }

    #[test]
    fn features_are_ipadic_details() {
        let tokens = tokenizer().tokenize("良かった").unwrap();
        assert_eq!("良かっ", tokens[0].surface());
        assert_eq!("形容詞", tokens[0].features()[0]);
        assert_eq!("良い", tokens[0].lemma());
    }

    #[test]
    fn empty_sentence() {
        let tokens = tokenizer().tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn invalid_mode_fails_init() {
        let res = LinderaTokenizer::new(DEFAULT_DICTIONARY, "no-such-mode", None, 6);
        assert!(matches!(res, Err(OsetiError::TokenizerInit(_))));
    }

    #[test]
    fn missing_dictionary_fails_init() {
        let res = LinderaTokenizer::new("file:///nonexistent/dictionary", "normal", None, 6);
        assert!(matches!(res, Err(OsetiError::TokenizerInit(_))));
    }

    #[test]
    fn config_string_selects_dictionary() {
        let config = Config::default();
        let res = LinderaTokenizer::from_config(&config, "file:///nonexistent/dictionary");
        assert!(matches!(res, Err(OsetiError::TokenizerInit(_))));
        assert!(LinderaTokenizer::from_config(&config, "").is_ok());
    }
}
