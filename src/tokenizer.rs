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

//! Morphological tokenizer contract
//!
//! Scoring only needs the surface form and the dictionary form of each
//! token, any morphological analyzer implementing [`Tokenize`] can be used.

use std::sync::Mutex;

use crate::prelude::*;

pub mod lindera;

pub use self::lindera::LinderaTokenizer;

/// Feature value which means "not available"
const UNAVAILABLE_FEATURE: &str = "*";

/// A token of an analyzed sentence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    surface: String,
    features: Vec<String>,
    dictionary_form: Option<String>,
    boundary: bool,
}

impl Token {
    /// Creates a token with an explicit dictionary form
    pub fn new<S: Into<String>>(surface: S, dictionary_form: Option<&str>) -> Self {
        Token {
            surface: surface.into(),
            features: Vec::new(),
            dictionary_form: dictionary_form
                .filter(|f| !f.is_empty() && *f != UNAVAILABLE_FEATURE)
                .map(str::to_owned),
            boundary: false,
        }
    }

    /// Creates a token from a feature vector, the dictionary form is taken from `lemma_field`
    pub fn with_features<S: Into<String>>(
        surface: S,
        features: Vec<String>,
        lemma_field: usize,
    ) -> Self {
        let dictionary_form = features
            .get(lemma_field)
            .filter(|f| !f.is_empty() && f.as_str() != UNAVAILABLE_FEATURE)
            .cloned();
        Token {
            surface: surface.into(),
            features,
            dictionary_form,
            boundary: false,
        }
    }

    /// Beginning or end of sentence marker
    pub fn boundary() -> Self {
        Token {
            surface: String::new(),
            features: vec!["BOS/EOS".to_owned()],
            dictionary_form: None,
            boundary: true,
        }
    }

    /// Returns the substring of the sentence which corresponds to the token
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Returns the feature vector as reported by the tokenizer
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Returns the dictionary form, or the surface when the tokenizer has none
    pub fn lemma(&self) -> &str {
        self.dictionary_form.as_deref().unwrap_or(&self.surface)
    }

    pub fn is_boundary(&self) -> bool {
        self.boundary
    }
}

/// Able to break a Japanese sentence into tokens
pub trait Tokenize {
    /// Break a sentence into `Token`s, in order of appearance.
    /// Boundary markers may be included, they are ignored by scoring.
    fn tokenize(&self, sentence: &str) -> OsetiResult<Vec<Token>>;
}

impl<T: Tokenize + ?Sized> Tokenize for &T {
    fn tokenize(&self, sentence: &str) -> OsetiResult<Vec<Token>> {
        (**self).tokenize(sentence)
    }
}

impl<T: Tokenize + ?Sized> Tokenize for Box<T> {
    fn tokenize(&self, sentence: &str) -> OsetiResult<Vec<Token>> {
        (**self).tokenize(sentence)
    }
}

/// Serializes access to a tokenizer which can not be used from several threads at once
impl<T: Tokenize> Tokenize for Mutex<T> {
    fn tokenize(&self, sentence: &str) -> OsetiResult<Vec<Token>> {
        let inner = self
            .lock()
            .map_err(|_| OsetiError::Tokenizer("tokenizer lock is poisoned".to_owned()))?;
        inner.tokenize(sentence)
    }
}
