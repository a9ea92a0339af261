/*
 *  Copyright (c) 2021 Works Applications Co., Ltd.
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use std::ops::Range;

/// Characters which terminate a sentence
pub const DELIMITERS: &[char] = &['。', ',', '．', '!', '?'];

#[inline]
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

pub trait SplitSentences {
    fn split<'a, 'b>(&'b self, data: &'a str) -> SentenceIter<'a, 'b>;
}

/// Iterates over sentences of a text together with their byte ranges.
/// Delimiters are not included and empty sentences are skipped.
pub struct SentenceIter<'s, 'x> {
    delimiters: &'x [char],
    data: &'s str,
    position: usize,
}

impl<'s, 'x> Iterator for SentenceIter<'s, 'x> {
    type Item = (Range<usize>, &'s str);

    fn next(&mut self) -> Option<Self::Item> {
        let delimiters = self.delimiters;
        while self.position < self.data.len() {
            let slice = &self.data[self.position..];
            let end = match slice.find(|c: char| delimiters.contains(&c)) {
                Some(offset) => self.position + offset,
                None => self.data.len(),
            };

            let range = self.position..end;
            // skip the delimiter itself
            self.position = match self.data[end..].chars().next() {
                Some(ch) => end + ch.len_utf8(),
                None => end,
            };

            if !range.is_empty() {
                let real_slice = &self.data[range.clone()];
                return Some((range, real_slice));
            }
        }
        None
    }
}

pub struct SentenceSplitter {
    delimiters: &'static [char],
}

impl SentenceSplitter {
    pub fn new() -> Self {
        SentenceSplitter {
            delimiters: DELIMITERS,
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitSentences for SentenceSplitter {
    fn split<'a, 'b>(&'b self, data: &'a str) -> SentenceIter<'a, 'b> {
        SentenceIter {
            delimiters: self.delimiters,
            data,
            position: 0,
        }
    }
}
