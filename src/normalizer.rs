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

//! Canonicalization of visually-equivalent Japanese text

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

const HYPHENS: &[char] = &[
    '\u{02D7}', '\u{058A}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2043}', '\u{207B}',
    '\u{208B}', '\u{2212}',
];
const PROLONGED_SOUND_MARKS: &[char] = &[
    '\u{FE63}', '\u{FF0D}', '\u{FF70}', '\u{2014}', '\u{2015}', '\u{2500}', '\u{2501}', '\u{30FC}',
];
const TILDES: &[char] = &[
    '~', '\u{223C}', '\u{223E}', '\u{301C}', '\u{3030}', '\u{FF5E}',
];

lazy_static! {
    static ref CONSECUTIVE_PSM: Regex = Regex::new("ー{2,}").expect("should not happen");
}

/// Normalizes the input text before sentence splitting
///
/// Width variants are unified by NFKC, hyphen-like and prolonged sound
/// mark-like characters are replaced by a canonical symbol, tildes are
/// removed, consecutive prolonged sound marks are combined and spaces are
/// squeezed. Spaces next to Japanese characters are dropped.
pub fn normalize(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    text.chars().for_each(|c| push_mapped(&mut mapped, c));

    // full-width hyphen-minus must become a prolonged sound mark, so NFKC comes after mapping
    let mapped = match is_nfkc_quick(mapped.chars()) {
        IsNormalized::Yes => mapped,
        _ => mapped.nfkc().collect(),
    };

    let combined = CONSECUTIVE_PSM.replace_all(&mapped, "ー");
    squeeze_spaces(&combined)
}

#[inline]
fn push_mapped(out: &mut String, ch: char) {
    if HYPHENS.contains(&ch) {
        out.push('-');
    } else if PROLONGED_SOUND_MARKS.contains(&ch) {
        out.push('ー');
    } else if !TILDES.contains(&ch) {
        out.push(ch);
    }
}

fn squeeze_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for word in text.split_whitespace() {
        if let (Some(left), Some(right)) = (prev, word.chars().next()) {
            if !drops_space_between(left, right) {
                result.push(' ');
            }
        }
        result.push_str(word);
        prev = word.chars().last();
    }
    result
}

fn drops_space_between(left: char, right: char) -> bool {
    match (is_japanese(left), is_japanese(right)) {
        (true, true) => true,
        (true, false) => right.is_ascii(),
        (false, true) => left.is_ascii(),
        (false, false) => false,
    }
}

/// Kana, CJK ideographs, CJK punctuation and full-width forms
pub fn is_japanese(ch: char) -> bool {
    matches!(ch,
        '\u{3000}'..='\u{303F}' // CJK symbols and punctuation
        | '\u{3040}'..='\u{309F}' // hiragana
        | '\u{30A0}'..='\u{30FF}' // katakana
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FF00}'..='\u{FFEF}')
}
