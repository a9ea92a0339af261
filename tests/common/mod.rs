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

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use lazy_static::lazy_static;

use oseti::config::Config;
use oseti::prelude::*;

/// IPADIC analysis of sentences used in tests, one `surface\tfeatures` line per token
const RECORDED_ANALYSES: &[(&str, &str)] = &[
    (
        "このお店の接客は非常に良かった",
        "この\t連体詞,*,*,*,*,*,この,コノ,コノ
お\t接頭詞,名詞接続,*,*,*,*,お,オ,オ
店\t名詞,一般,*,*,*,*,店,ミセ,ミセ
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
接客\t名詞,サ変接続,*,*,*,*,接客,セッキャク,セッキャク
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
非常\t名詞,形容動詞語幹,*,*,*,*,非常,ヒジョウ,ヒジョー
に\t助詞,副詞化,*,*,*,*,に,ニ,ニ
良かっ\t形容詞,自立,*,*,形容詞・アウオ段,連用タ接続,良い,ヨカッ,ヨカッ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
EOS
",
    ),
    (
        "料理は美味しくない",
        "料理\t名詞,サ変接続,*,*,*,*,料理,リョウリ,リョーリ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
美味しく\t形容詞,自立,*,*,形容詞・イ段,連用テ接続,美味しい,オイシク,オイシク
ない\t助動詞,*,*,*,特殊・ナイ,基本形,ない,ナイ,ナイ
EOS
",
    ),
    (
        "このお店の接客は非常に良かったが、料理は美味しくなかった",
        "この\t連体詞,*,*,*,*,*,この,コノ,コノ
お\t接頭詞,名詞接続,*,*,*,*,お,オ,オ
店\t名詞,一般,*,*,*,*,店,ミセ,ミセ
の\t助詞,連体化,*,*,*,*,の,ノ,ノ
接客\t名詞,サ変接続,*,*,*,*,接客,セッキャク,セッキャク
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
非常\t名詞,形容動詞語幹,*,*,*,*,非常,ヒジョウ,ヒジョー
に\t助詞,副詞化,*,*,*,*,に,ニ,ニ
良かっ\t形容詞,自立,*,*,形容詞・アウオ段,連用タ接続,良い,ヨカッ,ヨカッ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
が\t助詞,接続助詞,*,*,*,*,が,ガ,ガ
、\t記号,読点,*,*,*,*,、,、,、
料理\t名詞,サ変接続,*,*,*,*,料理,リョウリ,リョーリ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
美味しく\t形容詞,自立,*,*,形容詞・イ段,連用テ接続,美味しい,オイシク,オイシク
なかっ\t助動詞,*,*,*,特殊・ナイ,連用タ接続,ない,ナカッ,ナカッ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
EOS
",
    ),
    (
        "あいつは虫が良い",
        "あいつ\t名詞,代名詞,一般,*,*,*,あいつ,アイツ,アイツ
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
虫\t名詞,一般,*,*,*,*,虫,ムシ,ムシ
が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ
良い\t形容詞,自立,*,*,形容詞・アウオ段,基本形,良い,ヨイ,ヨイ
EOS
",
    ),
    (
        "店員は気が利く",
        "店員\t名詞,一般,*,*,*,*,店員,テンイン,テンイン
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
気\t名詞,一般,*,*,*,*,気,キ,キ
が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ
利く\t動詞,自立,*,*,五段・カ行イ音便,基本形,利く,キク,キク
EOS
",
    ),
    (
        "美味しくないことはない",
        "美味しく\t形容詞,自立,*,*,形容詞・イ段,連用テ接続,美味しい,オイシク,オイシク
ない\t助動詞,*,*,*,特殊・ナイ,基本形,ない,ナイ,ナイ
こと\t名詞,非自立,一般,*,*,*,こと,コト,コト
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
ない\t助動詞,*,*,*,特殊・ナイ,基本形,ない,ナイ,ナイ
EOS
",
    ),
    (
        "遅刻したけど楽しかったし嬉しかった",
        "遅刻\t名詞,サ変接続,*,*,*,*,遅刻,チコク,チコク
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
けど\t助詞,接続助詞,*,*,*,*,けど,ケド,ケド
楽しかっ\t形容詞,自立,*,*,形容詞・イ段,連用タ接続,楽しい,タノシカッ,タノシカッ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
し\t助詞,接続助詞,*,*,*,*,し,シ,シ
嬉しかっ\t形容詞,自立,*,*,形容詞・イ段,連用タ接続,嬉しい,ウレシカッ,ウレシカッ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
EOS
",
    ),
    (
        "すごく充実した",
        "すごく\t形容詞,自立,*,*,形容詞・アウオ段,連用テ接続,すごい,スゴク,スゴク
充実\t名詞,サ変接続,*,*,*,*,充実,ジュウジツ,ジュージツ
し\t動詞,自立,*,*,サ変・スル,連用形,する,シ,シ
た\t助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
EOS
",
    ),
    (
        "今日は晴れ",
        "今日\t名詞,副詞可能,*,*,*,*,今日,キョウ,キョー
は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
晴れ\t名詞,一般,*,*,*,*,晴れ,ハレ,ハレ
EOS
",
    ),
];

lazy_static! {
    pub static ref TEST_CONFIG: Config = {
        let test_config_path = "tests/resources/oseti.json";
        Config::new(Some(PathBuf::from(test_config_path)), None)
            .expect("Failed to read config file for test")
    };
    pub static ref LEXICON: Arc<Lexicon> = Arc::new(
        Lexicon::from_config(&TEST_CONFIG).expect("Failed to load dictionaries for tests")
    );
}

/// Replays recorded analyses instead of running a morphological analyzer
pub struct RecordedTokenizer {
    outputs: HashMap<&'static str, &'static str>,
}

impl RecordedTokenizer {
    pub fn new() -> Self {
        RecordedTokenizer {
            outputs: RECORDED_ANALYSES.iter().cloned().collect(),
        }
    }
}

impl Tokenize for RecordedTokenizer {
    fn tokenize(&self, sentence: &str) -> OsetiResult<Vec<Token>> {
        match self.outputs.get(sentence) {
            Some(output) => Ok(parse_recorded(output, TEST_CONFIG.lemma_field)),
            None => Err(OsetiError::Tokenizer(format!(
                "no recorded output for {:?}",
                sentence
            ))),
        }
    }
}

/// `EOS` lines become boundary tokens
fn parse_recorded(output: &str, lemma_field: usize) -> Vec<Token> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((surface, features)) => {
                let features = features.split(',').map(str::to_owned).collect();
                Token::with_features(surface, features, lemma_field)
            }
            None => Token::boundary(),
        })
        .collect()
}

pub fn analyzer() -> Analyzer<RecordedTokenizer> {
    Analyzer::with_tokenizer(LEXICON.clone(), RecordedTokenizer::new())
}

/// Texts made only of recorded sentences
pub const TEXTS: &[&str] = &[
    "このお店の接客は非常に良かった。料理は美味しくない。",
    "遅刻したけど楽しかったし嬉しかった。すごく充実した!",
    "今日は晴れ。あいつは虫が良い?店員は気が利く",
    "美味しくないことはない",
    "",
];
