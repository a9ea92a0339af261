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

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_RESOURCE_DIR: &str = "resources";
const DEFAULT_SETTING_FILE: &str = "oseti.json";
const DEFAULT_NOUN_DICT_FILE: &str = "pn_noun.json";
const DEFAULT_WAGO_DICT_FILE: &str = "pn_wago.json";
const DEFAULT_DICTIONARY: &str = "embedded://ipadic";
const DEFAULT_MODE: &str = "normal";

/// Column of the IPADIC feature vector holding the base form
pub const DEFAULT_LEMMA_FIELD: usize = 6;

/// Config Error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config file not found: {0}")]
    FileNotFound(String),
}

/// Setting data loaded from config file
#[derive(Debug, Clone)]
pub struct Config {
    pub resource_dir: PathBuf,
    pub noun_dict: PathBuf,
    pub wago_dict: PathBuf,
    /// Tokenizer dictionary uri, `embedded://ipadic` or `file:///path/to/dict`
    pub dictionary: String,
    /// Tokenizer segmentation mode
    pub mode: String,
    /// Tokenizer user dictionary, relative to resource_dir unless absolute
    pub user_dict: Option<PathBuf>,
    pub lemma_field: usize,
}

/// Struct corresponds with raw config json file.
/// You must use filed names defined here as json object key.
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Default)]
pub struct RawConfig {
    resourcePath: Option<PathBuf>,
    nounDict: Option<PathBuf>,
    wagoDict: Option<PathBuf>,
    dictionary: Option<String>,
    mode: Option<String>,
    userDict: Option<PathBuf>,
    lemmaField: Option<usize>,
}

impl Config {
    pub fn new(
        config_file: Option<PathBuf>,
        resource_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let default_resource_dir_path = Self::default_resource_dir();

        // prioritize arg > default
        let config_file = match config_file {
            Some(v) => v,
            None => default_resource_dir_path.join(DEFAULT_SETTING_FILE),
        };
        if !config_file.is_file() {
            return Err(ConfigError::FileNotFound(
                config_file.to_string_lossy().into_owned(),
            ));
        }
        let file = File::open(&config_file)?;
        let reader = BufReader::new(file);
        let raw_config: RawConfig = serde_json::from_reader(reader)?;

        Ok(Self::from_raw(raw_config, resource_dir, default_resource_dir_path))
    }

    /// Builds a config from a json string, relative paths are resolved against `resource_dir`
    pub fn from_json_str(json: &str, resource_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let raw_config: RawConfig = serde_json::from_str(json)?;
        Ok(Self::from_raw(
            raw_config,
            resource_dir,
            Self::default_resource_dir(),
        ))
    }

    fn from_raw(raw_config: RawConfig, resource_dir: Option<PathBuf>, default: PathBuf) -> Self {
        // prioritize arg > config file > default
        let resource_dir = resource_dir
            .or_else(|| raw_config.resourcePath.clone())
            .unwrap_or(default);

        let noun_dict = Config::join_if_relative(
            &resource_dir,
            raw_config
                .nounDict
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NOUN_DICT_FILE)),
        );
        let wago_dict = Config::join_if_relative(
            &resource_dir,
            raw_config
                .wagoDict
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WAGO_DICT_FILE)),
        );

        Config {
            resource_dir,
            noun_dict,
            wago_dict,
            dictionary: raw_config
                .dictionary
                .unwrap_or_else(|| DEFAULT_DICTIONARY.to_string()),
            mode: raw_config.mode.unwrap_or_else(|| DEFAULT_MODE.to_string()),
            user_dict: raw_config.userDict,
            lemma_field: raw_config.lemmaField.unwrap_or(DEFAULT_LEMMA_FIELD),
        }
    }

    fn default_resource_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_RESOURCE_DIR)
    }

    /// Resolves given path to a path relative to resource_dir if its relative
    pub fn complete_path(&self, file_path: PathBuf) -> PathBuf {
        Config::join_if_relative(&self.resource_dir, file_path)
    }

    /// Absolute path of the user dictionary, if one is configured
    pub fn user_dict_path(&self) -> Option<PathBuf> {
        self.user_dict.clone().map(|p| self.complete_path(p))
    }

    fn join_if_relative(resource_dir: &Path, file_path: PathBuf) -> PathBuf {
        if file_path.is_absolute() {
            file_path
        } else {
            resource_dir.join(&file_path)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_raw(
            RawConfig::default(),
            None,
            Self::default_resource_dir(),
        )
    }
}
