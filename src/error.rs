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

use std::io::Error;
use thiserror::Error;

use crate::config::ConfigError;

pub type OsetiResult<T> = Result<T, OsetiError>;

/// Oseti error
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OsetiError {
    #[error("{context}: {cause}")]
    ErrWithContext {
        context: String,
        cause: Box<OsetiError>,
    },

    #[error("{context}: {cause}")]
    Io {
        cause: std::io::Error,
        context: String,
    },

    #[error("Invalid UTF-8: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config Error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Failed to load polarity dictionary: {0}")]
    LexiconLoad(String),

    #[error("Failed to initialize tokenizer: {0}")]
    TokenizerInit(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for OsetiError {
    fn from(e: Error) -> Self {
        OsetiError::Io {
            cause: e,
            context: String::from("IO Error"),
        }
    }
}

impl OsetiError {
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        match self {
            OsetiError::Io { cause, .. } => OsetiError::Io {
                cause,
                context: ctx.into(),
            },
            cause => OsetiError::ErrWithContext {
                cause: Box::new(cause),
                context: ctx.into(),
            },
        }
    }

    /// Whether the error was raised while loading one of the polarity dictionaries
    pub fn is_load_error(&self) -> bool {
        match self {
            OsetiError::Io { .. } | OsetiError::LexiconLoad(_) | OsetiError::SerdeError(_) => {
                true
            }
            OsetiError::ErrWithContext { cause, .. } => cause.is_load_error(),
            _ => false,
        }
    }
}
