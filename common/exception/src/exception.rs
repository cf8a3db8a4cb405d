// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

#![allow(non_snake_case)]

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use thiserror::Error;

#[derive(Error)]
pub struct ErrorCode {
    code: u16,
    display_text: String,
    cause: Option<Box<dyn std::error::Error + Sync + Send>>,
}

pub type Result<T> = std::result::Result<T, ErrorCode>;

macro_rules! as_item {
    ($i:item) => {
        $i
    };
}

macro_rules! build_exceptions {
    ($($body:ident($code:expr)),*) => {
        as_item! {
            impl ErrorCode {
                $(
                pub fn $body(display_text: impl Into<String>) -> ErrorCode {
                    ErrorCode {
                        code: $code,
                        display_text: display_text.into(),
                        cause: None,
                    }
                })*
            }
        }
    }
}

build_exceptions! {
    Ok(0),
    UnImplement(2),
    BadArguments(6),
    IllegalDataType(7),
    UnknownFunction(8),
    BadDataValueType(10),
    LogicalError(15),
    UnknownColumn(16),
    UnknownTable(17),
    BadAddressFormat(18),
    NotReadyNode(19),
    TransportError(20),
    EmptyDataFromServer(21),
    UnexpectedResponse(22),

    UnknownException(1000),
    TokioError(1001)
}

impl ErrorCode {
    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> String {
        self.cause
            .as_ref()
            .map(|cause| cause.to_string())
            .unwrap_or_else(|| self.display_text.clone())
    }

    pub fn add_message(self, msg: impl AsRef<str>) -> Self {
        Self {
            code: self.code,
            display_text: format!("{}\n{}", msg.as_ref(), self.display_text),
            cause: self.cause,
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Code: {}, displayText = {}.", self.code, self.message())
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Code: {}, displayText = {}.", self.code, self.message())
    }
}

#[derive(Error)]
enum OtherErrors {
    AnyHow { error: anyhow::Error },
}

impl Display for OtherErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OtherErrors::AnyHow { error } => write!(f, "{}", error),
        }
    }
}

impl Debug for OtherErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OtherErrors::AnyHow { error } => write!(f, "{:?}", error),
        }
    }
}

impl ErrorCode {
    pub fn from_anyhow(error: anyhow::Error) -> ErrorCode {
        ErrorCode {
            code: 1002,
            display_text: format!("{}", error),
            cause: Some(Box::new(OtherErrors::AnyHow { error })),
        }
    }

    pub fn from_parse(error: std::num::ParseIntError) -> ErrorCode {
        ErrorCode::BadArguments(error.to_string())
    }

    pub fn from_serde(error: serde_json::Error) -> ErrorCode {
        ErrorCode {
            code: 1002,
            display_text: error.to_string(),
            cause: Some(Box::new(error)),
        }
    }
}

impl From<serde_json::Error> for ErrorCode {
    fn from(error: serde_json::Error) -> Self {
        ErrorCode::from_serde(error)
    }
}

impl From<std::io::Error> for ErrorCode {
    fn from(error: std::io::Error) -> Self {
        ErrorCode::TransportError(error.to_string())
    }
}

impl From<std::num::ParseIntError> for ErrorCode {
    fn from(error: std::num::ParseIntError) -> Self {
        ErrorCode::from_parse(error)
    }
}
