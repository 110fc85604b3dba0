// Copyright (C) 2023 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Messages exchanged on the method channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServiceError;

/// A call from the application layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Creates a call without arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    /// Creates a call carrying `arguments`.
    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// The answer to a [`MethodCall`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MethodResult {
    /// The call completed; `null` for methods without a result.
    Success { value: Value },
    /// The call failed.
    Error {
        code: String,
        message: String,
        details: Value,
    },
    /// The method is unknown to this service.
    NotImplemented,
}

impl MethodResult {
    pub(crate) fn success(value: impl Into<Value>) -> Self {
        MethodResult::Success {
            value: value.into(),
        }
    }

    pub(crate) fn done() -> Self {
        MethodResult::Success { value: Value::Null }
    }

    /// Error reply for `method`, carrying the numeric error code as details.
    pub(crate) fn error(method: &str, err: &ServiceError) -> Self {
        MethodResult::Error {
            code: method.to_string(),
            message: err.to_string(),
            details: Value::from(err.code() as i32),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            MethodResult::Success { value } => Some(value),
            _ => None,
        }
    }
}
