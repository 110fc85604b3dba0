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

use core::fmt;

/// Numeric result codes reported to the application layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    ParameterCheck = 401,
    InvalidContext = 13500001,
}

impl From<&ServiceError> for ErrorCode {
    fn from(value: &ServiceError) -> Self {
        match value {
            ServiceError::InvalidExecutionContext { .. } => ErrorCode::InvalidContext,
            ServiceError::ParameterCheck(_) => ErrorCode::ParameterCheck,
        }
    }
}

impl From<ServiceError> for ErrorCode {
    fn from(value: ServiceError) -> Self {
        ErrorCode::from(&value)
    }
}

/// Errors surfaced to the caller of a method.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ServiceError {
    /// The method needs an interactive foreground context and none is available.
    InvalidExecutionContext {
        /// Name of the method that was refused.
        method: String,
    },
    /// Arguments or configuration failed validation.
    ParameterCheck(String),
}

impl ServiceError {
    pub(crate) fn invalid_context(method: &str) -> Self {
        ServiceError::InvalidExecutionContext {
            method: method.to_string(),
        }
    }

    /// Returns the numeric code of this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}

impl std::error::Error for ServiceError {}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceError::InvalidExecutionContext { method } => {
                write!(f, "{}: context is not an interactive activity", method)
            }
            ServiceError::ParameterCheck(reason) => write!(f, "parameter check failed: {}", reason),
        }
    }
}

/// The host failed while enumerating notification channels.
///
/// Recovered where it happens: channels listed before the fault are kept.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EnumerationFault {
    /// Number of channels successfully read before the fault.
    pub position: usize,
    /// Host description of the fault.
    pub message: String,
}

impl EnumerationFault {
    /// Creates a fault raised after `position` channels were read.
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

impl std::error::Error for EnumerationFault {}

impl fmt::Display for EnumerationFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "channel enumeration stopped after {} channels: {}",
            self.position, self.message
        )
    }
}

/// A settings screen could not be launched.
///
/// Recovered by falling back to the application details screen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavigationFault {
    /// Action of the settings screen that failed.
    pub action: String,
    /// Host description of the fault.
    pub message: String,
}

impl NavigationFault {
    /// Creates a fault for the screen identified by `action`.
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}

impl std::error::Error for NavigationFault {}

impl fmt::Display for NavigationFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "launching {} failed: {}", self.action, self.message)
    }
}
