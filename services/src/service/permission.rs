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

//! Global notification permission of the application.

use crate::manage::host::NotificationHost;
use crate::service::interface::{PERMISSION_DENIED, PERMISSION_GRANTED};

/// Whether the application may show notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    /// Reply string sent to the application.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionStatus::Granted => PERMISSION_GRANTED,
            PermissionStatus::Denied => PERMISSION_DENIED,
        }
    }
}

/// Reads the global notification permission from the host.
pub(crate) struct PermissionChecker;

impl PermissionChecker {
    /// Checks whether notifications are enabled for the application.
    pub(crate) fn status<H: NotificationHost + ?Sized>(host: &H) -> PermissionStatus {
        let enabled = host.are_notifications_enabled();
        debug!("Checks notification permission, enabled {}", enabled);
        if enabled {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}
