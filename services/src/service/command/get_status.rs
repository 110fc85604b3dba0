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

//! Global notification permission status.

use crate::manage::host::NotificationHost;
use crate::manage::navigator::SettingsNavigator;
use crate::service::message::MethodResult;
use crate::service::permission::{PermissionChecker, PermissionStatus};
use crate::service::NotificationPermissionsStub;

impl<H, N> NotificationPermissionsStub<H, N>
where
    H: NotificationHost,
    N: SettingsNavigator,
{
    /// Whether the application may show notifications.
    pub fn permission_status(&self) -> PermissionStatus {
        PermissionChecker::status(&self.host)
    }

    /// Replies `granted` or `denied`.
    pub(crate) fn get_notification_permission_status(&self) -> MethodResult {
        let status = self.permission_status();
        info!("End Service getNotificationPermissionStatus, {}", status.as_str());
        MethodResult::success(status.as_str())
    }
}
