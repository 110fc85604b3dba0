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

//! Permission request, routed through the settings screens.
//!
//! Notification permission cannot be granted programmatically. When it is
//! denied the user is sent to the settings screen instead.

use crate::error::ServiceError;
use crate::manage::host::NotificationHost;
use crate::manage::navigator::{NavigationOutcome, SettingsNavigator};
use crate::service::interface::REQUEST_NOTIFICATION_PERMISSIONS;
use crate::service::message::{MethodCall, MethodResult};
use crate::service::permission::PermissionStatus;
use crate::service::NotificationPermissionsStub;

impl<H, N> NotificationPermissionsStub<H, N>
where
    H: NotificationHost,
    N: SettingsNavigator,
{
    /// Sends the user to the settings screen if notifications are denied.
    ///
    /// Returns `Ok(None)` without navigating when notifications are granted.
    ///
    /// # Errors
    ///
    /// `ServiceError::InvalidExecutionContext` when notifications are denied
    /// and no settings screen can be started from the calling context.
    pub fn request_permissions(&self) -> Result<Option<NavigationOutcome>, ServiceError> {
        self.request(REQUEST_NOTIFICATION_PERMISSIONS)
    }

    fn request(&self, method: &str) -> Result<Option<NavigationOutcome>, ServiceError> {
        match self.permission_status() {
            PermissionStatus::Granted => Ok(None),
            PermissionStatus::Denied => self.navigate(method).map(Some),
        }
    }

    pub(crate) fn request_notification_permissions(&self, call: &MethodCall) -> MethodResult {
        match self.request(&call.method) {
            Ok(outcome) => {
                info!("End Service requestNotificationPermissions, {:?}", outcome);
                MethodResult::done()
            }
            Err(e) => {
                error!("End Service requestNotificationPermissions, failed: {}", e);
                MethodResult::error(&call.method, &e)
            }
        }
    }
}
