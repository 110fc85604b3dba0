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

//! Unconditional navigation to the notification settings.

use crate::error::ServiceError;
use crate::manage::host::NotificationHost;
use crate::manage::navigator::{navigate_to_settings, NavigationOutcome, SettingsNavigator};
use crate::service::interface::NAVIGATE_TO_NOTIFICATION_SETTINGS;
use crate::service::message::{MethodCall, MethodResult};
use crate::service::NotificationPermissionsStub;

impl<H, N> NotificationPermissionsStub<H, N>
where
    H: NotificationHost,
    N: SettingsNavigator,
{
    /// Opens the notification settings of the application.
    ///
    /// # Errors
    ///
    /// `ServiceError::InvalidExecutionContext` when no settings screen can be
    /// started from the calling context.
    pub fn navigate_to_settings(&self) -> Result<NavigationOutcome, ServiceError> {
        self.navigate(NAVIGATE_TO_NOTIFICATION_SETTINGS)
    }

    pub(crate) fn navigate(&self, method: &str) -> Result<NavigationOutcome, ServiceError> {
        navigate_to_settings(&self.navigator, self.config.app(), method)
    }

    pub(crate) fn navigate_to_notification_settings(&self, call: &MethodCall) -> MethodResult {
        match self.navigate(&call.method) {
            Ok(outcome) => {
                info!("End Service navigateToNotificationSettings, {:?}", outcome);
                MethodResult::done()
            }
            Err(e) => {
                error!("End Service navigateToNotificationSettings, failed: {}", e);
                MethodResult::error(&call.method, &e)
            }
        }
    }
}
