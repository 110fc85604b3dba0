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

//! Method channel stub of the notification permission service.
//!
//! Receives calls from the application layer, routes them by method name to
//! the command handlers and returns their replies.

use super::interface;
use super::message::{MethodCall, MethodResult};
use crate::manage::config::PluginConfig;
use crate::manage::host::{NotificationHost, TieredHost};
use crate::manage::navigator::SettingsNavigator;

/// Answers method calls from the application layer.
///
/// Holds no mutable state: every call reads the host afresh.
pub struct NotificationPermissionsStub<H, N> {
    /// Configuration decided at startup.
    pub(crate) config: PluginConfig,
    /// Host facade, restricted to the configured capability tier.
    pub(crate) host: TieredHost<H>,
    /// Launcher of host settings screens.
    pub(crate) navigator: N,
}

impl<H, N> NotificationPermissionsStub<H, N>
where
    H: NotificationHost,
    N: SettingsNavigator,
{
    /// Creates a stub serving `host` and `navigator` under `config`.
    pub fn new(config: PluginConfig, host: H, navigator: N) -> Self {
        let host = TieredHost::new(host, config.tier());
        info!(
            "stub created on channel {}, tier {:?}",
            config.channel_name(),
            config.tier()
        );
        Self {
            config,
            host,
            navigator,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Handles a method call.
    ///
    /// Unknown method names are answered with [`MethodResult::NotImplemented`].
    pub fn on_method_call(&self, call: &MethodCall) -> MethodResult {
        debug!("Processes on_method_call, method: {}", call.method);
        let Some(method) = Method::parse(&call.method) else {
            info!("method {} not implemented", call.method);
            return MethodResult::NotImplemented;
        };
        match method {
            Method::GetNotificationPermissionStatus => self.get_notification_permission_status(),
            Method::RequestNotificationPermissions => self.request_notification_permissions(call),
            Method::NavigateToNotificationSettings => self.navigate_to_notification_settings(call),
            Method::CheckChannelsStatus => self.check_channels_status(call),
        }
    }
}

/// Methods served by the stub.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    GetNotificationPermissionStatus,
    RequestNotificationPermissions,
    NavigateToNotificationSettings,
    CheckChannelsStatus,
}

impl Method {
    /// Matches `name` against the known methods, ignoring ASCII case.
    pub(crate) fn parse(name: &str) -> Option<Self> {
        const METHODS: [(&str, Method); 4] = [
            (
                interface::GET_NOTIFICATION_PERMISSION_STATUS,
                Method::GetNotificationPermissionStatus,
            ),
            (
                interface::REQUEST_NOTIFICATION_PERMISSIONS,
                Method::RequestNotificationPermissions,
            ),
            (
                interface::NAVIGATE_TO_NOTIFICATION_SETTINGS,
                Method::NavigateToNotificationSettings,
            ),
            (interface::CHECK_CHANNELS_STATUS, Method::CheckChannelsStatus),
        ];
        METHODS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, method)| *method)
    }
}
