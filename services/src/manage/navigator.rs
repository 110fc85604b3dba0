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

//! Best-effort navigation to the host settings screens.
//!
//! The notification settings screen of the application is tried first. When
//! the host cannot resolve it, or launching it fails, the generic application
//! details screen is launched instead, exactly once.

use crate::error::{NavigationFault, ServiceError};
use crate::manage::config::AppIdentity;

/// Action opening the notification settings of one application.
pub const ACTION_APP_NOTIFICATION_SETTINGS: &str = "android.settings.APP_NOTIFICATION_SETTINGS";
/// Action opening the details screen of one application.
pub const ACTION_APPLICATION_DETAILS_SETTINGS: &str =
    "android.settings.APPLICATION_DETAILS_SETTINGS";

const EXTRA_APP_PACKAGE: &str = "android.provider.extra.APP_PACKAGE";
const EXTRA_CHANNEL_ID: &str = "android.provider.extra.CHANNEL_ID";
// Keys read by hosts older than the public extras.
const EXTRA_LEGACY_APP_PACKAGE: &str = "app_package";
const EXTRA_LEGACY_APP_UID: &str = "app_uid";

/// A settings screen the navigator can be asked to open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsTarget {
    /// Notification settings of the application.
    NotificationSettings { package: String, uid: u32 },
    /// Details screen of the application.
    ApplicationDetails { package: String },
}

impl SettingsTarget {
    /// Notification settings screen for `app`.
    pub fn notification_settings(app: &AppIdentity) -> Self {
        SettingsTarget::NotificationSettings {
            package: app.package_name.clone(),
            uid: app.uid,
        }
    }

    /// Application details screen for `app`.
    pub fn application_details(app: &AppIdentity) -> Self {
        SettingsTarget::ApplicationDetails {
            package: app.package_name.clone(),
        }
    }

    /// Host action naming the screen.
    pub fn action(&self) -> &'static str {
        match self {
            SettingsTarget::NotificationSettings { .. } => ACTION_APP_NOTIFICATION_SETTINGS,
            SettingsTarget::ApplicationDetails { .. } => ACTION_APPLICATION_DETAILS_SETTINGS,
        }
    }

    /// Key/value extras passed along with the action.
    pub fn extras(&self) -> Vec<(&'static str, String)> {
        match self {
            SettingsTarget::NotificationSettings { package, uid } => vec![
                (EXTRA_APP_PACKAGE, package.clone()),
                (EXTRA_CHANNEL_ID, uid.to_string()),
                (EXTRA_LEGACY_APP_PACKAGE, package.clone()),
                (EXTRA_LEGACY_APP_UID, uid.to_string()),
            ],
            SettingsTarget::ApplicationDetails { .. } => Vec::new(),
        }
    }

    /// Data uri of the screen, if it takes one.
    pub fn data_uri(&self) -> Option<String> {
        match self {
            SettingsTarget::NotificationSettings { .. } => None,
            SettingsTarget::ApplicationDetails { package } => Some(format!("package:{}", package)),
        }
    }
}

/// Launches settings screens on the host.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsNavigator {
    /// Whether the calling context can start a settings screen.
    fn can_navigate(&self) -> bool;

    /// Whether the host has a screen answering `target`.
    fn resolve(&self, target: &SettingsTarget) -> bool;

    /// Starts the screen.
    fn launch(&self, target: &SettingsTarget) -> Result<(), NavigationFault>;
}

impl<N: SettingsNavigator + ?Sized> SettingsNavigator for &N {
    fn can_navigate(&self) -> bool {
        (**self).can_navigate()
    }

    fn resolve(&self, target: &SettingsTarget) -> bool {
        (**self).resolve(target)
    }

    fn launch(&self, target: &SettingsTarget) -> Result<(), NavigationFault> {
        (**self).launch(target)
    }
}

impl<N: SettingsNavigator + ?Sized> SettingsNavigator for Box<N> {
    fn can_navigate(&self) -> bool {
        (**self).can_navigate()
    }

    fn resolve(&self, target: &SettingsTarget) -> bool {
        (**self).resolve(target)
    }

    fn launch(&self, target: &SettingsTarget) -> Result<(), NavigationFault> {
        (**self).launch(target)
    }
}

/// Which screen a navigation ended up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The notification settings screen was launched.
    NotificationSettings,
    /// The application details screen was launched as a fallback.
    ApplicationDetails,
}

/// Sends the user to the settings screen where notifications can be enabled.
///
/// # Errors
///
/// Returns `ServiceError::InvalidExecutionContext` carrying `method` when the
/// navigator cannot start screens from the current context. Launch faults are
/// recovered and never returned.
pub fn navigate_to_settings<N>(
    navigator: &N,
    app: &AppIdentity,
    method: &str,
) -> Result<NavigationOutcome, ServiceError>
where
    N: SettingsNavigator + ?Sized,
{
    if !navigator.can_navigate() {
        error!("{} refused, no interactive context", method);
        return Err(ServiceError::invalid_context(method));
    }

    let primary = SettingsTarget::notification_settings(app);
    if navigator.resolve(&primary) {
        match navigator.launch(&primary) {
            Ok(()) => {
                info!("launched {}", primary.action());
                return Ok(NavigationOutcome::NotificationSettings);
            }
            Err(e) => warn!("{}, falling back to application details", e),
        }
    } else {
        info!("{} not resolved, falling back to application details", primary.action());
    }

    let fallback = SettingsTarget::application_details(app);
    if let Err(e) = navigator.launch(&fallback) {
        error!("{}", e);
    }
    Ok(NavigationOutcome::ApplicationDetails)
}
