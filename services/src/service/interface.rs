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

//! Names used on the method channel between the application and the service.
//!
//! Method names are matched case-insensitively.

/// Name of the request/response channel.
pub const CHANNEL_NAME: &str = "notification_permissions";

/// Returns `granted` or `denied`.
pub const GET_NOTIFICATION_PERMISSION_STATUS: &str = "getNotificationPermissionStatus";
/// Opens the settings screen when notifications are denied.
pub const REQUEST_NOTIFICATION_PERMISSIONS: &str = "requestNotificationPermissions";
/// Opens the settings screen unconditionally.
pub const NAVIGATE_TO_NOTIFICATION_SETTINGS: &str = "navigateToNotificationSettings";
/// Evaluates the status of notification channels.
pub const CHECK_CHANNELS_STATUS: &str = "checkChannelsStatus";

/// Reply of a permitted application.
pub const PERMISSION_GRANTED: &str = "granted";
/// Reply of an application that may not show notifications.
pub const PERMISSION_DENIED: &str = "denied";

/// Reply for a usable channel.
pub const CHANNEL_AVAILABLE: &str = "available";
/// Reply for an unusable channel.
pub const CHANNEL_UNAVAILABLE: &str = "unavailable";
/// Summary reply when no channel matched.
pub const CHANNEL_NONE: &str = "none";

/// Detailed reply key, `false` when the host has no channels.
pub const KEY_NEED_CHANNEL: &str = "needChannel";
/// Detailed reply key, `true` when a requested channel exists.
pub const KEY_CHANNELS_CREATED: &str = "channelsCreated";
/// Detailed reply key holding the per-channel map.
pub const KEY_STATUS: &str = "status";
/// Detailed reply key, `false` when the host listing was cut short.
pub const KEY_COMPLETE: &str = "complete";
