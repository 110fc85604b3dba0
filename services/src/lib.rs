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

//! Notification Permission Service Implementation.
//!
//! This service exposes the notification permission and notification channel
//! state of the host to the application layer over a method channel. It
//! answers whether notifications are permitted, which of the application's
//! channels are usable, and routes the user to the right settings screen
//! when they are not.

#![allow(unreachable_pub, clippy::new_without_default)]
#![warn(
    clippy::redundant_static_lifetimes,
    clippy::enum_variant_names,
    clippy::clone_on_copy
)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate notification_utils;

mod channel;
mod error;
mod manage;
mod service;

pub use channel::evaluate::evaluate;
pub use channel::status::{ChannelStatus, ChannelsReport, ChannelsSummary};
pub use channel::{CapabilityTier, ChannelFilter, ChannelGroup, Importance, NotificationChannel};
pub use error::{EnumerationFault, ErrorCode, NavigationFault, ServiceError};
pub use manage::{config, host, navigator};
pub use service::interface;
pub use service::message::{MethodCall, MethodResult};
pub use service::permission::PermissionStatus;
pub use service::NotificationPermissionsStub;
