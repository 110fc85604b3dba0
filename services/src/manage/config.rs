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

//! Startup configuration of the notification permission service.
//!
//! The configuration is built once when the service is created and never
//! changes afterwards. In particular the capability tier of the host is
//! decided here and handed to the evaluator, so no host version checks
//! happen while requests are served.

use std::str::FromStr;

use crate::channel::CapabilityTier;
use crate::error::ServiceError;
use crate::service::interface::CHANNEL_NAME;

/// Environment variable holding the host SDK level.
pub const ENV_SDK_LEVEL: &str = "NOTIFICATION_PERMISSIONS_SDK_LEVEL";
/// Environment variable holding the application package name.
pub const ENV_PACKAGE: &str = "NOTIFICATION_PERMISSIONS_PACKAGE";
/// Environment variable holding the application uid.
pub const ENV_UID: &str = "NOTIFICATION_PERMISSIONS_UID";
/// Environment variable selecting the `checkChannelsStatus` reply shape.
pub const ENV_REPLY_SHAPE: &str = "NOTIFICATION_PERMISSIONS_REPLY_SHAPE";

/// Identity of the application whose settings are opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppIdentity {
    pub package_name: String,
    pub uid: u32,
}

/// Shape of the `checkChannelsStatus` reply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplyShape {
    /// Per-channel map with the `needChannel` and `channelsCreated` flags.
    #[default]
    Detailed,
    /// A single `available`, `unavailable` or `none` string.
    Summary,
}

impl FromStr for ReplyShape {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "detailed" => Ok(ReplyShape::Detailed),
            "summary" => Ok(ReplyShape::Summary),
            _ => Err(ServiceError::ParameterCheck(format!(
                "unknown reply shape {}",
                s
            ))),
        }
    }
}

/// Configuration of a notification permission service instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginConfig {
    pub(crate) channel_name: String,
    pub(crate) tier: CapabilityTier,
    pub(crate) app: AppIdentity,
    pub(crate) reply_shape: ReplyShape,
}

impl PluginConfig {
    /// Name of the request/response channel the service answers on.
    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }

    pub fn app(&self) -> &AppIdentity {
        &self.app
    }

    pub fn reply_shape(&self) -> ReplyShape {
        self.reply_shape
    }
}

/// Builder for [`PluginConfig`].
///
/// # Examples
///
/// ```rust
/// use notification_permissions::config::{ConfigBuilder, ReplyShape};
///
/// let config = ConfigBuilder::new()
///     .sdk_level(28)
///     .package_name("com.example.app")
///     .uid(10086)
///     .reply_shape(ReplyShape::Summary)
///     .build()
///     .unwrap();
/// assert_eq!(config.app().uid, 10086);
/// ```
pub struct ConfigBuilder {
    channel_name: String,
    tier: CapabilityTier,
    package_name: String,
    uid: u32,
    reply_shape: ReplyShape,
}

impl ConfigBuilder {
    /// Creates a builder targeting the newest capability tier.
    pub fn new() -> Self {
        Self {
            channel_name: CHANNEL_NAME.to_string(),
            tier: CapabilityTier::ChannelsWithGroups,
            package_name: String::new(),
            uid: 0,
            reply_shape: ReplyShape::default(),
        }
    }

    /// Seeds a builder from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Seeds a builder from `lookup`, which maps variable names to values.
    ///
    /// Unparsable values are logged and leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::new();
        if let Some(level) = lookup(ENV_SDK_LEVEL) {
            match level.trim().parse::<u32>() {
                Ok(level) => builder = builder.sdk_level(level),
                Err(e) => error!("{} {} invalid: {}", ENV_SDK_LEVEL, level, e),
            }
        }
        if let Some(package) = lookup(ENV_PACKAGE) {
            builder = builder.package_name(package.trim());
        }
        if let Some(uid) = lookup(ENV_UID) {
            match uid.trim().parse::<u32>() {
                Ok(uid) => builder = builder.uid(uid),
                Err(e) => error!("{} {} invalid: {}", ENV_UID, uid, e),
            }
        }
        if let Some(shape) = lookup(ENV_REPLY_SHAPE) {
            match shape.trim().parse::<ReplyShape>() {
                Ok(shape) => builder = builder.reply_shape(shape),
                Err(e) => error!("{} invalid: {}", ENV_REPLY_SHAPE, e),
            }
        }
        builder
    }

    /// Derives the capability tier from the host SDK level.
    pub fn sdk_level(self, level: u32) -> Self {
        self.tier(CapabilityTier::from_sdk_level(level))
    }

    pub fn tier(mut self, tier: CapabilityTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn package_name(mut self, package_name: &str) -> Self {
        self.package_name = package_name.to_string();
        self
    }

    pub fn uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    pub fn reply_shape(mut self, reply_shape: ReplyShape) -> Self {
        self.reply_shape = reply_shape;
        self
    }

    pub fn channel_name(mut self, channel_name: &str) -> Self {
        self.channel_name = channel_name.to_string();
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// # Errors
    ///
    /// `ServiceError::ParameterCheck` when the package name or channel name
    /// is empty.
    pub fn build(self) -> Result<PluginConfig, ServiceError> {
        if self.package_name.is_empty() {
            return Err(ServiceError::ParameterCheck(
                "package name is empty".to_string(),
            ));
        }
        if self.channel_name.is_empty() {
            return Err(ServiceError::ParameterCheck(
                "channel name is empty".to_string(),
            ));
        }
        info!(
            "config built, package {}, tier {:?}, reply shape {:?}",
            self.package_name, self.tier, self.reply_shape
        );
        Ok(PluginConfig {
            channel_name: self.channel_name,
            tier: self.tier,
            app: AppIdentity {
                package_name: self.package_name,
                uid: self.uid,
            },
            reply_shape: self.reply_shape,
        })
    }
}
