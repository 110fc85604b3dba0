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

//! Notification channel data model.
//!
//! This module holds the read-only facts the host reports about notification
//! channels and channel groups, the capability tier of the running host, and
//! the filter describing which channels a caller asked about.

pub(crate) mod evaluate;
pub(crate) mod status;

use std::collections::HashSet;

/// Host SDK level that introduced notification channels.
const CHANNELS_SDK_LEVEL: u32 = 26;
/// Host SDK level that introduced blockable channel groups.
const GROUP_BLOCKING_SDK_LEVEL: u32 = 28;

/// Importance of a notification channel.
///
/// Ordered from fully suppressed to most intrusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Importance {
    /// The channel is fully suppressed.
    None = 0,
    Min = 1,
    Low = 2,
    Default = 3,
    High = 4,
    Max = 5,
}

impl Importance {
    /// Converts a host importance code.
    ///
    /// Codes at or below zero, including the host's unspecified code, are
    /// `None`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            i32::MIN..=0 => Importance::None,
            1 => Importance::Min,
            2 => Importance::Low,
            3 => Importance::Default,
            4 => Importance::High,
            _ => Importance::Max,
        }
    }

    /// Whether notifications posted to a channel of this importance are shown.
    pub fn is_shown(self) -> bool {
        self > Importance::None
    }
}

/// A notification channel registered by the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationChannel {
    /// Channel id, unique within a listing.
    pub id: String,
    /// Current importance, possibly lowered by the user.
    pub importance: Importance,
    /// Id of the owning group, if any.
    pub group_id: Option<String>,
}

impl NotificationChannel {
    /// Creates a channel that belongs to no group.
    pub fn new(id: impl Into<String>, importance: Importance) -> Self {
        Self {
            id: id.into(),
            importance,
            group_id: None,
        }
    }

    /// Assigns the channel to a group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

/// A group of notification channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelGroup {
    pub id: String,
    /// The user blocked every channel of this group at once.
    pub blocked: bool,
}

impl ChannelGroup {
    pub fn new(id: impl Into<String>, blocked: bool) -> Self {
        Self {
            id: id.into(),
            blocked,
        }
    }
}

/// Channel features supported by the running host.
///
/// Decided once at startup and fixed for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityTier {
    /// No channel concept at all.
    NoChannels,
    /// Channels exist but groups cannot be blocked.
    ChannelsNoGroups,
    /// Channels exist and groups can be blocked as a unit.
    ChannelsWithGroups,
}

impl CapabilityTier {
    /// Derives the tier from the host SDK level.
    pub fn from_sdk_level(level: u32) -> Self {
        if level >= GROUP_BLOCKING_SDK_LEVEL {
            CapabilityTier::ChannelsWithGroups
        } else if level >= CHANNELS_SDK_LEVEL {
            CapabilityTier::ChannelsNoGroups
        } else {
            CapabilityTier::NoChannels
        }
    }

    /// Whether the host has a channel concept.
    pub fn supports_channels(self) -> bool {
        !matches!(self, CapabilityTier::NoChannels)
    }

    /// Whether the host can report blocked channel groups.
    pub fn supports_group_blocking(self) -> bool {
        matches!(self, CapabilityTier::ChannelsWithGroups)
    }
}

/// The set of channel ids a caller asked about.
///
/// An empty filter matches every channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelFilter {
    ids: HashSet<String>,
}

impl ChannelFilter {
    /// A filter that matches every channel.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the channel with `id` is considered.
    pub fn matches(&self, id: &str) -> bool {
        self.ids.is_empty() || self.ids.contains(id)
    }
}

impl<S: Into<String>> FromIterator<S> for ChannelFilter {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
