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

//! Read-only facade over the host notification state.
//!
//! The evaluator never talks to the host directly. It consumes three facts
//! through [`NotificationHost`]: the global permission flag, the registered
//! channels and the block state of a channel group. Hosts lacking a fact
//! report the documented sentinel (empty listing, absent group) instead of
//! failing.

use std::collections::HashMap;

use crate::channel::{CapabilityTier, ChannelGroup, NotificationChannel};
use crate::error::EnumerationFault;

/// Outcome of enumerating the registered notification channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelListing {
    /// Every registered channel was read.
    Complete(Vec<NotificationChannel>),
    /// The host faulted; `channels` holds what was read before the fault.
    Partial {
        channels: Vec<NotificationChannel>,
        fault: EnumerationFault,
    },
}

impl ChannelListing {
    /// A complete listing with no channels.
    pub fn empty() -> Self {
        ChannelListing::Complete(Vec::new())
    }

    /// Channels read from the host, whether or not enumeration completed.
    pub fn channels(&self) -> &[NotificationChannel] {
        match self {
            ChannelListing::Complete(channels) => channels,
            ChannelListing::Partial { channels, .. } => channels,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ChannelListing::Complete(_))
    }

    /// The fault that ended enumeration early, if any.
    pub fn fault(&self) -> Option<&EnumerationFault> {
        match self {
            ChannelListing::Complete(_) => None,
            ChannelListing::Partial { fault, .. } => Some(fault),
        }
    }

    /// Splits the listing into its channels and optional fault.
    pub fn into_parts(self) -> (Vec<NotificationChannel>, Option<EnumerationFault>) {
        match self {
            ChannelListing::Complete(channels) => (channels, None),
            ChannelListing::Partial { channels, fault } => (channels, Some(fault)),
        }
    }
}

/// Queries the host answers about notification state.
///
/// Implementations must not fail: enumeration faults are reported through
/// [`ChannelListing::Partial`] and unknown groups as `None`.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationHost {
    /// Whether the application may show notifications at all.
    fn are_notifications_enabled(&self) -> bool;

    /// Channels registered by the application.
    fn notification_channels(&self) -> ChannelListing;

    /// Looks up a channel group by id.
    fn notification_channel_group(&self, group_id: &str) -> Option<ChannelGroup>;
}

impl<H: NotificationHost + ?Sized> NotificationHost for &H {
    fn are_notifications_enabled(&self) -> bool {
        (**self).are_notifications_enabled()
    }

    fn notification_channels(&self) -> ChannelListing {
        (**self).notification_channels()
    }

    fn notification_channel_group(&self, group_id: &str) -> Option<ChannelGroup> {
        (**self).notification_channel_group(group_id)
    }
}

impl<H: NotificationHost + ?Sized> NotificationHost for Box<H> {
    fn are_notifications_enabled(&self) -> bool {
        (**self).are_notifications_enabled()
    }

    fn notification_channels(&self) -> ChannelListing {
        (**self).notification_channels()
    }

    fn notification_channel_group(&self, group_id: &str) -> Option<ChannelGroup> {
        (**self).notification_channel_group(group_id)
    }
}

/// Applies the capability tier sentinels on top of another host.
///
/// Below [`CapabilityTier::ChannelsNoGroups`] the listing is always empty and
/// below [`CapabilityTier::ChannelsWithGroups`] no group is ever found, no
/// matter what the inner host reports.
pub struct TieredHost<H> {
    inner: H,
    tier: CapabilityTier,
}

impl<H: NotificationHost> TieredHost<H> {
    pub fn new(inner: H, tier: CapabilityTier) -> Self {
        Self { inner, tier }
    }

    /// Tier whose sentinels this host applies.
    pub fn tier(&self) -> CapabilityTier {
        self.tier
    }
}

cfg_test! {
    impl<H: NotificationHost> TieredHost<H> {
        pub(crate) fn inner(&self) -> &H {
            &self.inner
        }
    }
}

impl<H: NotificationHost> NotificationHost for TieredHost<H> {
    fn are_notifications_enabled(&self) -> bool {
        self.inner.are_notifications_enabled()
    }

    fn notification_channels(&self) -> ChannelListing {
        if !self.tier.supports_channels() {
            return ChannelListing::empty();
        }
        self.inner.notification_channels()
    }

    fn notification_channel_group(&self, group_id: &str) -> Option<ChannelGroup> {
        if !self.tier.supports_group_blocking() {
            return None;
        }
        self.inner.notification_channel_group(group_id)
    }
}

/// A host backed by plain data.
///
/// Used by embedders that already hold a snapshot of the host state, and by
/// tests. A fault can be injected to stop enumeration after a number of
/// channels, the way some hosts fail mid-listing.
#[derive(Clone, Debug, Default)]
pub struct StaticHost {
    enabled: bool,
    channels: Vec<NotificationChannel>,
    groups: HashMap<String, ChannelGroup>,
    fault_at: Option<usize>,
}

impl StaticHost {
    /// Creates a host with the given global permission and no channels.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Registers a channel.
    pub fn channel(mut self, channel: NotificationChannel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Registers a channel group.
    pub fn group(mut self, group: ChannelGroup) -> Self {
        self.groups.insert(group.id.clone(), group);
        self
    }

    /// Makes enumeration fault once `position` channels have been read.
    pub fn fault_at(mut self, position: usize) -> Self {
        self.fault_at = Some(position);
        self
    }
}

impl NotificationHost for StaticHost {
    fn are_notifications_enabled(&self) -> bool {
        self.enabled
    }

    fn notification_channels(&self) -> ChannelListing {
        match self.fault_at {
            Some(position) if position < self.channels.len() => ChannelListing::Partial {
                channels: self.channels[..position].to_vec(),
                fault: EnumerationFault::new(position, "null channel in host listing"),
            },
            _ => ChannelListing::Complete(self.channels.clone()),
        }
    }

    fn notification_channel_group(&self, group_id: &str) -> Option<ChannelGroup> {
        self.groups.get(group_id).cloned()
    }
}
