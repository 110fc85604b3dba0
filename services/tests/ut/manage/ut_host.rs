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

use super::*;
use crate::channel::Importance;

// @tc.name: ut_channel_listing_accessors
// @tc.desc: Test the accessors of complete and partial listings
// @tc.precon: NA
// @tc.step: 1. Build a complete and a partial listing
//           2. Query channels, completeness and fault
//           3. Split both into parts
// @tc.expect: Partial listings keep their channels and expose the fault
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_channel_listing_accessors() {
    let channel = NotificationChannel::new("a", Importance::High);

    let listing = ChannelListing::Complete(vec![channel.clone()]);
    assert!(listing.is_complete());
    assert_eq!(listing.channels(), &[channel.clone()]);
    assert_eq!(listing.fault(), None);

    let fault = EnumerationFault::new(1, "null channel");
    let listing = ChannelListing::Partial {
        channels: vec![channel.clone()],
        fault: fault.clone(),
    };
    assert!(!listing.is_complete());
    assert_eq!(listing.channels().len(), 1);
    assert_eq!(listing.fault(), Some(&fault));
    let (channels, split_fault) = listing.into_parts();
    assert_eq!(channels, vec![channel]);
    assert_eq!(split_fault, Some(fault));

    assert_eq!(ChannelListing::empty().into_parts(), (Vec::new(), None));
}

// @tc.name: ut_static_host_queries
// @tc.desc: Test the data backed host
// @tc.precon: NA
// @tc.step: 1. Build a host with two channels and one group
//           2. Query the flag, the listing and the groups
//           3. Flip the flag
// @tc.expect: The host reports exactly the registered data
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_static_host_queries() {
    let mut host = StaticHost::new(true)
        .channel(NotificationChannel::new("a", Importance::High).with_group("g1"))
        .channel(NotificationChannel::new("b", Importance::Low))
        .group(ChannelGroup::new("g1", true));
    assert!(host.are_notifications_enabled());

    let listing = host.notification_channels();
    assert!(listing.is_complete());
    assert_eq!(listing.channels().len(), 2);
    assert_eq!(listing.channels()[0].id, "a");

    assert_eq!(
        host.notification_channel_group("g1"),
        Some(ChannelGroup::new("g1", true))
    );
    assert_eq!(host.notification_channel_group("g2"), None);

    host.set_enabled(false);
    assert!(!host.are_notifications_enabled());
}

// @tc.name: ut_static_host_fault
// @tc.desc: Test fault injection of the data backed host
// @tc.precon: NA
// @tc.step: 1. Inject a fault after one of two channels
//           2. Inject a fault past the end of the listing
// @tc.expect: The first listing is partial with one channel, the second complete
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 2
#[test]
fn ut_static_host_fault() {
    let host = StaticHost::new(true)
        .channel(NotificationChannel::new("a", Importance::High))
        .channel(NotificationChannel::new("b", Importance::High));

    let listing = host.clone().fault_at(1).notification_channels();
    assert!(!listing.is_complete());
    assert_eq!(listing.channels().len(), 1);
    assert_eq!(listing.fault().map(|f| f.position), Some(1));

    let listing = host.fault_at(2).notification_channels();
    assert!(listing.is_complete());
    assert_eq!(listing.channels().len(), 2);
}

// @tc.name: ut_tiered_host_no_channels
// @tc.desc: Test the sentinels of a host without channels
// @tc.precon: NA
// @tc.step: 1. Wrap a mock host on the NoChannels tier
//           2. Query the flag, the listing and a group
// @tc.expect: The flag is forwarded, the listing is empty and no group is
//             found, without asking the inner host
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_tiered_host_no_channels() {
    let mut inner = MockNotificationHost::new();
    inner.expect_are_notifications_enabled().times(1).return_const(true);
    inner.expect_notification_channels().never();
    inner.expect_notification_channel_group().never();

    let host = TieredHost::new(inner, CapabilityTier::NoChannels);
    assert_eq!(host.tier(), CapabilityTier::NoChannels);
    assert!(host.are_notifications_enabled());
    assert_eq!(host.notification_channels(), ChannelListing::empty());
    assert_eq!(host.notification_channel_group("g1"), None);
}

// @tc.name: ut_tiered_host_no_groups
// @tc.desc: Test the sentinels of a host with channels but no group blocking
// @tc.precon: NA
// @tc.step: 1. Wrap a data host with a blocked group on the ChannelsNoGroups tier
//           2. Query the listing and the group
// @tc.expect: Channels are listed, the group is never found
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_tiered_host_no_groups() {
    let inner = StaticHost::new(true)
        .channel(NotificationChannel::new("a", Importance::High).with_group("g1"))
        .group(ChannelGroup::new("g1", true));
    let host = TieredHost::new(inner, CapabilityTier::ChannelsNoGroups);
    assert_eq!(host.notification_channels().channels().len(), 1);
    assert_eq!(host.notification_channel_group("g1"), None);
    assert!(host.inner().notification_channel_group("g1").is_some());

    let host = TieredHost::new(host.inner().clone(), CapabilityTier::ChannelsWithGroups);
    assert_eq!(
        host.notification_channel_group("g1"),
        Some(ChannelGroup::new("g1", true))
    );
}

// @tc.name: ut_host_trait_object
// @tc.desc: Verify NotificationHost is usable behind references and boxes
// @tc.precon: NA
// @tc.step: 1. Query a host through a reference and a boxed trait object
// @tc.expect: Both forward to the underlying host
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 3
#[test]
fn ut_host_trait_object() {
    let host = StaticHost::new(false);
    let by_ref = &host;
    assert!(!by_ref.are_notifications_enabled());

    let boxed: Box<dyn NotificationHost> = Box::new(host.clone());
    assert!(!boxed.are_notifications_enabled());
    assert!(boxed.notification_channels().channels().is_empty());
    assert_eq!(boxed.notification_channel_group("g"), None);
}
