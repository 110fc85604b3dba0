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

//! Channel status evaluation.
//!
//! Combines the global permission flag, the channel listing and the group
//! block state into a [`ChannelsReport`]. Signals are applied per channel in
//! this order, the first one that decides wins:
//!
//! 1. no channel concept on the host: only the global flag is reported,
//! 2. channel not requested: skipped,
//! 3. global flag off: unavailable,
//! 4. owning group blocked (group capable hosts only): unavailable,
//! 5. otherwise available iff the importance is above `None`.

use std::collections::BTreeMap;

use super::status::{ChannelStatus, ChannelsReport};
use super::{CapabilityTier, ChannelFilter, NotificationChannel};
use crate::manage::host::NotificationHost;

/// Evaluates the channels selected by `filter` against the host state.
pub fn evaluate<H>(tier: CapabilityTier, filter: &ChannelFilter, host: &H) -> ChannelsReport
where
    H: NotificationHost + ?Sized,
{
    let enabled = host.are_notifications_enabled();
    if !tier.supports_channels() {
        debug!("channels not supported, notifications enabled: {}", enabled);
        return ChannelsReport::NotApplicable { enabled };
    }

    let (channels, fault) = host.notification_channels().into_parts();
    if let Some(fault) = &fault {
        warn!("evaluating partial channel listing, {}", fault);
    }

    let statuses: BTreeMap<String, ChannelStatus> = channels
        .iter()
        .filter(|channel| filter.matches(&channel.id))
        .map(|channel| {
            let status = channel_status(tier, enabled, channel, host);
            debug!("channel {} is {:?}", channel.id, status);
            (channel.id.clone(), status)
        })
        .collect();

    ChannelsReport::Evaluated {
        any_channel_found: !statuses.is_empty(),
        statuses,
        fault,
    }
}

fn channel_status<H>(
    tier: CapabilityTier,
    enabled: bool,
    channel: &NotificationChannel,
    host: &H,
) -> ChannelStatus
where
    H: NotificationHost + ?Sized,
{
    if !enabled {
        return ChannelStatus::Unavailable;
    }
    if tier.supports_group_blocking() {
        if let Some(group_id) = channel.group_id.as_deref() {
            let blocked = host
                .notification_channel_group(group_id)
                .is_some_and(|group| group.blocked);
            if blocked {
                return ChannelStatus::Unavailable;
            }
        }
    }
    ChannelStatus::from_shown(channel.importance.is_shown())
}
