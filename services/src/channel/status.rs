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

//! Results produced by the channel status evaluator.

use std::collections::BTreeMap;

use crate::error::EnumerationFault;

/// Usability of a single channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelStatus {
    Available,
    Unavailable,
}

impl ChannelStatus {
    pub(crate) fn from_shown(shown: bool) -> Self {
        if shown {
            ChannelStatus::Available
        } else {
            ChannelStatus::Unavailable
        }
    }
}

/// Aggregate status of every requested channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelsSummary {
    /// At least one considered channel is available.
    Available,
    /// Channels were considered but none of them is available.
    Unavailable,
    /// Channels are supported but none matched the request.
    None,
}

/// Detailed outcome of a channel status evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelsReport {
    /// The host has no channel concept; only the global flag applies.
    NotApplicable {
        /// Global notification permission.
        enabled: bool,
    },
    /// Channels were enumerated and evaluated.
    Evaluated {
        /// At least one channel matched the request.
        any_channel_found: bool,
        /// Status of each considered channel.
        statuses: BTreeMap<String, ChannelStatus>,
        /// Set when the host stopped enumerating early.
        fault: Option<EnumerationFault>,
    },
}

impl ChannelsReport {
    /// Whether the host has a channel concept at all.
    pub fn channel_concept_supported(&self) -> bool {
        matches!(self, ChannelsReport::Evaluated { .. })
    }

    /// Whether any channel matched the request.
    ///
    /// Always `false` when channels are not supported.
    pub fn any_channel_found(&self) -> bool {
        match self {
            ChannelsReport::NotApplicable { .. } => false,
            ChannelsReport::Evaluated {
                any_channel_found, ..
            } => *any_channel_found,
        }
    }

    /// Status of the channel with `id`, if it was considered.
    pub fn status(&self, id: &str) -> Option<ChannelStatus> {
        match self {
            ChannelsReport::NotApplicable { .. } => None,
            ChannelsReport::Evaluated { statuses, .. } => statuses.get(id).copied(),
        }
    }

    /// Per-channel statuses; empty when channels are not supported.
    pub fn statuses(&self) -> impl Iterator<Item = (&str, ChannelStatus)> {
        let statuses = match self {
            ChannelsReport::NotApplicable { .. } => None,
            ChannelsReport::Evaluated { statuses, .. } => Some(statuses),
        };
        statuses
            .into_iter()
            .flatten()
            .map(|(id, status)| (id.as_str(), *status))
    }

    /// Whether every registered channel was enumerated.
    pub fn enumeration_complete(&self) -> bool {
        match self {
            ChannelsReport::NotApplicable { .. } => true,
            ChannelsReport::Evaluated { fault, .. } => fault.is_none(),
        }
    }

    /// Collapses the report into a single value.
    pub fn summary(&self) -> ChannelsSummary {
        match self {
            ChannelsReport::NotApplicable { enabled: true } => ChannelsSummary::Available,
            ChannelsReport::NotApplicable { enabled: false } => ChannelsSummary::Unavailable,
            ChannelsReport::Evaluated {
                any_channel_found: false,
                ..
            } => ChannelsSummary::None,
            ChannelsReport::Evaluated { statuses, .. } => {
                if statuses.values().any(|s| *s == ChannelStatus::Available) {
                    ChannelsSummary::Available
                } else {
                    ChannelsSummary::Unavailable
                }
            }
        }
    }
}

cfg_test! {
    impl ChannelsReport {
        /// Builds an evaluated report from `(id, status)` pairs.
        pub(crate) fn from_statuses(statuses: &[(&str, ChannelStatus)]) -> Self {
            let statuses: BTreeMap<String, ChannelStatus> = statuses
                .iter()
                .map(|(id, status)| (id.to_string(), *status))
                .collect();
            ChannelsReport::Evaluated {
                any_channel_found: !statuses.is_empty(),
                statuses,
                fault: None,
            }
        }
    }
}
