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

//! Channel status evaluation for the application layer.

use serde_json::{Map, Value};

use crate::channel::evaluate::evaluate;
use crate::channel::status::{ChannelStatus, ChannelsReport, ChannelsSummary};
use crate::channel::ChannelFilter;
use crate::error::ServiceError;
use crate::manage::config::ReplyShape;
use crate::manage::host::NotificationHost;
use crate::manage::navigator::SettingsNavigator;
use crate::service::interface::{
    CHANNEL_AVAILABLE, CHANNEL_NONE, CHANNEL_UNAVAILABLE, KEY_CHANNELS_CREATED, KEY_COMPLETE,
    KEY_NEED_CHANNEL, KEY_STATUS,
};
use crate::service::message::{MethodCall, MethodResult};
use crate::service::NotificationPermissionsStub;

impl<H, N> NotificationPermissionsStub<H, N>
where
    H: NotificationHost,
    N: SettingsNavigator,
{
    /// Evaluates the channels selected by `filter`.
    pub fn check_channels(&self, filter: &ChannelFilter) -> ChannelsReport {
        evaluate(self.host.tier(), filter, &self.host)
    }

    pub(crate) fn check_channels_status(&self, call: &MethodCall) -> MethodResult {
        let filter = match parse_filter(&call.arguments) {
            Ok(filter) => filter,
            Err(e) => {
                error!("End Service checkChannelsStatus, failed: {}", e);
                return MethodResult::error(&call.method, &e);
            }
        };
        if filter.is_all() {
            debug!("checkChannelsStatus considers every channel");
        }
        let report = self.check_channels(&filter);
        info!(
            "End Service checkChannelsStatus, found {}, summary {:?}",
            report.any_channel_found(),
            report.summary()
        );
        let reply = match self.config.reply_shape() {
            ReplyShape::Detailed => detailed_reply(&report),
            ReplyShape::Summary => summary_reply(&report),
        };
        MethodResult::success(reply)
    }
}

/// Reads the requested channel ids.
///
/// `null` stands for the empty list; anything but a list of strings is rejected.
pub(crate) fn parse_filter(arguments: &Value) -> Result<ChannelFilter, ServiceError> {
    let ids = match arguments {
        Value::Null => return Ok(ChannelFilter::all()),
        Value::Array(ids) => ids,
        other => {
            return Err(ServiceError::ParameterCheck(format!(
                "channel ids must be a list, got {}",
                other
            )))
        }
    };
    ids.iter()
        .map(|id| {
            id.as_str().ok_or_else(|| {
                ServiceError::ParameterCheck(format!("channel id must be a string, got {}", id))
            })
        })
        .collect()
}

fn status_str(status: ChannelStatus) -> &'static str {
    match status {
        ChannelStatus::Available => CHANNEL_AVAILABLE,
        ChannelStatus::Unavailable => CHANNEL_UNAVAILABLE,
    }
}

/// Encodes the per-channel reply.
pub(crate) fn detailed_reply(report: &ChannelsReport) -> Value {
    let mut reply = Map::new();
    reply.insert(
        KEY_NEED_CHANNEL.to_string(),
        Value::Bool(report.channel_concept_supported()),
    );
    if !report.channel_concept_supported() {
        return Value::Object(reply);
    }
    let status: Map<String, Value> = report
        .statuses()
        .map(|(id, status)| (id.to_string(), Value::from(status_str(status))))
        .collect();
    reply.insert(
        KEY_CHANNELS_CREATED.to_string(),
        Value::Bool(report.any_channel_found()),
    );
    reply.insert(KEY_STATUS.to_string(), Value::Object(status));
    reply.insert(
        KEY_COMPLETE.to_string(),
        Value::Bool(report.enumeration_complete()),
    );
    Value::Object(reply)
}

/// Encodes the single value reply.
pub(crate) fn summary_reply(report: &ChannelsReport) -> Value {
    let summary = match report.summary() {
        ChannelsSummary::Available => CHANNEL_AVAILABLE,
        ChannelsSummary::Unavailable => CHANNEL_UNAVAILABLE,
        ChannelsSummary::None => CHANNEL_NONE,
    };
    Value::from(summary)
}
