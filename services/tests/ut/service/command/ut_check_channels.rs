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

use serde_json::json;

use super::*;
use crate::channel::{CapabilityTier, Importance, NotificationChannel};
use crate::error::EnumerationFault;
use crate::manage::config::ConfigBuilder;
use crate::manage::host::StaticHost;
use crate::manage::navigator::MockSettingsNavigator;

fn stub(
    host: StaticHost,
    tier: CapabilityTier,
    shape: ReplyShape,
) -> NotificationPermissionsStub<StaticHost, MockSettingsNavigator> {
    let config = ConfigBuilder::new()
        .package_name("com.example.app")
        .tier(tier)
        .reply_shape(shape)
        .build()
        .unwrap();
    NotificationPermissionsStub::new(config, host, MockSettingsNavigator::new())
}

// @tc.name: ut_parse_filter
// @tc.desc: Test decoding of checkChannelsStatus arguments
// @tc.precon: NA
// @tc.step: 1. Decode null, an empty list and a list of ids
//           2. Decode a string and a list holding a number
// @tc.expect: Null and the empty list select all channels, a list selects
//             its ids, other values fail the parameter check
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_parse_filter() {
    assert!(parse_filter(&Value::Null).unwrap().is_all());
    assert!(parse_filter(&json!([])).unwrap().is_all());

    let filter = parse_filter(&json!(["a", "b"])).unwrap();
    assert!(filter.matches("a"));
    assert!(filter.matches("b"));
    assert!(!filter.matches("c"));

    assert!(matches!(
        parse_filter(&json!("a")),
        Err(ServiceError::ParameterCheck(_))
    ));
    assert!(matches!(
        parse_filter(&json!(["a", 1])),
        Err(ServiceError::ParameterCheck(_))
    ));
}

// @tc.name: ut_detailed_reply_not_applicable
// @tc.desc: Test the detailed reply of a host without channels
// @tc.precon: NA
// @tc.step: 1. Build the detailed reply of a NotApplicable report
// @tc.expect: Only needChannel is set, to false
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_detailed_reply_not_applicable() {
    let report = ChannelsReport::NotApplicable { enabled: true };
    assert_eq!(detailed_reply(&report), json!({ "needChannel": false }));
}

// @tc.name: ut_detailed_reply_partial
// @tc.desc: Test the detailed reply of an interrupted enumeration
// @tc.precon: NA
// @tc.step: 1. Build the detailed reply of a report carrying a fault
// @tc.expect: The statuses read so far are listed and complete is false
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_detailed_reply_partial() {
    let report = ChannelsReport::Evaluated {
        any_channel_found: true,
        statuses: [("a".to_string(), ChannelStatus::Available)]
            .into_iter()
            .collect(),
        fault: Some(EnumerationFault::new(1, "null channel")),
    };
    assert_eq!(
        detailed_reply(&report),
        json!({
            "needChannel": true,
            "channelsCreated": true,
            "status": { "a": "available" },
            "complete": false,
        })
    );
}

// @tc.name: ut_summary_reply
// @tc.desc: Test the summary reply
// @tc.precon: NA
// @tc.step: 1. Build summary replies for available, unavailable and empty reports
// @tc.expect: available, unavailable and none
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_summary_reply() {
    let report = ChannelsReport::from_statuses(&[
        ("a", ChannelStatus::Unavailable),
        ("b", ChannelStatus::Available),
    ]);
    assert_eq!(summary_reply(&report), json!("available"));

    let report = ChannelsReport::from_statuses(&[("a", ChannelStatus::Unavailable)]);
    assert_eq!(summary_reply(&report), json!("unavailable"));

    let report = ChannelsReport::from_statuses(&[]);
    assert_eq!(summary_reply(&report), json!("none"));
}

// @tc.name: ut_check_channels_status_summary
// @tc.desc: Test checkChannelsStatus with the summary reply shape
// @tc.precon: NA
// @tc.step: 1. Configure the summary reply shape
//           2. Call checkChannelsStatus with a filter selecting one channel
// @tc.expect: The summary of the selected channel only
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_check_channels_status_summary() {
    let host = StaticHost::new(true)
        .channel(NotificationChannel::new("a", Importance::None))
        .channel(NotificationChannel::new("b", Importance::High));
    let stub = stub(host, CapabilityTier::ChannelsNoGroups, ReplyShape::Summary);

    let call = MethodCall::with_arguments("checkChannelsStatus", json!(["a"]));
    assert_eq!(stub.check_channels_status(&call), MethodResult::success("unavailable"));

    let call = MethodCall::new("checkChannelsStatus");
    assert_eq!(stub.check_channels_status(&call), MethodResult::success("available"));
}

// @tc.name: ut_check_channels_status_bad_arguments
// @tc.desc: Test checkChannelsStatus with malformed arguments
// @tc.precon: NA
// @tc.step: 1. Call checkChannelsStatus with an object as arguments
// @tc.expect: An error reply carrying the parameter check code
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 2
#[test]
fn ut_check_channels_status_bad_arguments() {
    let stub = stub(
        StaticHost::new(true),
        CapabilityTier::ChannelsWithGroups,
        ReplyShape::Detailed,
    );
    let call = MethodCall::with_arguments("checkChannelsStatus", json!({ "id": "a" }));
    match stub.check_channels_status(&call) {
        MethodResult::Error { code, details, .. } => {
            assert_eq!(code, "checkChannelsStatus");
            assert_eq!(details, json!(401));
        }
        other => panic!("unexpected reply {:?}", other),
    }
}

// @tc.name: ut_check_channels_no_channels_tier
// @tc.desc: Test checkChannelsStatus on a host without channels
// @tc.precon: NA
// @tc.step: 1. Configure the tier without channels
//           2. Call checkChannelsStatus on a host holding channels
// @tc.expect: needChannel is false and no channel is reported
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_check_channels_no_channels_tier() {
    let host = StaticHost::new(false).channel(NotificationChannel::new("a", Importance::High));
    let stub = stub(host, CapabilityTier::NoChannels, ReplyShape::Detailed);
    let report = stub.check_channels(&ChannelFilter::all());
    assert!(!report.channel_concept_supported());
    assert_eq!(report.status("a"), None);

    let call = MethodCall::new("checkChannelsStatus");
    assert_eq!(
        stub.check_channels_status(&call),
        MethodResult::success(json!({ "needChannel": false }))
    );
}
