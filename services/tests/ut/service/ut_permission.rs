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
use crate::manage::host::MockNotificationHost;

// @tc.name: ut_permission_status
// @tc.desc: Test the global permission status
// @tc.precon: NA
// @tc.step: 1. Mock a host with notifications enabled, then disabled
//           2. Check the permission status
// @tc.expect: Granted when enabled, Denied otherwise
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_permission_status() {
    let mut host = MockNotificationHost::new();
    host.expect_are_notifications_enabled()
        .times(1)
        .return_const(true);
    assert_eq!(PermissionChecker::status(&host), PermissionStatus::Granted);

    let mut host = MockNotificationHost::new();
    host.expect_are_notifications_enabled()
        .times(1)
        .return_const(false);
    assert_eq!(PermissionChecker::status(&host), PermissionStatus::Denied);
}

// @tc.name: ut_permission_status_str
// @tc.desc: Test the reply strings of permission status
// @tc.precon: NA
// @tc.step: 1. Convert each status into its reply string
// @tc.expect: granted and denied
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_permission_status_str() {
    assert_eq!(PermissionStatus::Granted.as_str(), "granted");
    assert_eq!(PermissionStatus::Denied.as_str(), "denied");
}
