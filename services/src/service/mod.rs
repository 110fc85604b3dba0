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

//! Method channel service of the notification permission plugin.
//!
//! This module exposes the stub that answers application calls, the names
//! used on the channel, and the command handlers behind each method.

/// Command handlers, one per method.
mod command;
/// Method and reply names used on the channel.
pub mod interface;
/// Call and reply messages.
pub mod message;
/// Global notification permission checks.
pub mod permission;
/// Method routing.
mod stub;

pub use stub::NotificationPermissionsStub;
