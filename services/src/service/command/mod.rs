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

//! Command handlers of the notification permission service.
//!
//! Each submodule implements one method of the channel on the stub, both as
//! a typed call and as the handler turning a [`MethodCall`] into a
//! [`MethodResult`].
//!
//! [`MethodCall`]: crate::service::message::MethodCall
//! [`MethodResult`]: crate::service::message::MethodResult

mod check_channels; // Channel status evaluation
mod get_status;     // Global permission status
mod navigate;       // Unconditional settings navigation
mod request;        // Settings navigation when denied
