// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use jtexpress_core::{Context, OsEnv, Result};
use jtexpress_http_send_reqwest::ReqwestHttpSend;
use jtexpress_open_platform::{Client, Config};

/// Create a context backed by a default `reqwest` client and the OS environment.
///
/// Build the context by hand with [`ReqwestHttpSend::new`] to set timeouts or proxies.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a client configured from the environment.
///
/// # Errors
///
/// Returns a `ConfigInvalid` error if `JTEXPRESS_API_ACCOUNT` or `JTEXPRESS_PRIVATE_KEY` is
/// missing.
pub fn default_client() -> Result<Client> {
    let ctx = default_context();
    let config = Config::new().from_env(&ctx);
    Client::from_config(ctx, config)
}
