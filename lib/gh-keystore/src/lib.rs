/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

mod error;
pub use error::ProvisionError;

mod secret;
pub use secret::{SecretStore, SharedSecret};

mod store;
pub use store::write_keystore;

#[cfg(test)]
pub(crate) mod test_util;
