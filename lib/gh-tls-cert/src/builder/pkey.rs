/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use anyhow::anyhow;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;

pub(super) fn new_rsa(bits: u32) -> anyhow::Result<PKey<Private>> {
    let rsa_key =
        Rsa::generate(bits).map_err(|e| anyhow!("failed to generate rsa {bits} keypair: {e}"))?;
    PKey::from_rsa(rsa_key).map_err(|e| anyhow!("failed to convert rsa key to pkey: {e}"))
}
