/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use anyhow::anyhow;
use openssl::asn1::Asn1Integer;
use openssl::bn::{BigNum, MsbOption};

// 8 byte serials, uniqueness across runs is not checked. Trust in the
// issued certificates is self-contained, so this is not CA grade and
// does not need to be.
pub(super) fn random_8() -> anyhow::Result<Asn1Integer> {
    let mut bn = BigNum::new().map_err(|e| anyhow!("failed to create big num: {e}"))?;
    bn.rand(64, MsbOption::ONE, false)
        .map_err(|e| anyhow!("failed to generate random big num: {e}"))?;
    bn.to_asn1_integer()
        .map_err(|e| anyhow!("failed to convert bn to asn1 integer: {e}"))
}
