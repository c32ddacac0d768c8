/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use openssl::asn1::Asn1Time;

pub(super) fn asn1_time_from_chrono(datetime: &DateTime<Utc>) -> anyhow::Result<Asn1Time> {
    Asn1Time::from_unix(datetime.timestamp()).map_err(|e| anyhow!("failed to get asn1 time: {e}"))
}
