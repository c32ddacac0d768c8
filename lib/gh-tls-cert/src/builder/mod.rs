/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

mod pkey;
mod serial;

mod subject;
pub use subject::SubjectNameBuilder;

mod time;
use time::asn1_time_from_chrono;

mod self_signed;
pub use self_signed::SelfSignedCertBuilder;
