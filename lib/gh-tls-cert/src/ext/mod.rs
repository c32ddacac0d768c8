/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

mod x509_builder;
pub use x509_builder::X509BuilderExt;
