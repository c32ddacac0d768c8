/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "vendored-openssl")]
    openssl_probe::init_openssl_env_vars();

    let proc_args = ghmkstore::opts::parse_clap()?;
    ghmkstore::run(&proc_args)
}
