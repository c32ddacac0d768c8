/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use gh_keystore::SecretStore;

pub mod opts;
use opts::ProcArgs;

mod provision;
pub use provision::{Identity, Role, RoleConfig, SECRET_FILE_NAME, provision};

pub fn run(proc_args: &ProcArgs) -> anyhow::Result<()> {
    // one secret per build, canonically stored beside the server
    // identity; every role pipeline receives the same resolved value
    let store = SecretStore::new(proc_args.server_dir.join(SECRET_FILE_NAME));
    let secret = store.get_or_create()?;

    for config in proc_args.role_configs() {
        provision(&config, &secret)?;
        println!(
            "{} identity provisioned: {}",
            config.role,
            config.keystore_file().display()
        );
    }
    Ok(())
}
