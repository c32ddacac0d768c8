/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure classes of the provisioning pipeline. All of them are fatal,
/// there are no retries and no partial-success recovery: artifacts
/// written before the failing step stay on disk and the caller is
/// expected to clean up and re-run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("crypto provider unavailable: {0}")]
    ProviderUnavailable(anyhow::Error),
    #[error("certificate signing failed: {0}")]
    Signing(anyhow::Error),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProvisionError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProvisionError::Io {
            path: path.into(),
            source,
        }
    }
}
