/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use base64::prelude::*;
use log::debug;

use crate::ProvisionError;

const SECRET_SEED_LEN: usize = 24;

/// The protection password shared by all keystores of one build,
/// rendered as base64 text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lazily created secret file. The first `get_or_create` on a missing
/// path generates and persists the value; every later call returns the
/// persisted text verbatim and never rewrites the file.
pub struct SecretStore {
    path: PathBuf,
}

impl SecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SecretStore { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_or_create(&self) -> Result<SharedSecret, ProvisionError> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)
                .map_err(|e| ProvisionError::io(&self.path, e))?;
            debug!("reused keystore secret from {}", self.path.display());
            return Ok(SharedSecret(content.trim().to_string()));
        }

        let mut seed = [0u8; SECRET_SEED_LEN];
        openssl::rand::rand_bytes(&mut seed).map_err(|e| {
            ProvisionError::ProviderUnavailable(anyhow!("failed to generate secret seed: {e}"))
        })?;
        let value = BASE64_STANDARD.encode(seed);

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ProvisionError::io(dir, e))?;
        }
        std::fs::write(&self.path, &value).map_err(|e| ProvisionError::io(&self.path, e))?;
        debug!("new keystore secret written to {}", self.path.display());
        Ok(SharedSecret(value))
    }

    /// Write an already resolved secret to another location, so that a
    /// second role directory carries a textually identical copy. The
    /// store has no cross-location awareness of its own.
    pub fn persist(path: &Path, secret: &SharedSecret) -> Result<(), ProvisionError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ProvisionError::io(dir, e))?;
        }
        std::fs::write(path, secret.as_str()).map_err(|e| ProvisionError::io(path, e))
    }
}
