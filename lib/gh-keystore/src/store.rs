/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use std::io::Write;
use std::path::Path;

use anyhow::anyhow;
use log::debug;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::{PKey, Private};
use openssl::x509::X509;

use crate::{ProvisionError, SharedSecret};

/// Bundle a private key and its certificate into a password protected
/// PKCS#12 keystore file at `path`, stored under `alias`.
///
/// The file write is not atomic. A crash mid-write leaves a truncated
/// keystore behind; the recovery path is to delete and re-run.
pub fn write_keystore(
    path: &Path,
    alias: &str,
    key: &PKey<Private>,
    cert: &X509,
    secret: &SharedSecret,
) -> Result<(), ProvisionError> {
    let mut builder = Pkcs12::builder();
    builder.name(alias);
    builder.pkey(key);
    builder.cert(cert);
    let pkcs12 = builder.build2(secret.as_str()).map_err(|e| {
        ProvisionError::ProviderUnavailable(anyhow!("failed to build pkcs12 keystore: {e}"))
    })?;
    let der = pkcs12.to_der().map_err(|e| {
        ProvisionError::ProviderUnavailable(anyhow!("failed to encode pkcs12 keystore: {e}"))
    })?;

    let mut file = std::fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ProvisionError::io(path, e))?;
    file.write_all(&der)
        .map_err(|e| ProvisionError::io(path, e))?;
    debug!("keystore written to {} under alias {alias}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TempDir;
    use crate::SecretStore;
    use gh_tls_cert::builder::SelfSignedCertBuilder;
    use std::fs;

    fn test_identity(cn: &str) -> (PKey<Private>, X509) {
        let mut builder = SelfSignedCertBuilder::new_rsa(2048).unwrap();
        builder
            .subject_builder_mut()
            .set_common_name(cn.to_string());
        let cert = builder.build(None).unwrap();
        (builder.into_pkey(), cert)
    }

    #[test]
    fn keystore_round_trip() {
        let temp_dir = TempDir::new("keystore_round_trip");
        let secret = SecretStore::new(temp_dir.path().join("keystorePass.txt"))
            .get_or_create()
            .unwrap();
        let (key, cert) = test_identity("localhost");

        let path = temp_dir.path().join("server-keystore.p12");
        write_keystore(&path, "server", &key, &cert, &secret).unwrap();

        let der = fs::read(&path).unwrap();
        let parsed = Pkcs12::from_der(&der)
            .unwrap()
            .parse2(secret.as_str())
            .unwrap();

        let stored_key = parsed.pkey.unwrap();
        let stored_cert = parsed.cert.unwrap();
        assert_eq!(stored_cert.alias(), Some(b"server".as_ref()));
        assert_eq!(
            stored_key.public_key_to_der().unwrap(),
            key.public_key_to_der().unwrap()
        );
        assert_eq!(
            stored_cert.public_key().unwrap().public_key_to_der().unwrap(),
            key.public_key_to_der().unwrap()
        );
        assert_eq!(parsed.ca.map(|ca| ca.len()).unwrap_or(0), 0);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let temp_dir = TempDir::new("keystore_bad_pass");
        let secret = SecretStore::new(temp_dir.path().join("keystorePass.txt"))
            .get_or_create()
            .unwrap();
        let (key, cert) = test_identity("localhost");

        let path = temp_dir.path().join("server-keystore.p12");
        write_keystore(&path, "server", &key, &cert, &secret).unwrap();

        let der = fs::read(&path).unwrap();
        assert!(Pkcs12::from_der(&der).unwrap().parse2("not-the-secret").is_err());
    }

    #[test]
    fn overwrites_existing_file() {
        let temp_dir = TempDir::new("keystore_overwrite");
        let secret = SecretStore::new(temp_dir.path().join("keystorePass.txt"))
            .get_or_create()
            .unwrap();
        let (key, cert) = test_identity("localhost");

        let path = temp_dir.path().join("server-keystore.p12");
        fs::write(&path, b"stale bytes").unwrap();
        write_keystore(&path, "server", &key, &cert, &secret).unwrap();

        let der = fs::read(&path).unwrap();
        assert!(Pkcs12::from_der(&der).unwrap().parse2(secret.as_str()).is_ok());
    }
}
