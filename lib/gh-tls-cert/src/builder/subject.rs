/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use anyhow::anyhow;
use openssl::nid::Nid;
use openssl::x509::{X509Name, X509NameBuilder};

#[derive(Default)]
pub struct SubjectNameBuilder {
    country: Option<String>,
    organization: Option<String>,
    common_name: Option<String>,
}

impl SubjectNameBuilder {
    pub fn set_country(&mut self, c: String) {
        self.country = Some(c);
    }

    pub fn set_organization(&mut self, o: String) {
        self.organization = Some(o);
    }

    pub fn set_common_name(&mut self, cn: String) {
        self.common_name = Some(cn);
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    pub fn build(&self) -> anyhow::Result<X509Name> {
        let mut builder = X509Name::builder()
            .map_err(|e| anyhow!("failed to create x509 subject name builder: {e}"))?;
        if let Some(c) = &self.country {
            builder
                .append_entry_by_nid(Nid::COUNTRYNAME, c)
                .map_err(|e| anyhow!("failed to set country name to {c}: {e}"))?;
        }
        if let Some(o) = &self.organization {
            builder
                .append_entry_by_nid(Nid::ORGANIZATIONNAME, o)
                .map_err(|e| anyhow!("failed to set organization name to {o}: {e}"))?;
        }
        if let Some(cn) = &self.common_name {
            builder
                .append_entry_by_nid(Nid::COMMONNAME, cn)
                .map_err(|e| anyhow!("failed to set common name to {cn}: {e}"))?;
        }
        Ok(builder.build())
    }
}
