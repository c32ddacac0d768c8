/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use chrono::{TimeDelta, Utc};
use openssl::asn1::{Asn1Integer, Asn1Time};
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::x509::{X509, X509Builder};

use super::{SubjectNameBuilder, asn1_time_from_chrono};
use crate::ext::X509BuilderExt;

const DEFAULT_VALID_HOURS: i64 = 24;

/// Builder for a short-lived leaf certificate whose issuer equals its
/// subject and which is signed by its own key pair.
pub struct SelfSignedCertBuilder {
    pkey: PKey<Private>,
    serial: Asn1Integer,
    not_before: Asn1Time,
    not_after: Asn1Time,
    subject_builder: SubjectNameBuilder,
}

impl SelfSignedCertBuilder {
    pub fn new_rsa(bits: u32) -> anyhow::Result<Self> {
        let pkey = super::pkey::new_rsa(bits)?;
        SelfSignedCertBuilder::with_pkey(pkey)
    }

    pub fn with_pkey(pkey: PKey<Private>) -> anyhow::Result<Self> {
        let serial = super::serial::random_8()?;
        let (not_before, not_after) = valid_range(DEFAULT_VALID_HOURS)?;

        Ok(SelfSignedCertBuilder {
            pkey,
            serial,
            not_before,
            not_after,
            subject_builder: SubjectNameBuilder::default(),
        })
    }

    #[inline]
    pub fn subject_builder_mut(&mut self) -> &mut SubjectNameBuilder {
        &mut self.subject_builder
    }

    #[inline]
    pub fn subject_builder(&self) -> &SubjectNameBuilder {
        &self.subject_builder
    }

    #[inline]
    pub fn pkey(&self) -> &PKey<Private> {
        &self.pkey
    }

    pub fn into_pkey(self) -> PKey<Private> {
        self.pkey
    }

    pub fn set_serial(&mut self, serial: Asn1Integer) {
        self.serial = serial;
    }

    /// Reset the validity interval to `[now, now + hours)`.
    pub fn set_valid_hours(&mut self, hours: i64) -> anyhow::Result<()> {
        let (not_before, not_after) = valid_range(hours)?;
        self.not_before = not_before;
        self.not_after = not_after;
        Ok(())
    }

    pub fn build(&self, sign_digest: Option<MessageDigest>) -> anyhow::Result<X509> {
        let mut builder =
            X509Builder::new().map_err(|e| anyhow!("failed to create x509 builder {e}"))?;
        builder
            .set_pubkey(&self.pkey)
            .map_err(|e| anyhow!("failed to set pub key: {e}"))?;
        builder
            .set_serial_number(&self.serial)
            .map_err(|e| anyhow!("failed to set serial number: {e}"))?;

        builder
            .set_not_before(&self.not_before)
            .map_err(|e| anyhow!("failed to set NotBefore: {e}"))?;
        builder
            .set_not_after(&self.not_after)
            .map_err(|e| anyhow!("failed to set NotAfter: {e}"))?;

        builder
            .set_version(2)
            .map_err(|e| anyhow!("failed to set x509 version 3: {e}"))?;

        let subject_name = self
            .subject_builder
            .build()
            .context("failed to build subject name")?;
        builder
            .set_subject_name(&subject_name)
            .map_err(|e| anyhow!("failed to set subject name: {e}"))?;
        builder
            .set_issuer_name(&subject_name)
            .map_err(|e| anyhow!("failed to set issuer name: {e}"))?;

        builder
            .sign_with_optional_digest(&self.pkey, sign_digest)
            .map_err(|e| anyhow!("failed to sign: {e}"))?;

        Ok(builder.build())
    }
}

fn valid_range(hours: i64) -> anyhow::Result<(Asn1Time, Asn1Time)> {
    let time_now = Utc::now();
    let delta = TimeDelta::try_hours(hours).ok_or(anyhow!("invalid validity hours {hours}"))?;
    let time_after = time_now
        .checked_add_signed(delta)
        .ok_or(anyhow!("unable to get time after date"))?;
    let not_before = asn1_time_from_chrono(&time_now).context("failed to get NotBefore time")?;
    let not_after = asn1_time_from_chrono(&time_after).context("failed to set NotAfter time")?;
    Ok((not_before, not_after))
}
