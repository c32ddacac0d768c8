/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Group-H Security and/or its affiliates.
 */

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Arg, ArgMatches, Command, value_parser};

use crate::provision::{Role, RoleConfig};

const ARG_ROLE: &str = "role";
const ARG_SERVER_DIR: &str = "server-dir";
const ARG_CLIENT_DIR: &str = "client-dir";
const ARG_RSA_BITS: &str = "rsa";
const ARG_VALID_HOURS: &str = "valid-hours";
const ARG_COUNTRY: &str = "country";
const ARG_ORGANIZATION: &str = "organization";
const ARG_SERVER_CN: &str = "server-cn";
const ARG_CLIENT_CN: &str = "client-cn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleSelection {
    Server,
    Client,
    All,
}

pub struct ProcArgs {
    pub role: RoleSelection,
    pub server_dir: PathBuf,
    pub client_dir: PathBuf,
    pub rsa_bits: u32,
    pub valid_hours: i64,
    pub country: String,
    pub organization: String,
    pub server_cn: String,
    pub client_cn: String,
}

impl ProcArgs {
    /// Role pipelines to run, in order. `all` runs the server first so
    /// the client can share the secret the server directory carries.
    pub fn role_configs(&self) -> Vec<RoleConfig> {
        let mut configs = Vec::with_capacity(2);
        if matches!(self.role, RoleSelection::Server | RoleSelection::All) {
            configs.push(self.role_config(Role::Server));
        }
        if matches!(self.role, RoleSelection::Client | RoleSelection::All) {
            configs.push(self.role_config(Role::Client));
        }
        configs
    }

    fn role_config(&self, role: Role) -> RoleConfig {
        let (output_dir, common_name) = match role {
            Role::Server => (self.server_dir.clone(), self.server_cn.clone()),
            Role::Client => (self.client_dir.clone(), self.client_cn.clone()),
        };
        RoleConfig {
            role,
            output_dir,
            alias: role.as_str().to_string(),
            country: self.country.clone(),
            organization: self.organization.clone(),
            common_name,
            rsa_bits: self.rsa_bits,
            valid_hours: self.valid_hours,
        }
    }
}

pub fn commands() -> Command {
    Command::new("ghmkstore")
        .arg(
            Arg::new(ARG_ROLE)
                .help("Role(s) to provision")
                .value_parser(["server", "client", "all"])
                .default_value("all"),
        )
        .arg(
            Arg::new(ARG_SERVER_DIR)
                .help("Output directory for the server identity")
                .long(ARG_SERVER_DIR)
                .num_args(1)
                .default_value("stores")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_CLIENT_DIR)
                .help("Output directory for the client identity")
                .long(ARG_CLIENT_DIR)
                .num_args(1)
                .default_value("certs")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_RSA_BITS)
                .help("RSA key size in bits")
                .long(ARG_RSA_BITS)
                .num_args(1)
                .default_value("4096")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new(ARG_VALID_HOURS)
                .help("Certificate validity in hours")
                .long(ARG_VALID_HOURS)
                .num_args(1)
                .default_value("24")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_COUNTRY)
                .help("Country name for the subject")
                .long(ARG_COUNTRY)
                .num_args(1)
                .default_value("IE"),
        )
        .arg(
            Arg::new(ARG_ORGANIZATION)
                .help("Organization name for the subject")
                .long(ARG_ORGANIZATION)
                .num_args(1)
                .default_value("Group-H Security"),
        )
        .arg(
            Arg::new(ARG_SERVER_CN)
                .help("Common name of the server identity")
                .long(ARG_SERVER_CN)
                .num_args(1)
                .default_value("localhost"),
        )
        .arg(
            Arg::new(ARG_CLIENT_CN)
                .help("Common name of the client identity")
                .long(ARG_CLIENT_CN)
                .num_args(1)
                .default_value("client"),
        )
}

pub fn parse_clap() -> anyhow::Result<ProcArgs> {
    let args = commands().get_matches();
    proc_args(&args)
}

fn proc_args(args: &ArgMatches) -> anyhow::Result<ProcArgs> {
    let role = match args.get_one::<String>(ARG_ROLE).map(|s| s.as_str()) {
        Some("server") => RoleSelection::Server,
        Some("client") => RoleSelection::Client,
        Some("all") | None => RoleSelection::All,
        Some(other) => return Err(anyhow!("unsupported role {other}")),
    };
    let valid_hours = *args.get_one::<i64>(ARG_VALID_HOURS).unwrap();
    if valid_hours <= 0 {
        return Err(anyhow!("certificate validity should be positive"));
    }

    Ok(ProcArgs {
        role,
        server_dir: args.get_one::<PathBuf>(ARG_SERVER_DIR).unwrap().clone(),
        client_dir: args.get_one::<PathBuf>(ARG_CLIENT_DIR).unwrap().clone(),
        rsa_bits: *args.get_one::<u32>(ARG_RSA_BITS).unwrap(),
        valid_hours,
        country: args.get_one::<String>(ARG_COUNTRY).unwrap().clone(),
        organization: args.get_one::<String>(ARG_ORGANIZATION).unwrap().clone(),
        server_cn: args.get_one::<String>(ARG_SERVER_CN).unwrap().clone(),
        client_cn: args.get_one::<String>(ARG_CLIENT_CN).unwrap().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args() {
        let matches = commands().get_matches_from(["ghmkstore"]);
        let args = proc_args(&matches).unwrap();

        assert_eq!(args.role, RoleSelection::All);
        assert_eq!(args.server_dir, PathBuf::from("stores"));
        assert_eq!(args.client_dir, PathBuf::from("certs"));
        assert_eq!(args.rsa_bits, 4096);
        assert_eq!(args.valid_hours, 24);
        assert_eq!(args.country, "IE");
        assert_eq!(args.organization, "Group-H Security");
        assert_eq!(args.server_cn, "localhost");
        assert_eq!(args.client_cn, "client");

        let configs = args.role_configs();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].role, Role::Server);
        assert_eq!(configs[0].alias, "server");
        assert_eq!(configs[0].common_name, "localhost");
        assert_eq!(configs[1].role, Role::Client);
        assert_eq!(configs[1].alias, "client");
        assert_eq!(configs[1].common_name, "client");
    }

    #[test]
    fn single_role() {
        let matches = commands().get_matches_from(["ghmkstore", "client", "--client-dir", "out"]);
        let args = proc_args(&matches).unwrap();

        assert_eq!(args.role, RoleSelection::Client);
        let configs = args.role_configs();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].role, Role::Client);
        assert_eq!(configs[0].output_dir, PathBuf::from("out"));
    }

    #[test]
    fn rejects_zero_validity() {
        let matches = commands().get_matches_from(["ghmkstore", "--valid-hours", "0"]);
        assert!(proc_args(&matches).is_err());
    }
}
