//! Process configuration.
//!
//! Settings come from three layers: an optional YAML file, `OS_*` / `OSAS_*`
//! environment variables, and command-line flags. Flags and environment win
//! over the file. The provider core itself never reads files or environment;
//! everything is resolved here and injected.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::provider::NodeGroupSpec;

#[derive(Debug, Parser)]
#[command(
    name = "osas-provider",
    about = "External gRPC cloud-provider adapter for OpenStack cluster autoscaling"
)]
pub struct Cli {
    /// Address the gRPC service listens on.
    #[arg(long, default_value = "0.0.0.0:8086", env = "OSAS_ADDRESS")]
    pub address: SocketAddr,

    /// Path to the server certificate file. Unset for plaintext.
    #[arg(long, env = "OSAS_CERT")]
    pub cert: Option<PathBuf>,

    /// Path to the server certificate key file.
    #[arg(long, env = "OSAS_KEY_CERT")]
    pub key_cert: Option<PathBuf>,

    /// Path to the CA certificate used to verify client certificates.
    #[arg(long, env = "OSAS_CA_CERT")]
    pub ca_cert: Option<PathBuf>,

    /// Path to a YAML settings file with cloud credentials and node groups.
    #[arg(long, env = "OSAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info", env = "OSAS_LOG_LEVEL")]
    pub log_level: String,

    #[command(flatten)]
    pub cloud: CloudArgs,
}

/// OpenStack credential overrides, using the conventional `OS_*` variables.
#[derive(Debug, Default, clap::Args)]
pub struct CloudArgs {
    /// Keystone endpoint, including the version suffix.
    #[arg(long, env = "OS_AUTH_URL")]
    pub auth_url: Option<String>,

    #[arg(long, env = "OS_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "OS_PASSWORD")]
    pub password: Option<String>,

    #[arg(long, env = "OS_PROJECT_NAME")]
    pub project_name: Option<String>,

    #[arg(long, env = "OS_PROJECT_ID")]
    pub project_id: Option<String>,

    #[arg(long, env = "OS_USER_DOMAIN_NAME")]
    pub user_domain_name: Option<String>,

    #[arg(long, env = "OS_PROJECT_DOMAIN_NAME")]
    pub project_domain_name: Option<String>,

    #[arg(long, env = "OS_APPLICATION_CREDENTIAL_ID")]
    pub application_credential_id: Option<String>,

    #[arg(long, env = "OS_APPLICATION_CREDENTIAL_NAME")]
    pub application_credential_name: Option<String>,

    #[arg(long, env = "OS_APPLICATION_CREDENTIAL_SECRET")]
    pub application_credential_secret: Option<String>,

    #[arg(long, env = "OS_REGION_NAME")]
    pub region: Option<String>,

    /// Endpoint interface to pick from the service catalog.
    #[arg(long, env = "OS_INTERFACE")]
    pub interface: Option<String>,
}

/// Resolved cloud credentials. Empty strings mean "unset".
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub auth_url: String,
    pub username: String,
    pub password: String,
    pub project_name: String,
    pub project_id: String,
    pub user_domain_name: String,
    pub project_domain_name: String,
    pub application_credential_id: String,
    pub application_credential_name: String,
    pub application_credential_secret: String,
    pub region: String,
    pub interface: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            auth_url: String::new(),
            username: String::new(),
            password: String::new(),
            project_name: String::new(),
            project_id: String::new(),
            user_domain_name: "Default".to_string(),
            project_domain_name: "Default".to_string(),
            application_credential_id: String::new(),
            application_credential_name: String::new(),
            application_credential_secret: String::new(),
            region: String::new(),
            interface: "public".to_string(),
        }
    }
}

impl CloudConfig {
    /// Require one complete credential set and forbid mixing them.
    pub fn validate_auth(&self) -> Result<()> {
        if self.auth_url.is_empty() {
            bail!("auth_url is required (OS_AUTH_URL)");
        }

        let app_cred_id_auth = !self.application_credential_id.is_empty()
            && !self.application_credential_secret.is_empty();
        let app_cred_name_auth = !self.application_credential_name.is_empty()
            && !self.application_credential_secret.is_empty()
            && !self.username.is_empty();
        let password_auth = !self.username.is_empty() && !self.password.is_empty();

        if !app_cred_id_auth && !app_cred_name_auth && !password_auth {
            bail!(
                "authentication configuration incomplete: provide either \
                 (OS_APPLICATION_CREDENTIAL_ID + OS_APPLICATION_CREDENTIAL_SECRET) or \
                 (OS_APPLICATION_CREDENTIAL_NAME + OS_APPLICATION_CREDENTIAL_SECRET + OS_USERNAME) or \
                 (OS_USERNAME + OS_PASSWORD)"
            );
        }

        if (app_cred_id_auth || app_cred_name_auth) && !self.password.is_empty() {
            bail!("cannot mix application credentials with password authentication");
        }

        Ok(())
    }
}

/// Shape of the YAML settings file.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub cloud: CloudConfig,
    #[serde(default, rename = "nodeGroups")]
    pub node_groups: Vec<NodeGroupSpec>,
}

impl Settings {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("failed to parse settings file")
    }
}

/// Paths to mutual-TLS material. All three are required together.
#[derive(Debug, Clone)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
    pub ca: PathBuf,
}

/// Fully resolved process configuration.
#[derive(Debug)]
pub struct Config {
    pub address: SocketAddr,
    pub log_level: String,
    pub tls: Option<TlsPaths>,
    pub cloud: CloudConfig,
    pub node_groups: Vec<NodeGroupSpec>,
}

impl Cli {
    /// Merge the settings file with flag/environment overrides.
    pub fn load(self) -> Result<Config> {
        let settings = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings file {}", path.display()))?;
                Settings::from_yaml(&text)?
            }
            None => Settings::default(),
        };

        let mut cloud = settings.cloud;
        apply_overrides(&mut cloud, &self.cloud);
        cloud.validate_auth()?;

        let tls = match (self.cert, self.key_cert, self.ca_cert) {
            (Some(cert), Some(key), Some(ca)) => Some(TlsPaths { cert, key, ca }),
            (None, None, None) => None,
            _ => bail!("--cert, --key-cert and --ca-cert must be provided together"),
        };

        Ok(Config {
            address: self.address,
            log_level: self.log_level,
            tls,
            cloud,
            node_groups: settings.node_groups,
        })
    }
}

fn apply_overrides(cloud: &mut CloudConfig, args: &CloudArgs) {
    let fields: [(&Option<String>, &mut String); 12] = [
        (&args.auth_url, &mut cloud.auth_url),
        (&args.username, &mut cloud.username),
        (&args.password, &mut cloud.password),
        (&args.project_name, &mut cloud.project_name),
        (&args.project_id, &mut cloud.project_id),
        (&args.user_domain_name, &mut cloud.user_domain_name),
        (&args.project_domain_name, &mut cloud.project_domain_name),
        (
            &args.application_credential_id,
            &mut cloud.application_credential_id,
        ),
        (
            &args.application_credential_name,
            &mut cloud.application_credential_name,
        ),
        (
            &args.application_credential_secret,
            &mut cloud.application_credential_secret,
        ),
        (&args.region, &mut cloud.region),
        (&args.interface, &mut cloud.interface),
    ];

    for (value, slot) in fields {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn cloud(fields: &[(&str, &str)]) -> CloudConfig {
        let mut cloud = CloudConfig {
            auth_url: "https://keystone.example/v3".to_string(),
            ..CloudConfig::default()
        };
        for (key, value) in fields {
            let slot = match *key {
                "username" => &mut cloud.username,
                "password" => &mut cloud.password,
                "application_credential_id" => &mut cloud.application_credential_id,
                "application_credential_name" => &mut cloud.application_credential_name,
                "application_credential_secret" => &mut cloud.application_credential_secret,
                other => panic!("unknown field {other}"),
            };
            *slot = value.to_string();
        }
        cloud
    }

    #[rstest]
    #[case::password(&[("username", "u"), ("password", "p")], true)]
    #[case::app_cred_id(&[("application_credential_id", "id"), ("application_credential_secret", "s")], true)]
    #[case::app_cred_name(
        &[("application_credential_name", "n"), ("application_credential_secret", "s"), ("username", "u")],
        true
    )]
    #[case::nothing(&[], false)]
    #[case::username_only(&[("username", "u")], false)]
    #[case::secret_only(&[("application_credential_secret", "s")], false)]
    #[case::mixed(
        &[("application_credential_id", "id"), ("application_credential_secret", "s"), ("password", "p")],
        false
    )]
    fn validate_auth_matrix(#[case] fields: &[(&str, &str)], #[case] ok: bool) {
        assert_eq!(cloud(fields).validate_auth().is_ok(), ok);
    }

    #[test]
    fn missing_auth_url_is_rejected() {
        let mut cloud = cloud(&[("username", "u"), ("password", "p")]);
        cloud.auth_url.clear();
        assert!(cloud.validate_auth().is_err());
    }

    #[test]
    fn settings_parse_camel_case_node_groups() {
        let yaml = r##"
cloud:
  auth_url: https://keystone.example/v3
  username: demo
  password: secret
  project_name: demo-project
nodeGroups:
  - id: workers
    minSize: 1
    maxSize: 5
    flavorName: m1.large
    imageName: ubuntu-22.04
    securityGroups: [default]
    networkId: net-1
    availabilityZone: nova
    userData: "#cloud-config"
    metadata:
      team: platform
    labels:
      role: worker
"##;

        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.cloud.username, "demo");
        assert_eq!(settings.cloud.user_domain_name, "Default");
        assert_eq!(settings.node_groups.len(), 1);

        let group = &settings.node_groups[0];
        assert_eq!(group.id, "workers");
        assert_eq!(group.min_size, 1);
        assert_eq!(group.max_size, 5);
        assert_eq!(group.flavor_name, "m1.large");
        assert_eq!(group.image_name.as_deref(), Some("ubuntu-22.04"));
        assert_eq!(group.security_groups, vec!["default".to_string()]);
        assert_eq!(group.network_id.as_deref(), Some("net-1"));
        assert_eq!(group.metadata["team"], "platform");
        assert_eq!(group.labels["role"], "worker");
    }

    #[test]
    fn empty_settings_default_cleanly() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert!(settings.node_groups.is_empty());
        assert_eq!(settings.cloud.interface, "public");
    }
}
