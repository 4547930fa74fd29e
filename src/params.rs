//! Render parameters loaded from the command line.

use crate::cli::Cli;
use crate::error::{Result, TfkeyError};

/// Name of the one required flag, as the user types it.
pub const PUBLIC_KEY_PATH_FLAG: &str = "publicKeyPath";

/// Values substituted into the key-pair template.
///
/// Only constructible through [`RenderParameters::new`] or
/// [`RenderParameters::from_cli`], both of which reject an empty public key
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParameters {
    public_key_path: String,
    key_name: String,
    region: String,
}

impl RenderParameters {
    /// Build parameters, failing if `public_key_path` is empty.
    ///
    /// The path is not checked for existence and the key name is not checked
    /// for format.
    pub fn new(
        public_key_path: impl Into<String>,
        key_name: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self> {
        let public_key_path = public_key_path.into();
        if public_key_path.is_empty() {
            return Err(TfkeyError::MissingRequiredArgument {
                flag: PUBLIC_KEY_PATH_FLAG,
                usage: Cli::usage(),
            });
        }

        Ok(Self {
            public_key_path,
            key_name: key_name.into(),
            region: region.into(),
        })
    }

    /// Load parameters from parsed command-line flags.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::new(cli.public_key_path, cli.key_name, cli.aws_region)
    }

    pub fn public_key_path(&self) -> &str {
        &self.public_key_path
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DEFAULT_REGION;

    #[test]
    fn test_from_cli_copies_every_flag() {
        let cli = Cli::try_parse_args([
            "tfkey",
            "-publicKeyPath",
            "/home/u/.ssh/id_rsa.pub",
            "-keyName",
            "demo",
            "-awsRegion",
            "eu-central-1",
        ])
        .unwrap();

        let params = RenderParameters::from_cli(cli).unwrap();

        assert_eq!(params.public_key_path(), "/home/u/.ssh/id_rsa.pub");
        assert_eq!(params.key_name(), "demo");
        assert_eq!(params.region(), "eu-central-1");
    }

    #[test]
    fn test_optional_flags_default() {
        let cli = Cli::try_parse_args(["tfkey", "-publicKeyPath", "k.pub"]).unwrap();
        let params = RenderParameters::from_cli(cli).unwrap();

        assert_eq!(params.key_name(), "");
        assert_eq!(params.region(), DEFAULT_REGION);
    }

    #[test]
    fn test_missing_public_key_path_is_rejected() {
        let cli = Cli::try_parse_args(["tfkey", "-keyName", "demo"]).unwrap();
        let err = RenderParameters::from_cli(cli).unwrap_err();

        match &err {
            TfkeyError::MissingRequiredArgument { flag, usage } => {
                assert_eq!(*flag, "publicKeyPath");
                assert!(usage.contains("--keyName"));
                assert!(usage.contains("--awsRegion"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_explicit_empty_public_key_path_is_rejected() {
        let cli = Cli::try_parse_args(["tfkey", "-publicKeyPath="]).unwrap();
        assert!(matches!(
            RenderParameters::from_cli(cli),
            Err(TfkeyError::MissingRequiredArgument { .. })
        ));
    }

    #[test]
    fn test_nonexistent_path_is_accepted() {
        let params = RenderParameters::new("/does/not/exist.pub", "", "").unwrap();
        assert_eq!(params.public_key_path(), "/does/not/exist.pub");
        assert_eq!(params.region(), "");
    }
}
