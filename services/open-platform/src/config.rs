use std::fmt::{Debug, Formatter};

use crate::constants::*;
use crate::Credential;
use jtexpress_core::{utils::Redact, Context, Error, Result};

/// Config carries all the configuration for the open platform client.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_account` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JTEXPRESS_API_ACCOUNT`]
    pub api_account: Option<String>,
    /// `private_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JTEXPRESS_PRIVATE_KEY`]
    pub private_key: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JTEXPRESS_BASE_URL`]
    /// - [`DEFAULT_BASE_URL`] otherwise
    pub base_url: Option<String>,
    /// `lang` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`JTEXPRESS_LANG`]
    /// - [`DEFAULT_LANG`] otherwise
    pub lang: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_account
    pub fn with_api_account(mut self, api_account: impl Into<String>) -> Self {
        self.api_account = Some(api_account.into());
        self
    }

    /// Set private_key
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Set base_url, for example a staging environment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set lang
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(JTEXPRESS_API_ACCOUNT) {
            self.api_account.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(JTEXPRESS_PRIVATE_KEY) {
            self.private_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(JTEXPRESS_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(JTEXPRESS_LANG) {
            self.lang.get_or_insert(v);
        }

        self
    }

    /// Build the credential out of this config.
    ///
    /// Both `api_account` and `private_key` must be present and non-empty.
    pub fn credential(&self) -> Result<Credential> {
        let api_account = self
            .api_account
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::config_invalid(format!(
                    "api_account is required, set it in config or env {JTEXPRESS_API_ACCOUNT}"
                ))
            })?;
        let private_key = self
            .private_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::config_invalid(format!(
                    "private_key is required, set it in config or env {JTEXPRESS_PRIVATE_KEY}"
                ))
            })?;

        Ok(Credential::new(api_account, private_key))
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_account", &self.api_account.as_ref().map(Redact::from))
            .field("private_key", &self.private_key.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .field("lang", &self.lang)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jtexpress_core::{ErrorKind, OsEnv, StaticEnv};
    use std::collections::HashMap;

    #[test]
    fn test_config_from_static_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (JTEXPRESS_API_ACCOUNT.to_string(), "178337126125932605".to_string()),
                (JTEXPRESS_PRIVATE_KEY.to_string(), "test_key".to_string()),
                (JTEXPRESS_BASE_URL.to_string(), "https://uat-openapi.jtexpress.com.cn".to_string()),
            ]),
        });

        let config = Config::new().with_lang("en").from_env(&ctx);
        assert_eq!(config.api_account.as_deref(), Some("178337126125932605"));
        assert_eq!(config.private_key.as_deref(), Some("test_key"));
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://uat-openapi.jtexpress.com.cn")
        );
        assert_eq!(config.lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_explicit_fields_win_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(JTEXPRESS_API_ACCOUNT.to_string(), "from_env".to_string())]),
        });

        let config = Config::new().with_api_account("explicit").from_env(&ctx);
        assert_eq!(config.api_account.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_config_from_os_env() {
        temp_env::with_vars(
            vec![
                (JTEXPRESS_API_ACCOUNT, Some("test_account")),
                (JTEXPRESS_PRIVATE_KEY, Some("test_key")),
                (JTEXPRESS_BASE_URL, None),
            ],
            || {
                let ctx = Context::new().with_env(OsEnv);
                let config = Config::new().from_env(&ctx);

                let cred = config.credential().expect("credential must be complete");
                assert_eq!("test_account", cred.api_account);
                assert_eq!("test_key", cred.private_key);
                assert!(config.base_url.is_none());
            },
        );
    }

    #[test]
    fn test_credential_requires_both_fields() {
        let err = Config::new().with_private_key("key").credential().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.to_string().contains("api_account"));

        let err = Config::new()
            .with_api_account("account")
            .with_private_key("")
            .credential()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.to_string().contains("private_key"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new()
            .with_api_account("178337126125932605")
            .with_private_key("a0a1047cce70493c9d5d29704f05d0d9");
        let output = format!("{config:?}");
        assert!(!output.contains("a0a1047cce70493c9d5d29704f05d0d9"));
        assert!(output.contains("a0a***0d9"));
    }
}
