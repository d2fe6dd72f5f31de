use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Where the client is hosted. Decides the default backend address and how a
/// picked image is turned into an upload attachment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeTarget {
    Web,
    #[default]
    Ios,
    Android,
}

impl RuntimeTarget {
    /// Loopback address of a backend running on the developer machine, as seen
    /// from this target. The Android emulator reaches the host through its
    /// bridge address.
    pub fn default_api_base(self) -> &'static str {
        match self {
            RuntimeTarget::Web | RuntimeTarget::Ios => "http://127.0.0.1:8000",
            RuntimeTarget::Android => "http://10.0.2.2:8000",
        }
    }

    pub fn is_browser(self) -> bool {
        matches!(self, RuntimeTarget::Web)
    }
}

impl FromStr for RuntimeTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(RuntimeTarget::Web),
            "ios" => Ok(RuntimeTarget::Ios),
            "android" => Ok(RuntimeTarget::Android),
            other => anyhow::bail!("unknown runtime target '{}' (expected web, ios or android)", other),
        }
    }
}

impl fmt::Display for RuntimeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RuntimeTarget::Web => "web",
            RuntimeTarget::Ios => "ios",
            RuntimeTarget::Android => "android",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub target: RuntimeTarget,
}

impl AppConfig {
    pub fn new(target: RuntimeTarget, api_base: Option<&str>) -> Self {
        let base = api_base.unwrap_or_else(|| target.default_api_base());
        Self {
            api_base: base.trim_end_matches('/').to_string(),
            target,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(lookup, None, None)
    }

    /// Merges command-line overrides over the environment. A target given on
    /// the command line replaces `RUNTIME_TARGET` without it being parsed, and
    /// its default address applies unless a base URL is set somewhere.
    pub fn resolve<F>(
        lookup: F,
        cli_target: Option<&str>,
        cli_base: Option<&str>,
    ) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target = match cli_target {
            Some(t) => t.parse::<RuntimeTarget>()?,
            None => match lookup("RUNTIME_TARGET") {
                Some(v) if !v.trim().is_empty() => v.parse::<RuntimeTarget>()?,
                _ => RuntimeTarget::default(),
            },
        };
        let api_base = match cli_base {
            Some(base) => Some(base.to_string()),
            None => lookup("API_BASE_URL"),
        }
        .filter(|v| !v.trim().is_empty());
        Ok(Self::new(target, api_base.as_deref()))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_to_native_loopback() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.target, RuntimeTarget::Ios);
        assert_eq!(cfg.api_base, "http://127.0.0.1:8000");
    }

    #[test]
    fn android_uses_emulator_bridge() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("RUNTIME_TARGET", "Android")])).unwrap();
        assert_eq!(cfg.target, RuntimeTarget::Android);
        assert_eq!(cfg.api_base, "http://10.0.2.2:8000");
    }

    #[test]
    fn explicit_base_wins_and_is_trimmed() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("RUNTIME_TARGET", "web"),
            ("API_BASE_URL", "http://192.168.1.20:8000/"),
        ]))
        .unwrap();
        assert_eq!(cfg.target, RuntimeTarget::Web);
        assert_eq!(cfg.api_base, "http://192.168.1.20:8000");
        assert_eq!(cfg.endpoint("/plan-week"), "http://192.168.1.20:8000/plan-week");
    }

    #[test]
    fn rejects_unknown_target() {
        let err = AppConfig::from_lookup(lookup_from(&[("RUNTIME_TARGET", "windows")])).unwrap_err();
        assert!(err.to_string().contains("unknown runtime target"));
    }

    #[test]
    fn cli_target_switches_default_address() {
        let cfg = AppConfig::resolve(lookup_from(&[]), Some("android"), None).unwrap();
        assert_eq!(cfg.target, RuntimeTarget::Android);
        assert_eq!(cfg.api_base, "http://10.0.2.2:8000");
    }

    #[test]
    fn cli_target_keeps_env_base() {
        let env = lookup_from(&[("RUNTIME_TARGET", "ios"), ("API_BASE_URL", "http://lan:9000")]);
        let cfg = AppConfig::resolve(env, Some("android"), None).unwrap();
        assert_eq!(cfg.target, RuntimeTarget::Android);
        assert_eq!(cfg.api_base, "http://lan:9000");
    }

    #[test]
    fn cli_base_beats_env_base() {
        let env = lookup_from(&[("API_BASE_URL", "http://from-env:8000")]);
        let cfg = AppConfig::resolve(env, None, Some("http://from-cli:8000/")).unwrap();
        assert_eq!(cfg.target, RuntimeTarget::Ios);
        assert_eq!(cfg.api_base, "http://from-cli:8000");
    }

    #[test]
    fn cli_target_ignores_invalid_env_target() {
        let env = lookup_from(&[("RUNTIME_TARGET", "windows")]);
        let cfg = AppConfig::resolve(env, Some("web"), None).unwrap();
        assert_eq!(cfg.target, RuntimeTarget::Web);
        assert_eq!(cfg.api_base, "http://127.0.0.1:8000");
    }

    #[test]
    fn invalid_cli_target_is_rejected() {
        let err = AppConfig::resolve(lookup_from(&[]), Some("tizen"), None).unwrap_err();
        assert!(err.to_string().contains("unknown runtime target 'tizen'"));
    }
}
