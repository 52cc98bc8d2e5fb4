//! Environment variable lookup.

use std::collections::HashMap;
use std::fmt;

/// Read-only view of environment variables.
///
/// The wizard only displays these or branches on their presence, so tests
/// can substitute a fixed set.
pub struct Environment {
    lookup: Box<dyn Fn(&str) -> Option<String>>,
}

impl Environment {
    /// Variables of the current process.
    pub fn system() -> Self {
        Self {
            lookup: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// A fixed set of variables; everything else is unset.
    ///
    /// ```rust
    /// use appium_setup::Environment;
    ///
    /// let env = Environment::fixed([("JAVA_HOME", "/opt/jdk")]);
    /// assert_eq!(env.get("JAVA_HOME").as_deref(), Some("/opt/jdk"));
    /// assert_eq!(env.get("ANDROID_HOME"), None);
    /// ```
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            lookup: Box::new(move |key| vars.get(key).cloned()),
        }
    }

    /// Value of `key`, treating an empty value as unset.
    pub fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.is_empty())
    }

    /// First set variable among `keys`.
    pub fn first_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get(key))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
