use std::collections::BTreeMap;

/// Where settings look up their raw values
///
/// `SystemEnvironment` in the binary, `MockEnvironment` in tests.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// The process environment, after `.env` has been applied
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory variables, isolated from the process environment
#[derive(Debug, Default, Clone)]
pub struct MockEnvironment {
    vars: BTreeMap<String, String>,
}

impl MockEnvironment {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MockEnvironment {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(pairs: I) -> Self {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
