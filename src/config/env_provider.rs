/// Trait for providing environment variable access
///
/// Settings are read through this trait so tests can supply values without
/// touching the process-global environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
#[derive(Default)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_environment_provider() {
        let provider = SystemEnvironment;

        unsafe {
            std::env::set_var("CATALOG_TEST_VAR_12345", "test_value");
        }

        assert_eq!(
            provider.get_var("CATALOG_TEST_VAR_12345"),
            Some("test_value".to_string())
        );
        assert_eq!(provider.get_var("CATALOG_NON_EXISTENT_VAR_98765"), None);

        unsafe {
            std::env::remove_var("CATALOG_TEST_VAR_12345");
        }
    }

    #[test]
    fn test_mock_environment_provider() {
        let provider = MockEnvironment::empty()
            .with_var("SERVER_PORT", "8080")
            .with_var("LOG_LEVEL", "debug");

        assert_eq!(provider.get_var("SERVER_PORT"), Some("8080".to_string()));
        assert_eq!(provider.get_var("LOG_LEVEL"), Some("debug".to_string()));
        assert_eq!(provider.get_var("NON_EXISTENT"), None);
    }
}
