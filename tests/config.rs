#[cfg(test)]
mod tests {
    use logitrack::api::remote::RemoteConfig;
    use logitrack::libs::config::{Config, FuelConfig, HomeConfig};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static CONFIG_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = CONFIG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_returns_defaults_when_no_file_exists(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.fuel.is_none());
        assert!(config.remote.is_none());
        assert!(config.home.is_none());
        assert_eq!(config.fuel(), FuelConfig { efficiency: 12.0, price: 1.5 });
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            fuel: Some(FuelConfig { efficiency: 14.5, price: 1.89 }),
            remote: Some(RemoteConfig {
                api_url: "https://project.example.co".to_string(),
                api_key: "anon-key".to_string(),
            }),
            home: Some(HomeConfig { lat: 45.4642, lon: 9.19 }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.fuel, config.fuel);
        assert_eq!(loaded.remote, config.remote);
        assert_eq!(loaded.home, config.home);
    }
}
