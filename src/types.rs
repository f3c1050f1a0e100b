use crate::modules::menu::repository::MenuStore;
use async_trait::async_trait;
use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
    Test,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            "development" => Self::Development,
            "test" => Self::Test,
            unrecognised => panic!("Unrecognised APP_ENV {}", unrecognised),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub debug: bool,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub menus: MenuStore,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub debug: bool,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").expect("APP_ENV not set");
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .expect("Invalid PORT number");
        let debug = env::var("DEBUG")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .expect("Invalid DEBUG flag");

        Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                debug,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                debug: self.app.debug,
            },
            menus: MenuStore::seeded(),
        }
    }
}
