use std::env;
use std::fs;
use std::path::Path;

const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "USE_MOCK_API",
    "ENABLE_LOGGING",
    "MOCK_LOGIN_LATENCY_MS",
    "MOCK_LIST_LATENCY_MS",
    "MOCK_ASSIGN_LATENCY_MS",
];

fn main() {
    // Load .env so option_env! in config.rs picks the values up
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Ignoring unknown .env key {}", key);
                        continue;
                    }

                    // Real environment variables win over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
