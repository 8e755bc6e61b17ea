use std::env;
use std::fs;
use std::path::Path;

// Variables que se leen con option_env! en src/config.rs
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "THEME_PRESET",
    "TOAST_LIFE_MS",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Cargar variables de entorno desde .env si existe
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

                    // El entorno del proceso tiene prioridad sobre .env
                    if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values (API_BASE_URL=http://localhost:8000/api).");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
