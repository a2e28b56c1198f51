use std::env;
use std::fs;
use std::path::Path;

// Claves que el frontend lee con option_env! (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &[
    "MAP_API_KEY",
    "FIRESTORE_PROJECT_ID",
    "FIRESTORE_API_KEY",
    "MARKERS_COLLECTION",
    "MAP_CENTER_LAT",
    "MAP_CENTER_LNG",
    "MAP_ZOOM",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Copy .env.example to .env and set MAP_API_KEY / FIRESTORE_PROJECT_ID.");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=Could not read .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown key in .env: {}", key);
            continue;
        }

        // Las variables ya definidas en el entorno tienen prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
