use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward .env entries to option_env! unless already set
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

                    if !key.starts_with("LEARNIFY_") {
                        continue;
                    }
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using the local development backend. Copy .env.example to .env to point at another server.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "LEARNIFY_API_URL",
        "LEARNIFY_SOCKET_URL",
        "LEARNIFY_ENABLE_LOGGING",
        "LEARNIFY_TOAST_DURATION_MS",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
