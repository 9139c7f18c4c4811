use std::env::var;

/// These are never logged.
const SENSITIVE_ENV_VARS: [&str; 3] = ["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "AWS_SESSION_TOKEN"];

pub struct Config {
    /// Set by AWS, e.g. my-lambda
    pub function_name: String,
    /// Set by AWS, e.g. $LATEST or 3
    pub function_version: String,
    /// Log all env vars on cold start if ECHO_LAMBDA_PRINT_ENV is set to a truthy value
    pub print_env: bool,
}

impl Config {
    /// Creates a new Config instance from the environment variables.
    /// Uses default values for anything that is not set. Does not panic.
    pub fn from_env() -> Self {
        let function_name = var("AWS_LAMBDA_FUNCTION_NAME").unwrap_or_else(|_e| "echo-lambda".to_string());
        let function_version = var("AWS_LAMBDA_FUNCTION_VERSION").unwrap_or_else(|_e| "$LATEST".to_string());

        let print_env = match var("ECHO_LAMBDA_PRINT_ENV") {
            Ok(v) => is_truthy(&v),
            Err(_) => false,
        };

        Self {
            function_name,
            function_version,
            print_env,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Returns all environment variables in the form of `export KEY=VALUE key2=value2`
/// with AWS credentials left out.
/// Non-UTF-8 names and values are converted lossily instead of panicking.
pub fn env_vars_line() -> String {
    let mut env_vars = Vec::<String>::with_capacity(30);
    for (key, value) in std::env::vars_os() {
        let key = key.to_string_lossy();
        if SENSITIVE_ENV_VARS.contains(&&*key) {
            continue;
        }
        env_vars.push(format!("{}={}", key, value.to_string_lossy()));
    }

    // the list is easier to deal with when sorted
    env_vars.sort();

    ["export", &env_vars.join(" ")].join(" ")
}
