use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(long, default_value = "0.0.0.0:8080", env = "BIND_ADDRESS")]
    pub bind_address: String,

    /// Maximum time to handle a single request.
    #[clap(long, default_value = "10s", env = "REQUEST_TIMEOUT")]
    pub request_timeout: humantime::Duration,

    /// What to do with form fields which are not numbers.
    #[clap(long, value_enum, default_value = "lenient", env = "INPUT_POLICY")]
    pub input_policy: InputPolicy,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum InputPolicy {
    /// Treat missing and malformed numbers as zeros.
    #[default]
    Lenient,

    /// Reject the form with `400 Bad Request`.
    Strict,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["imbalance-web"]).unwrap();
        assert_eq!(args.bind_address, "0.0.0.0:8080");
        assert_eq!(Duration::from(args.request_timeout), Duration::from_secs(10));
        assert_eq!(args.input_policy, InputPolicy::Lenient);
    }

    #[test]
    fn test_strict_policy() {
        let args = Args::try_parse_from([
            "imbalance-web",
            "--input-policy",
            "strict",
            "--request-timeout",
            "1min",
        ])
        .unwrap();
        assert_eq!(args.input_policy, InputPolicy::Strict);
        assert_eq!(Duration::from(args.request_timeout), Duration::from_secs(60));
    }
}
