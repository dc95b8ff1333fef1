use std::path::PathBuf;
use std::process;

use clap::Parser;

use spoofcheck_core::api::client::SpoofClient;
use spoofcheck_core::api::outcome::ApiOutcome;
use spoofcheck_core::pipeline::check_photo_use_case::CheckPhotoUseCase;
use spoofcheck_core::request::options::{CheckOptions, ModelVariant};
use spoofcheck_core::shared::constants::API_BASE_URL;

/// Check a photo against the remote face anti-spoofing service.
#[derive(Parser)]
#[command(name = "spoofcheck")]
struct Cli {
    /// Input image (PNG or JPEG).
    input: PathBuf,

    /// Model variant: convnext or transformer.
    #[arg(long, default_value = "transformer")]
    model: String,

    /// Request the plain real/spoof verdict instead of multi-class output.
    #[arg(long)]
    binary: bool,

    /// Service base URL (mainly for testing against a different host).
    #[arg(long, default_value = API_BASE_URL)]
    endpoint: String,

    /// Print the raw JSON-shaped outcome instead of the formatted summary.
    #[arg(long)]
    raw: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let options = CheckOptions {
        model: parse_model(&cli.model)?,
        binary: cli.binary,
    };

    let client = SpoofClient::with_base_url(&cli.endpoint)?;
    let use_case = CheckPhotoUseCase::new(client);
    let outcome = use_case.execute(&cli.input, &options)?;

    match outcome {
        ApiOutcome::Verdict(verdict) => {
            if cli.raw {
                println!(
                    "{}",
                    serde_json::json!({
                        "class": verdict.class,
                        "probs": verdict.probs,
                        "mode": verdict.mode,
                        "model": verdict.model,
                    })
                );
            } else {
                println!("{}", verdict.headline());
                println!("Mode: {}", verdict.mode);
                println!("Model: {}", verdict.model);
                for (label, pct) in verdict.breakdown() {
                    println!("  {label}: {pct}");
                }
            }
            log::info!("check complete for {}", cli.input.display());
        }
        ApiOutcome::Failure(failure) => {
            if cli.raw {
                println!("{}", serde_json::json!({ "error": failure.error }));
            }
            return Err(failure.error.into());
        }
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !cli.endpoint.starts_with("http://") && !cli.endpoint.starts_with("https://") {
        return Err(format!("Endpoint must be an http(s) URL, got '{}'", cli.endpoint).into());
    }
    Ok(())
}

fn parse_model(model: &str) -> Result<ModelVariant, Box<dyn std::error::Error>> {
    match model {
        "convnext" => Ok(ModelVariant::ConvNext),
        "transformer" => Ok(ModelVariant::Transformer),
        other => {
            Err(format!("Model must be 'convnext' or 'transformer', got '{other}'").into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(input: &str, model: &str, endpoint: &str) -> Cli {
        Cli {
            input: PathBuf::from(input),
            model: model.to_string(),
            binary: false,
            endpoint: endpoint.to_string(),
            raw: false,
        }
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let cli = cli_for("/definitely/not/here.png", "transformer", API_BASE_URL);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let cli = cli_for(tmp.path().to_str().unwrap(), "convnext", "ftp://nope");
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_parse_model_known_variants() {
        assert_eq!(parse_model("convnext").unwrap(), ModelVariant::ConvNext);
        assert_eq!(parse_model("transformer").unwrap(), ModelVariant::Transformer);
    }

    #[test]
    fn test_parse_model_rejects_unknown() {
        let err = parse_model("resnet").unwrap_err();
        assert!(err.to_string().contains("resnet"));
    }
}
