use std::env;
use std::fs;
use std::process::ExitCode;
use tagpress::{generate, GenerationRequest, LabelKind};

/// A simple CLI to generate a label PDF from a JSON request file.
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("A simple tool to generate label PDFs from JSON requests.");
        eprintln!();
        eprintln!(
            "Usage: {} <single|roll|sheet|barcode|barcode_qr|qr|qr_roll> <path/to/request.json> <path/to/output.pdf>",
            args[0]
        );
        return ExitCode::FAILURE;
    }

    let kind: LabelKind = match args[1].parse() {
        Ok(kind) => kind,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let request: GenerationRequest = match fs::read_to_string(&args[2])
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
    {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Failed to read request {}: {}", args[2], err);
            return ExitCode::FAILURE;
        }
    };

    let outcome = generate(kind, &request);
    if !outcome.is_success() {
        eprintln!(
            "Generation failed ({:?}): {}",
            outcome.status,
            outcome.error.unwrap_or_default()
        );
        return ExitCode::FAILURE;
    }

    let data = outcome.data.unwrap_or_default();
    if let Err(err) = fs::write(&args[3], &data) {
        eprintln!("Failed to write {}: {}", args[3], err);
        return ExitCode::FAILURE;
    }

    if let Some(metadata) = outcome.metadata {
        println!(
            "Successfully generated {} ({} bytes, suggested name {})",
            args[3],
            data.len(),
            metadata.filename
        );
    }
    ExitCode::SUCCESS
}
