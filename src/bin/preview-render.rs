use login_preview::{PreviewConfig, PreviewError};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: preview-render <preview.yaml> [more.yaml ...]");
        eprintln!();
        eprintln!("Writes the composed preview document next to each config");
        eprintln!("(preview.yaml -> preview.html). Pass '-' to read a single");
        eprintln!("config from stdin and write the document to stdout.");
        process::exit(1);
    }

    let files: Vec<_> = args[1..].to_vec();

    if files.len() == 1 && files[0] == "-" {
        match render_stdin() {
            Ok(()) => process::exit(0),
            Err(e) => {
                eprintln!("✗ stdin config has errors:");
                print_error(&e);
                process::exit(1);
            }
        }
    }

    let mut exit_code = 0;

    for file_path in files {
        match render_file(&file_path) {
            Ok(out_path) => {
                println!("✓ {} -> {}", file_path, out_path);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn render_stdin() -> Result<(), PreviewError> {
    let mut content = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut content)
        .map_err(|e| PreviewError::YamlError(format!("Failed to read stdin: {}", e)))?;

    let config = PreviewConfig::from_yaml(&content)?;
    let preview = config.compose()?;
    print!("{}", preview.to_document());
    Ok(())
}

fn render_file(path: &str) -> Result<String, PreviewError> {
    let content = fs::read_to_string(path)
        .map_err(|e| PreviewError::YamlError(format!("Failed to read file: {}", e)))?;

    let config = PreviewConfig::from_yaml(&content)?;
    let preview = config.compose()?;

    let out_path = Path::new(path).with_extension("html");
    let out_display = out_path.display().to_string();
    fs::write(&out_path, preview.to_document())
        .map_err(|e| PreviewError::YamlError(format!("Failed to write {}: {}", out_display, e)))?;

    Ok(out_display)
}

fn print_error(error: &PreviewError) {
    match error {
        PreviewError::InvalidVarName { name } => {
            eprintln!("  Invalid custom property name '{}':", name);
            eprintln!("    Must start with a letter and contain only letters, digits, and hyphens");
        }
        PreviewError::InvalidVarValue { name, reason } => {
            eprintln!("  Invalid value for custom property '{}':", name);
            eprintln!("    {}", reason);
        }
        PreviewError::InvalidResourceUrl { value, reason } => {
            eprintln!("  Invalid resource URL '{}':", value);
            eprintln!("    {}", reason);
        }
        PreviewError::InvalidResourceVersion { value } => {
            eprintln!("  Invalid resource version '{}':", value);
            eprintln!("    Must be non-empty and contain only letters, digits, dots, underscores, and hyphens");
        }
        PreviewError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
    }
}
