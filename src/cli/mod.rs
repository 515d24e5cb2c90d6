//! CLI argument handling and output.

mod flags;
mod parse;
pub mod prompts;
mod quiet;

pub use flags::CliFlags;
pub use parse::parse;

use std::fs::OpenOptions;
use std::io::Write;
use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use passgen::{Categories, Generator};

const DEFAULT_LENGTH: usize = 16;

/// Run CLI mode. Returns the process exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    if flags.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if flags.version {
        println!("passgen {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    quiet::set(flags.quiet);

    let categories = Categories {
        uppercase: !flags.no_upper,
        lowercase: !flags.no_lower,
        number: !flags.no_number,
        special: !flags.no_special,
    };
    let length = flags.length.unwrap_or(DEFAULT_LENGTH);

    let mut password = match Generator::new().generate(length, &categories) {
        Ok(password) => password,
        Err(e) => {
            prompts::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let result = output(&password, &flags);
    password.zeroize();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e);
            ExitCode::FAILURE
        }
    }
}

fn output(password: &str, flags: &CliFlags) -> Result<(), String> {
    if flags.clipboard {
        return copy_to_clipboard(password);
    }

    if let Some(ref path) = flags.output {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Failed to open {}: {}", path, e))?;

        let mut line = format!("{}\n", password);
        let written = file.write_all(line.as_bytes());
        line.zeroize();
        return written.map_err(|e| format!("Failed to write {}: {}", path, e));
    }

    println!("{}", password);
    Ok(())
}

fn copy_to_clipboard(password: &str) -> Result<(), String> {
    let mut ctx =
        ClipboardContext::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;

    ctx.set_contents(password.to_owned())
        .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;

    // Scrub the copy some providers hand back on read
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }

    prompts::clipboard_copied();
    Ok(())
}

fn print_help() {
    println!("passgen {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Generate a random password from selectable character categories.");
    println!();
    println!("Usage: passgen [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -l, --length <N>     Password length (default {})", DEFAULT_LENGTH);
    println!("      --no-upper       Exclude uppercase letters A-Z");
    println!("      --no-lower       Exclude lowercase letters a-z");
    println!("      --no-number      Exclude digits 0-9");
    println!("      --no-special     Exclude the special characters !$%&*@^");
    println!("  -b, --board          Copy the password to the clipboard");
    println!("  -o, --output <PATH>  Append the password to a file");
    println!("  -q, --quiet          Suppress warnings");
    println!("  -h, --help           Show this help");
    println!("  -v, --version        Show version");
}
