use std::env;
use std::path::PathBuf;

use packlab_parse::{parse_pack_text, ParseError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path: Option<PathBuf> = args.next().map(PathBuf::from);
    let path = path.ok_or("missing pack path")?;
    if args.next().is_some() {
        return Err("unexpected argument".into());
    }

    let text = std::fs::read_to_string(&path)?;

    match parse_pack_text(&text) {
        Ok(pack) => {
            println!("pack '{}' is valid: {} item(s)", pack.title, pack.items.len());
            Ok(())
        }
        Err(ParseError::Schema(report)) => {
            eprintln!("pack validation failed");
            for issue in &report.errors {
                eprintln!("error {} {}: {}", issue.code, issue.path, issue.message);
                if let Some(hint) = &issue.hint {
                    eprintln!("  hint: {hint}");
                }
            }
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
