use std::env;
use std::path::PathBuf;

use packlab_eval::score_pack;
use packlab_parse::parse_pack_text;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path: Option<PathBuf> = args.next().map(PathBuf::from);
    let path = path.ok_or("missing pack path")?;

    let text = std::fs::read_to_string(&path)?;
    let pack = parse_pack_text(&text)?;
    let report = score_pack(&pack);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
