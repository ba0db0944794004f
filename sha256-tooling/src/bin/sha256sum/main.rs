use anyhow::Result;
use log::info;
use sha256_core::hash_batch;
use sha256_core::vectors::{check_known_answers, KNOWN_ANSWERS};
use sha256_tooling::HashReport;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "sha256sum", about = "Print SHA-256 digests of text arguments")]
struct Opt {
    /// Check the built-in FIPS 180-4 vectors instead of hashing input.
    #[structopt(long)]
    vectors: bool,
    /// Print one JSON object per input.
    #[structopt(long)]
    json: bool,
    /// Each argument is hashed separately as UTF-8.
    texts: Vec<String>,
}

fn main() -> Result<()> {
    fil_logger::init();

    let opts = Opt::from_args();

    if opts.vectors {
        check_known_answers()?;
        info!("all {} known answers match", KNOWN_ANSWERS.len());
        println!("{} known answers ok", KNOWN_ANSWERS.len());
        return Ok(());
    }

    let messages: Vec<&[u8]> = opts.texts.iter().map(|text| text.as_bytes()).collect();
    let digests = hash_batch(&messages)?;

    for (text, digest) in opts.texts.iter().zip(digests.iter()) {
        if opts.json {
            println!("{}", serde_json::to_string(&HashReport::new(text, digest))?);
        } else {
            println!("{}  {}", digest, text);
        }
    }

    Ok(())
}
