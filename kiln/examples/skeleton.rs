use std::path::PathBuf;
use structopt::StructOpt;

use kiln::{Document, DocumentConfig, Escaping, TextOptions};

/// Write a one-page document with some text on it.
#[derive(StructOpt, Debug)]
#[structopt(name = "skeleton")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Text to place on the page, `\n` separates lines
    #[structopt(short, long, default_value = "Hello World")]
    text: String,

    /// Draw a frame around the text
    #[structopt(long)]
    outline: bool,

    /// Write streams without filters
    #[structopt(long)]
    plain: bool,

    /// Escape every name and string character
    #[structopt(long)]
    obfuscate: bool,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let mut config = DocumentConfig::default().with_title("Skeleton");
    if opt.obfuscate {
        config = config.with_escaping(Escaping::Obfuscated);
    }
    let (mut document, skeleton) = Document::with_skeleton(config);
    let mut options = TextOptions {
        outline: opt.outline,
        ..TextOptions::default()
    };
    if opt.plain {
        options.filters = kiln::StreamFilters::NONE;
    }

    let text = opt.text.replace("\\n", "\n");
    if let Err(e) = document.add_text(skeleton.page, &text, (72, 700), &options) {
        log::error!("Error while adding text: {}", e);
        return;
    }

    log::debug!("Write to file");
    if let Err(e) = document.write(&opt.output) {
        log::error!("Error while writing {}: {}", opt.output.display(), e);
    }
}
