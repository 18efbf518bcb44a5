use std::path::PathBuf;
use structopt::StructOpt;

use kiln::{Dictionary, Document, DocumentConfig, IndirectObject, Name, PdfString, StreamFilters};

/// Write a document whose page tree lives in an object stream.
#[derive(StructOpt, Debug)]
#[structopt(name = "object_stream")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// URI opened when the document is opened
    #[structopt(short, long)]
    uri: Option<String>,
}

fn build(opt: &Opt) -> kiln::Result<Document> {
    let (mut document, skeleton) = Document::with_skeleton(DocumentConfig::default());

    if let Some(uri) = &opt.uri {
        let action = document.insert(IndirectObject::new(
            Dictionary::typed("Action")
                .with("S", Name::from("URI"))
                .with("URI", PdfString::from(uri.as_str())),
        ));
        document
            .object_mut(skeleton.catalog)?
            .dictionary
            .insert("OpenAction", action);
        document.register(action)?;
    }

    let container = document.new_object_stream(StreamFilters::default());
    document.pack(container, &[skeleton.outlines, skeleton.pages, skeleton.page])?;
    Ok(document)
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let document = match build(&opt) {
        Ok(document) => document,
        Err(e) => {
            log::error!("Error while building the document: {}", e);
            return;
        }
    };

    log::debug!("Write to file");
    if let Err(e) = document.write(&opt.output) {
        log::error!("Error while writing {}: {}", opt.output.display(), e);
    }
}
