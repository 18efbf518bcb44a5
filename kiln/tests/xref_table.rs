mod common;

use kiln::{Dictionary, Document, IndirectObject, StreamFilters, TextOptions};
use nom::{
    bytes::complete::{tag, take},
    character::complete::{digit1, one_of},
    combinator::map_res,
    multi::count,
    sequence::{terminated, tuple},
    IResult,
};

#[derive(Debug, PartialEq)]
struct Entry {
    offset: usize,
    generation: u32,
    kind: char,
}

fn number<T: std::str::FromStr>(input: &[u8]) -> IResult<&[u8], T> {
    map_res(map_res(digit1, std::str::from_utf8), str::parse)(input)
}

/// `len` digits, zero padded.
fn fixed<T: std::str::FromStr>(input: &[u8], len: usize) -> IResult<&[u8], T> {
    map_res(map_res(take(len), std::str::from_utf8), str::parse)(input)
}

fn offset(input: &[u8]) -> IResult<&[u8], usize> {
    fixed(input, 10)
}

fn generation(input: &[u8]) -> IResult<&[u8], u32> {
    fixed(input, 5)
}

fn entry(input: &[u8]) -> IResult<&[u8], Entry> {
    let (rest, (offset, _, generation, _, kind, _)) =
        tuple((offset, tag(" "), generation, tag(" "), one_of("fn"), tag(" \n")))(input)?;
    Ok((rest, Entry { offset, generation, kind }))
}

/// `xref\n0 <n>\n` followed by `n` entries.
fn table(input: &[u8]) -> IResult<&[u8], Vec<Entry>> {
    let (rest, _) = tag("xref\n0 ")(input)?;
    let (rest, n) = terminated(number::<usize>, tag("\n"))(rest)?;
    count(entry, n)(rest)
}

#[test]
fn offsets_point_at_objects() {
    common::init();
    let (mut doc, skeleton) = Document::with_skeleton(common::config());
    doc.add_text(skeleton.page, "first\nsecond", (72, 700), &TextOptions::default())
        .unwrap();
    doc.add(IndirectObject::with_stream(
        Dictionary::typed("XObject"),
        &b"raw"[..],
        StreamFilters::new(false, true),
    ));
    let objects = doc.len();
    let pdf = doc.into_bytes().unwrap();

    let (rest, entries) = table(&pdf[common::start_xref(&pdf)..]).unwrap();
    assert!(rest.starts_with(b"trailer\n<<"));
    assert_eq!(entries.len(), objects + 1);
    assert_eq!(
        entries[0],
        Entry {
            offset: 0,
            generation: 65535,
            kind: 'f'
        }
    );
    for (number, entry) in entries.iter().enumerate().skip(1) {
        assert_eq!(entry.kind, 'n');
        assert_eq!(entry.generation, 0);
        let header = format!("{} 0 obj\n", number);
        assert!(
            pdf[entry.offset..].starts_with(header.as_bytes()),
            "object {} not at {}",
            number,
            entry.offset
        );
    }
}

#[test]
fn info_and_catalog_trailer() {
    let mut doc = Document::new(common::config());
    doc.add(IndirectObject::new(Dictionary::typed("Catalog")));
    let pdf = doc.into_bytes().unwrap();

    let (rest, entries) = table(&pdf[common::start_xref(&pdf)..]).unwrap();
    assert_eq!(entries.len(), 3);
    assert!(rest.starts_with(b"trailer\n<</Size 3/Root 2 0 R/Info 1 0 R>>\nstartxref\n"));
}
