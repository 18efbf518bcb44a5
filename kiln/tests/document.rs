mod common;

use kiln::{
    Dictionary, Document, Encoder, Escaping, IndirectObject, KilnError, Name, Object, SimpleEncoder, StreamFilters,
    TextOptions,
};

#[test]
fn classic_document_bytes() {
    common::init();
    let mut doc = Document::new(common::config());
    let pages = doc.insert(IndirectObject::new(Dictionary::typed("Pages").with_count(0)));
    doc.add(IndirectObject::new(Dictionary::typed("Catalog").with("Pages", pages)));
    doc.register(pages).unwrap();

    let expected: &[u8] = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n\
1 0 obj\n<</Title(t)/Producer(p)/Author(a)/CreationDate(D\\07220230102030405\\05500\\04700\\047)>>\nendobj\n\
2 0 obj\n<</Type/Catalog/Pages 3 0 R>>\nendobj\n\
3 0 obj\n<</Type/Pages/Count 0>>\nendobj\n\
xref\n0 4\n0000000000 65535 f \n0000000015 00000 n \n0000000116 00000 n \n0000000161 00000 n \n\
trailer\n<</Size 4/Root 2 0 R/Info 1 0 R>>\nstartxref\n200\n%%EOF\n";
    assert_eq!(doc.into_bytes().unwrap(), expected);
}

#[test]
fn same_name_keys_are_all_rendered() {
    let mut doc = Document::default();
    let mut dictionary = Dictionary::new();
    dictionary.insert(Name::from("abc"), 1);
    dictionary.insert(Name::from("abc"), Name::from("x"));
    dictionary.insert(Name::from("abc"), Object::Null);
    let id = doc.add(IndirectObject::new(dictionary));

    let out = SimpleEncoder::new(&doc).encode(doc.object(id).unwrap()).unwrap();
    assert_eq!(out, b"<</abc 1/abc/x/abc null>>");
}

#[test]
fn text_on_a_page() {
    let (mut doc, skeleton) = Document::with_skeleton(common::config());
    let options = TextOptions {
        filters: StreamFilters::NONE,
        ..TextOptions::default()
    };
    doc.add_text(skeleton.page, "a", (72, 700), &options).unwrap();
    doc.add_text(skeleton.page, "b", (72, 600), &options).unwrap();

    let encoder = SimpleEncoder::new(&doc);
    let page = encoder.encode(doc.object(skeleton.page).unwrap()).unwrap();
    assert_eq!(
        String::from_utf8(page).unwrap(),
        "<</Type/Page/Parent 4 0 R/Contents 7 0 R\
         /Resources<</ProcSet[/PDF /Text]/Font<</F1 6 0 R/F2 8 0 R>>>>/MediaBox[0 0 612 792]>>"
    );

    let content = doc.object(skeleton.page).unwrap().dictionary.content.unwrap();
    let content = encoder.encode(doc.object(content).unwrap()).unwrap();
    assert_eq!(
        String::from_utf8(content).unwrap(),
        "<</Length 77>>stream\nBT /F1 12 Tf 72 700 Td 15 TL\n(a) Tj\nET\nBT /F2 12 Tf 72 600 Td 15 TL\n(b) Tj\nET\nendstream"
    );

    let pdf = doc.into_bytes().unwrap();
    let needle = b"8 0 obj\n<</Type/Font/Subtype/Type1/Name/F2/BaseFont/Helvetica/Encoding/MacRomanEncoding>>";
    assert!(common::find(&pdf, needle).is_some());
}

#[test]
fn write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let (doc, _) = Document::with_skeleton(common::config());
    doc.write(&path).unwrap();

    let (doc, _) = Document::with_skeleton(common::config());
    let mut expected = Vec::new();
    doc.write_to(&mut expected).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), expected);
    assert!(expected.starts_with(b"%PDF-1.7\n"));
}

#[test]
fn failed_write_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let doc = Document::new(common::config());
    assert!(matches!(doc.write(&path), Err(KilnError::MissingCatalog)));
    assert!(!path.exists());
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    let (doc, _) = Document::with_skeleton(common::config());
    assert!(matches!(doc.write(&path), Err(KilnError::Io(_))));
}

#[test]
fn rendering_does_not_change_objects() {
    let mut doc = Document::new(common::plain_config());
    let catalog = doc.add(IndirectObject::new(Dictionary::typed("Catalog")));
    let streamed = doc.add(IndirectObject::with_stream(Dictionary::new(), &b"abc"[..], StreamFilters::default()));

    let encoder = SimpleEncoder::new(&doc);
    let first = encoder.encode(doc.object(streamed).unwrap()).unwrap();
    let second = encoder.encode(doc.object(streamed).unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(doc.object(streamed).unwrap().dictionary, Dictionary::new());
    assert_eq!(doc.catalog(), Some(catalog));
}

#[test]
fn obfuscated_document() {
    let (mut doc, skeleton) = Document::with_skeleton(common::config().with_escaping(Escaping::Obfuscated));
    let options = TextOptions {
        filters: StreamFilters::NONE,
        ..TextOptions::default()
    };
    doc.add_text(skeleton.page, "Hi", (10, 10), &options).unwrap();
    let pdf = doc.into_bytes().unwrap();
    let text = String::from_utf8_lossy(&pdf);

    assert!(text.contains("/#54#79#70#65/#43#61#74#61#6c#6f#67"));
    assert!(text.contains(r"(\164)"));
    assert!(text.contains("BT /#46#31 12 Tf 10 10 Td 15 TL\n(\\110\\151) Tj\nET"));
    assert!(text.contains("trailer\n<</#53#69#7a#65 "));
    assert!(!text.contains("/Type"));
}
