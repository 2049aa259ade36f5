#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tempfile::NamedTempFile;

/// Build a poster document with one page per (width, height) in points.
///
/// Every page paints a full-bleed rectangle and some text using a shared font,
/// so tiled output has resources to copy.
pub fn create_poster_pdf(page_sizes: &[(i64, i64)]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));

    let mut kids = Vec::new();
    for &(width, height) in page_sizes {
        let content = format!(
            "q 0 0 1 rg 0 0 {} {} re f Q BT /F1 48 Tf 72 72 Td (Poster) Tj ET",
            width, height
        );
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let fonts = Dictionary::from_iter(vec![("F1", Object::Reference(font_id))]);
        let resources = Dictionary::from_iter(vec![("Font", Object::Dictionary(fonts))]);

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    finish(doc, pages_id, kids, Dictionary::new())
}

/// Build a document whose pages inherit their MediaBox from the Pages node.
pub fn create_inherited_mediabox_pdf(num_pages: usize, width: i64, height: i64) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let inherited = Dictionary::from_iter(vec![(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width),
            Object::Integer(height),
        ]),
    )]);
    finish(doc, pages_id, kids, inherited)
}

fn finish(mut doc: Document, pages_id: ObjectId, kids: Vec<Object>, extra: Dictionary) -> Document {
    let count = kids.len() as i64;
    let mut pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    for (key, value) in extra.iter() {
        pages_dict.set(key.clone(), value.clone());
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Replace a page's Contents with the given streams.
///
/// One stream is referenced directly; several become a Contents array.
pub fn set_page_contents(doc: &mut Document, page_id: ObjectId, streams: Vec<Stream>) {
    let mut refs: Vec<Object> = streams
        .into_iter()
        .map(|stream| Object::Reference(doc.add_object(stream)))
        .collect();
    let contents = if refs.len() == 1 {
        refs.remove(0)
    } else {
        Object::Array(refs)
    };
    doc.get_dictionary_mut(page_id)
        .unwrap()
        .set("Contents", contents);
}

/// A content stream tagged with `filter` whose bytes are left as given
pub fn filtered_stream(filter: &str, content: &[u8]) -> Stream {
    let dict = Dictionary::from_iter(vec![("Filter", Object::Name(filter.as_bytes().to_vec()))]);
    Stream::new(dict, content.to_vec())
}

/// Save a document to a fresh temp file
pub fn write_temp_pdf(doc: &mut Document) -> NamedTempFile {
    let temp = NamedTempFile::new().unwrap();
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(temp.path(), writer).unwrap();
    temp
}

/// Page object IDs in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// A page's own MediaBox as numbers
pub fn media_box(doc: &Document, page_id: ObjectId) -> Vec<f32> {
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|obj| match obj {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            other => panic!("Unexpected MediaBox entry: {:?}", other),
        })
        .collect()
}

/// The Form XObject drawn by an output tile page
pub fn tile_xobject(doc: &Document, page_id: ObjectId) -> &Stream {
    doc.get_object(tile_xobject_id(doc, page_id))
        .unwrap()
        .as_stream()
        .unwrap()
}

/// Object ID of the Form XObject drawn by an output tile page
pub fn tile_xobject_id(doc: &Document, page_id: ObjectId) -> ObjectId {
    let resources = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Resources")
        .unwrap()
        .as_dict()
        .unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    let (_, reference) = xobjects.iter().next().expect("tile page has no XObject");
    reference.as_reference().unwrap()
}
