//! Output page rendering for tiling

use crate::layout::Tile;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Render one tile as an output page.
///
/// The page has a fixed MediaBox of `tile_width_pt` x `tile_height_pt` and
/// draws the whole source XObject shifted by the tile's translation. Content
/// outside the MediaBox is clipped by the page boundary; no crop box is set.
pub fn render_tile_page(
    output: &mut Document,
    tile: &Tile,
    xobject_id: ObjectId,
    tile_width_pt: f32,
    tile_height_pt: f32,
    parent_pages_id: ObjectId,
) -> ObjectId {
    let xobject_name = format!("T{}", tile.source_page);

    let mut xobjects = Dictionary::new();
    xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let (dx, dy) = tile.translation();
    let content = placement_command(&xobject_name, dx, dy);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(tile_width_pt),
            Object::Real(tile_height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.add_object(page_dict)
}

/// Content stream that draws an XObject translated by (dx, dy).
pub fn placement_command(xobject_name: &str, dx: f32, dy: f32) -> String {
    format!("q 1 0 0 1 {} {} cm /{} Do Q\n", dx, dy, xobject_name)
}

/// Build the page tree and catalog around already rendered pages.
///
/// `pages_tree_id` must be the ID every page's `Parent` points at.
pub fn finish_document(output: &mut Document, pages_tree_id: ObjectId, page_ids: &[ObjectId]) {
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let count = kids.len() as i64;

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
