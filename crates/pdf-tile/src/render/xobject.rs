//! XObject creation for tiling
//!
//! Each source page is wrapped once into a Form XObject, which every tile
//! cut from that page then draws with its own translation.

use crate::constants::MAX_INHERITANCE_DEPTH;
use crate::layout::Rect;
use crate::types::{Result, TileError};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `page_index` - Position of the page in the source (for error reporting)
/// * `media_box` - The page's resolved MediaBox, used as the form's BBox
/// * `cache` - Source-to-output object IDs already copied
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    page_index: usize,
    media_box: &Rect,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(vec![
            Object::Real(media_box.x),
            Object::Real(media_box.y),
            Object::Real(media_box.right()),
            Object::Real(media_box.top()),
        ]),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    let content_data = match get_page_content(source, page_dict, page_index)? {
        PageContent::Plain(data) => data,
        PageContent::Encoded(stream) => {
            // Keep the bytes as they are and let the reader decode them
            for key in [&b"Filter"[..], &b"DecodeParms"[..]] {
                if let Ok(value) = stream.dict.get(key) {
                    xobject_dict.set(key, copy_object_deep(output, source, value, cache)?);
                }
            }
            stream.content.clone()
        }
    };

    // Resources may live on the page or on any ancestor Pages node
    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// A page's content, ready to become a form XObject's stream
enum PageContent<'a> {
    /// Unfiltered bytes
    Plain(Vec<u8>),
    /// A single stream whose filter lopdf cannot decode
    Encoded(&'a Stream),
}

/// Get the content stream data from a page.
fn get_page_content<'a>(
    doc: &'a Document,
    page_dict: &'a Dictionary,
    page_index: usize,
) -> Result<PageContent<'a>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(PageContent::Plain(Vec::new())), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr, page_index),
            Object::Stream(stream) => Ok(match decode_stream(stream) {
                Some(data) => PageContent::Plain(data),
                None => PageContent::Encoded(stream),
            }),
            _ => Ok(PageContent::Plain(Vec::new())),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr, page_index),
        _ => Ok(PageContent::Plain(Vec::new())),
    }
}

/// Concatenate multiple content streams.
///
/// Every part must decode: streams with different encodings cannot be joined.
fn get_concatenated_content_streams<'a>(
    doc: &'a Document,
    refs: &[Object],
    page_index: usize,
) -> Result<PageContent<'a>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                let data = decode_stream(stream).ok_or_else(|| TileError::UnsupportedFilter {
                    page: page_index + 1,
                    filter: filter_names(stream),
                })?;
                result.extend_from_slice(&data);
                result.push(b'\n');
            }
        }
    }

    Ok(PageContent::Plain(result))
}

/// Decoded stream bytes, or `None` when the stream's filter is not supported
fn decode_stream(stream: &Stream) -> Option<Vec<u8>> {
    if stream.dict.get(b"Filter").is_err() {
        return Some(stream.content.clone());
    }
    stream.decompressed_content().ok()
}

fn filter_names(stream: &Stream) -> String {
    match stream.filters() {
        Ok(names) => names
            .iter()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect::<Vec<_>>()
            .join(", "),
        Err(_) => "unknown".to_string(),
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The output ID is reserved before recursing, so reference cycles terminate.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Resolve a page's MediaBox as a rectangle in points.
///
/// Follows `Parent` links for inherited boxes. `page_index` is only used
/// for error reporting.
pub fn page_media_box(doc: &Document, page_id: ObjectId, page_index: usize) -> Result<Rect> {
    let missing = || TileError::MissingMediaBox {
        page: page_index + 1,
    };

    let media_box = inherited_attribute(doc, page_id, b"MediaBox")?.ok_or_else(missing)?;
    let values = resolve(doc, media_box)?.as_array().map_err(|_| missing())?;
    if values.len() != 4 {
        return Err(missing());
    }

    let mut coords = [0.0f32; 4];
    for (slot, value) in coords.iter_mut().zip(values) {
        *slot = extract_number(resolve(doc, value)?).ok_or_else(missing)?;
    }

    // Corners may be given in any order
    let [ax, ay, bx, by] = coords;
    let (x0, x1) = (ax.min(bx), ax.max(bx));
    let (y0, y1) = (ay.min(by), ay.max(by));

    if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
        return Err(missing());
    }

    Ok(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Look up a page attribute, walking up the page tree for inheritable keys.
fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut node = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Ok(Some(value));
        }
        match node.get(b"Parent").and_then(|p| p.as_reference()) {
            Ok(parent_id) => node = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object> {
    match obj {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
