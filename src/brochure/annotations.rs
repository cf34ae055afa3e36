//! Link annotation reading
//!
//! Brochure hyperlinks are stored as `/Link` annotations whose `/A` action
//! dictionary carries the target in `/URI`.

use lopdf::{Dictionary, Document, Object, ObjectId};

/// Returns the URI targets of all Link annotations on a page
///
/// Malformed annotations are skipped rather than reported; a page without
/// `/Annots` yields an empty list.
pub fn page_link_uris(doc: &Document, page_id: ObjectId) -> Vec<String> {
    let Some(page_dict) = doc.get_object(page_id).ok().and_then(|o| o.as_dict().ok()) else {
        return Vec::new();
    };

    let Some(annots) = page_dict
        .get(b"Annots")
        .ok()
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_array().ok())
    else {
        return Vec::new();
    };

    annots
        .iter()
        .filter_map(|entry| resolve(doc, entry))
        .filter_map(|obj| obj.as_dict().ok())
        .filter(|dict| is_link_annotation(dict))
        .filter_map(|dict| link_uri(doc, dict))
        .collect()
}

/// Follows an indirect reference, if any
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn is_link_annotation(dict: &Dictionary) -> bool {
    matches!(dict.get(b"Subtype"), Ok(Object::Name(name)) if name.as_slice() == b"Link")
}

/// Reads `/A << /S /URI /URI (...) >>` from a Link annotation
fn link_uri(doc: &Document, annot: &Dictionary) -> Option<String> {
    let action = resolve(doc, annot.get(b"A").ok()?)?.as_dict().ok()?;

    match action.get(b"S") {
        Ok(Object::Name(kind)) if kind.as_slice() == b"URI" => {}
        _ => return None,
    }

    match resolve(doc, action.get(b"URI").ok()?)? {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

/// Decodes a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1
pub(crate) fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
