//! Chapter PDF concatenation.
//!
//! Splices the page trees of the per-chapter PDFs into one document, in
//! input order, delegating the byte-level work to `lopdf`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lopdf::{Document, Object, ObjectId};
use tracing::debug;

use crate::error::{Error, Result};

fn dict_type(object: &Object) -> &str {
    object
        .as_dict()
        .ok()
        .and_then(|dict| dict.get(b"Type").ok())
        .and_then(|value| value.as_name().ok())
        .and_then(|name| std::str::from_utf8(name).ok())
        .unwrap_or("")
}

/// Merge the chapter PDFs at `inputs` into one document at `output`.
pub fn merge_pdfs(inputs: &[PathBuf], output: &Path) -> Result<()> {
    let mut max_id = 1;
    let mut pages: BTreeMap<ObjectId, Object> = BTreeMap::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for path in inputs {
        let mut doc = Document::load(path)?;
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;
        for id in doc.get_pages().into_values() {
            let object = doc.get_object(id)?.to_owned();
            pages.insert(id, object);
        }
        objects.append(&mut doc.objects);
        debug!(path = %path.display(), "collected chapter pages");
    }

    let mut merged = Document::with_version("1.5");
    let mut pages_object: Option<(ObjectId, Object)> = None;
    let mut catalog_object: Option<(ObjectId, Object)> = None;

    for (id, object) in &objects {
        match dict_type(object) {
            "Catalog" => {
                catalog_object = Some((
                    catalog_object.map_or(*id, |(existing, _)| existing),
                    object.clone(),
                ));
            }
            "Pages" => {
                if let Ok(dict) = object.as_dict() {
                    let mut dict = dict.clone();
                    if let Some((_, ref existing)) = pages_object {
                        if let Ok(existing_dict) = existing.as_dict() {
                            dict.extend(existing_dict);
                        }
                    }
                    pages_object = Some((
                        pages_object.map_or(*id, |(existing, _)| existing),
                        Object::Dictionary(dict),
                    ));
                }
            }
            // Page objects are re-inserted below with their new parent;
            // outlines are not carried over.
            "Page" | "Outlines" | "Outline" => {}
            _ => {
                merged.objects.insert(*id, object.clone());
            }
        }
    }

    let (pages_id, pages_dict) = pages_object.ok_or(Error::EmptyMerge)?;
    let (catalog_id, catalog_dict) = catalog_object.ok_or(Error::EmptyMerge)?;

    for (id, object) in &pages {
        if let Ok(dict) = object.as_dict() {
            let mut dict = dict.clone();
            dict.set("Parent", pages_id);
            merged.objects.insert(*id, Object::Dictionary(dict));
        }
    }

    if let Ok(dict) = pages_dict.as_dict() {
        let mut dict = dict.clone();
        dict.set("Count", pages.len() as u32);
        // Object ids were renumbered monotonically per input, so BTreeMap
        // order preserves chapter order.
        dict.set(
            "Kids",
            pages.keys().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        );
        merged.objects.insert(pages_id, Object::Dictionary(dict));
    }

    if let Ok(dict) = catalog_dict.as_dict() {
        let mut dict = dict.clone();
        dict.set("Pages", pages_id);
        dict.remove(b"Outlines");
        merged.objects.insert(catalog_id, Object::Dictionary(dict));
    }

    merged.trailer.set("Root", catalog_id);
    merged.max_id = merged.objects.len() as u32;
    merged.renumber_objects();
    merged.compress();
    merged.save(output)?;

    debug!(chapters = inputs.len(), path = %output.display(), "wrote merged book");
    Ok(())
}
