use crate::dom::{Document, NodeId};
use crate::search::SuggestionItem;

pub const ROW_CLASS: &str = "search-item";

/// Build one suggestion row: `div.search-item > (img[src][alt], span > text)`
///
/// Backend strings only ever land in attributes and text nodes.
pub fn build_row(doc: &mut Document, item: &SuggestionItem) -> NodeId {
    let row = doc.create_element("div");
    doc.add_class(row, ROW_CLASS);

    let img = doc.create_element("img");
    doc.set_attr(img, "src", &item.avatar);
    doc.set_attr(img, "alt", &item.name);
    doc.append_child(row, img);

    let label = doc.create_element("span");
    let text = doc.create_text(&item.name);
    doc.append_child(label, text);
    doc.append_child(row, label);

    row
}
