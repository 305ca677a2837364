/// Events emitted by the fragment walker for visitor consumption.
/// Only top-level nodes of the fragment produce events; anything nested
/// inside them travels with its parent's `html`.
/// Each visitor implements the methods it cares about; default impls are no-ops.
#[allow(unused_variables)]
pub trait RichTextVisitor {
    /// Called for a top-level `<h1>`..`<h6>`.
    /// `level`: 1-6
    /// `text`: whitespace-collapsed heading text
    /// `html`: the serialized heading element
    fn on_heading(&mut self, level: u8, text: &str, html: &str) {}

    /// Called for every other top-level element (paragraphs, lists, figures...).
    /// `tag`: lowercase element name
    fn on_block(&mut self, tag: &str, text: &str, html: &str) {}

    /// Called after `on_block` for a top-level `<ul>`/`<ol>` with the text of
    /// its direct `<li>` children. Nested lists are left out of each item.
    fn on_list(&mut self, ordered: bool, items: &[String]) {}

    /// Called for non-blank bare text between top-level elements.
    /// `html` is the text with markup characters escaped.
    fn on_text(&mut self, text: &str, html: &str) {}

    /// Called when the walk of a fragment is complete.
    fn on_fragment_end(&mut self) {}
}
