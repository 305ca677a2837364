use super::visitor::RichTextVisitor;

/// Collects the items of every top-level list, in document order.
#[derive(Default)]
pub struct ListCollector {
    items: Vec<String>,
}

impl ListCollector {
    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

impl RichTextVisitor for ListCollector {
    fn on_list(&mut self, _ordered: bool, items: &[String]) {
        self.items.extend(items.iter().cloned());
    }
}
