use contracts::shared::view_switcher::ViewHost;
use web_sys::{window, Document, Element};

/// [`ViewHost`] backed by the live page.
#[derive(Clone)]
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the window's document, if there is one.
    pub fn current() -> Option<Self> {
        window().and_then(|w| w.document()).map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ViewHost for DocumentHost {
    type Element = Element;

    fn find_view(&self, element_id: &str) -> Option<Element> {
        self.document.get_element_by_id(element_id)
    }

    fn set_class(&self, element: &Element, class: &str, present: bool) {
        // Throws only for empty or whitespace tokens; nothing to apply then.
        let _ = element.class_list().toggle_with_force(class, present);
    }
}
