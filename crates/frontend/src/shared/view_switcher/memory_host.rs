use contracts::shared::view_switcher::{View, ViewHost};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

/// Page stand-in for tests: element id -> class list.
#[derive(Default)]
pub struct MemoryHost {
    elements: RefCell<HashMap<String, BTreeSet<String>>>,
}

impl MemoryHost {
    pub fn with_views(views: &[View]) -> Self {
        let host = Self::default();
        for view in views {
            host.elements
                .borrow_mut()
                .insert(view.element_id(), BTreeSet::new());
        }
        host
    }

    pub fn with_all_views() -> Self {
        Self::with_views(&View::all())
    }

    pub fn has_class(&self, view: View, class: &str) -> bool {
        self.elements
            .borrow()
            .get(&view.element_id())
            .map(|classes| classes.contains(class))
            .unwrap_or(false)
    }

    pub fn visible_views(&self, visible_class: &str) -> Vec<View> {
        View::all()
            .into_iter()
            .filter(|v| self.has_class(*v, visible_class))
            .collect()
    }
}

impl ViewHost for MemoryHost {
    type Element = String;

    fn find_view(&self, element_id: &str) -> Option<String> {
        self.elements
            .borrow()
            .contains_key(element_id)
            .then(|| element_id.to_string())
    }

    fn set_class(&self, element: &String, class: &str, present: bool) {
        if let Some(classes) = self.elements.borrow_mut().get_mut(element) {
            if present {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }
    }
}
