/// Presentation layer the switcher projects its state onto.
///
/// Lookups return `Option`: a page may omit any view container and the
/// switcher simply skips it.
pub trait ViewHost {
    type Element;

    /// Find the container element with the given id.
    fn find_view(&self, element_id: &str) -> Option<Self::Element>;

    /// Add (`present == true`) or remove a CSS class token on an element.
    fn set_class(&self, element: &Self::Element, class: &str, present: bool);
}
