use super::dom::DocumentHost;
use contracts::shared::view_switcher::{Shortcut, SwitcherConfig, View, ViewHost, ViewSwitcher};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Attribute carrying the target view key on navigation buttons.
pub const NAV_ATTRIBUTE: &str = "data-tab";

/// Navigation buttons: the `.nav-btn` class plus a target key.
pub const NAV_SELECTOR: &str = ".nav-btn[data-tab]";

type SharedSwitcher = Rc<RefCell<ViewSwitcher>>;

/// Wire every navigation and shortcut control on the page, then show the
/// initial view.
pub fn bind_page(host: DocumentHost, config: SwitcherConfig) {
    let shortcuts = config.shortcuts.clone();
    let switcher: SharedSwitcher = Rc::new(RefCell::new(ViewSwitcher::new(config)));

    let nav_count = bind_nav_controls(&host, &switcher);
    let shortcut_count = shortcuts
        .iter()
        .filter(|shortcut| bind_shortcut(&host, &switcher, shortcut))
        .count();
    log::debug!(
        "view switcher wired: {} nav controls, {}/{} shortcuts",
        nav_count,
        shortcut_count,
        shortcuts.len()
    );

    switcher.borrow_mut().reset(&host);
}

/// Click on a navigation button whose `data-tab` currently holds `key`.
///
/// A missing attribute counts as an unknown key: every view is hidden.
pub fn handle_nav_click<H: ViewHost>(
    switcher: &RefCell<ViewSwitcher>,
    key: Option<&str>,
    host: &H,
) -> Option<View> {
    let key = key.unwrap_or_default();
    let shown = switcher.borrow_mut().activate_key(key, host);
    if shown.is_none() {
        log::warn!("unknown view '{}' requested, all views hidden", key);
    }
    shown
}

/// Click on a shortcut button.
pub fn handle_shortcut_click<H: ViewHost>(
    switcher: &RefCell<ViewSwitcher>,
    shortcut: &Shortcut,
    host: &H,
) -> View {
    switcher.borrow_mut().activate(shortcut.target, host);
    shortcut.target
}

fn bind_nav_controls(host: &DocumentHost, switcher: &SharedSwitcher) -> usize {
    let Ok(controls) = host.document().query_selector_all(NAV_SELECTOR) else {
        return 0;
    };

    let mut wired = 0;
    for i in 0..controls.length() {
        let Some(node) = controls.get(i) else { continue };
        let Ok(control) = node.dyn_into::<Element>() else {
            continue;
        };

        let host = host.clone();
        let switcher = Rc::clone(switcher);
        let source = control.clone();
        // The key is read on click so later attribute changes are honoured.
        on_click(&control, move || {
            let key = source.get_attribute(NAV_ATTRIBUTE);
            handle_nav_click(&switcher, key.as_deref(), &host);
        });
        wired += 1;
    }
    wired
}

fn bind_shortcut(host: &DocumentHost, switcher: &SharedSwitcher, shortcut: &Shortcut) -> bool {
    let Ok(Some(button)) = host.document().query_selector(&shortcut.selector()) else {
        log::debug!(
            "shortcut '{}' not found in view '{}', skipped",
            shortcut.label,
            shortcut.scope
        );
        return false;
    };

    let host = host.clone();
    let switcher = Rc::clone(switcher);
    let shortcut = shortcut.clone();
    on_click(&button, move || {
        handle_shortcut_click(&switcher, &shortcut, &host);
    });
    true
}

/// Attach a click listener for the lifetime of the page.
fn on_click(element: &Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
        handler();
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::view_switcher::memory_host::MemoryHost;

    fn switcher_on(host: &MemoryHost, config: SwitcherConfig) -> RefCell<ViewSwitcher> {
        let switcher = RefCell::new(ViewSwitcher::new(config));
        switcher.borrow_mut().reset(host);
        switcher
    }

    #[test]
    fn test_nav_click_switches_view() {
        let host = MemoryHost::with_all_views();
        let config = SwitcherConfig::lenient();
        let switcher = switcher_on(&host, config.clone());

        assert_eq!(handle_nav_click(&switcher, Some("detail"), &host), Some(View::Detail));
        assert_eq!(host.visible_views(&config.classes.visible), vec![View::Detail]);
        assert!(host.has_class(View::Main, &config.classes.hidden));
    }

    #[test]
    fn test_nav_click_without_key_hides_all() {
        let host = MemoryHost::with_all_views();
        let config = SwitcherConfig::strict();
        let switcher = switcher_on(&host, config.clone());

        assert_eq!(handle_nav_click(&switcher, None, &host), None);
        assert!(host.visible_views(&config.classes.visible).is_empty());

        assert_eq!(handle_nav_click(&switcher, Some("about"), &host), None);
        assert_eq!(switcher.borrow().current(), None);
    }

    #[test]
    fn test_shortcut_clicks_follow_config() {
        let host = MemoryHost::with_all_views();
        let config = SwitcherConfig::lenient();
        let switcher = switcher_on(&host, config.clone());
        let shortcut = |scope: View, label: &str| {
            config
                .shortcuts
                .iter()
                .find(|s| s.scope == scope && s.label == label)
                .cloned()
                .unwrap()
        };

        handle_nav_click(&switcher, Some("detail"), &host);
        assert_eq!(handle_shortcut_click(&switcher, &shortcut(View::Detail, "Share"), &host), View::Share);
        assert_eq!(host.visible_views(&config.classes.visible), vec![View::Share]);

        assert_eq!(handle_shortcut_click(&switcher, &shortcut(View::Share, "Close"), &host), View::Main);
        handle_nav_click(&switcher, Some("detail"), &host);
        assert_eq!(handle_shortcut_click(&switcher, &shortcut(View::Detail, "Back"), &host), View::Main);
        assert_eq!(host.visible_views(&config.classes.visible), vec![View::Main]);
    }

    #[test]
    fn test_nav_selector_requires_class_and_key() {
        assert_eq!(NAV_SELECTOR, ".nav-btn[data-tab]");
        assert!(NAV_SELECTOR.contains(NAV_ATTRIBUTE));
    }
}
