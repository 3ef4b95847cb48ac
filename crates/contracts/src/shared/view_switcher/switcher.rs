use super::config::SwitcherConfig;
use super::host::ViewHost;
use super::view::View;

/// Keeps track of the visible view and mirrors it onto a [`ViewHost`].
#[derive(Debug, Clone)]
pub struct ViewSwitcher {
    config: SwitcherConfig,
    current: Option<View>,
}

impl ViewSwitcher {
    /// Nothing is visible until the first `activate`.
    pub fn new(config: SwitcherConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn current(&self) -> Option<View> {
        self.current
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.current == Some(view)
    }

    /// Show `target` and hide every other view.
    pub fn activate<H: ViewHost>(&mut self, target: View, host: &H) {
        self.current = Some(target);
        self.render(host);
    }

    /// Activate by `data-tab` key.
    ///
    /// An unknown key matches no view, so every view ends up hidden.
    /// Returns the view that became visible, if any.
    pub fn activate_key<H: ViewHost>(&mut self, key: &str, host: &H) -> Option<View> {
        self.current = View::from_key(key);
        self.render(host);
        self.current
    }

    /// Show the configured initial view.
    pub fn reset<H: ViewHost>(&mut self, host: &H) {
        let initial = self.config.initial;
        self.activate(initial, host);
    }

    /// Project the current state onto the host. Missing containers are skipped.
    pub fn render<H: ViewHost>(&self, host: &H) {
        let classes = &self.config.classes;
        for view in View::all() {
            let Some(element) = host.find_view(&view.element_id()) else {
                continue;
            };
            let visible = self.is_visible(view);
            host.set_class(&element, &classes.hidden, !visible);
            host.set_class(&element, &classes.visible, visible);
        }
    }
}
