/// A boolean flag with the operations the page flags need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle(bool);

impl Toggle {
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    pub fn value(&self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn set_left(&mut self) {
        self.0 = false;
    }
}

/// Loading flag of the map widget. Only ever goes from loading to ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingFlag(Toggle);

impl Default for LoadingFlag {
    fn default() -> Self {
        Self(Toggle::new(true))
    }
}

impl LoadingFlag {
    pub fn is_loading(&self) -> bool {
        self.0.value()
    }

    /// Returns true when this call ended the loading state.
    fn resolve(&mut self) -> bool {
        let was_loading = self.is_loading();
        self.0.set_left();
        was_loading
    }
}

/// State of the map page: the map widget loading flag and the sidebar
/// collapsed flag. The two change independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapPageState {
    loading: LoadingFlag,
    sidebar_collapsed: Toggle,
}

impl MapPageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed.value()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed.toggle();
    }

    /// Called when the map widget module settles. Loading ends only on success;
    /// returns true for the one call that ended it.
    pub fn on_map_widget_resolved<E>(&mut self, result: &Result<(), E>) -> bool {
        match result {
            Ok(()) => self.loading.resolve(),
            Err(_) => false,
        }
    }
}
