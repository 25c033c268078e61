/// Fetch state for one slice of view data. Replaces null-as-loading with
/// an explicit tag: a slice starts `NotLoaded`, is populated at most once,
/// and stays `Failed` after a fetch error (there is no retry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    NotLoaded,
    Loaded(T),
    Failed,
}

impl<T> Remote<T> {
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, Remote::NotLoaded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Remote::Failed)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::NotLoaded
    }
}
