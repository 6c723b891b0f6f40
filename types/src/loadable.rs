//! Explicit loading state for fetched entities.

/// State of an entity that is fetched once and replaced wholesale.
///
/// `Failed` is only reachable from `Loading` and renders exactly like
/// `Loading`. A discarded response never downgrades a `Loaded` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    /// Whether the view should show a placeholder for this entity.
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Self::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Replace the current value with a freshly fetched one.
    pub fn commit(&mut self, value: T) {
        *self = Self::Loaded(value);
    }

    /// Record a discarded response. Keeps any previously loaded value.
    pub fn discard(&mut self, reason: impl Into<String>) {
        if !matches!(self, Self::Loaded(_)) {
            *self = Self::Failed(reason.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_placeholder() {
        let state: Loadable<u32> = Loadable::default();
        assert!(state.is_placeholder());
        assert_eq!(state.loaded(), None);
    }

    #[test]
    fn discard_before_load_still_renders_placeholder() {
        let mut state: Loadable<u32> = Loadable::Loading;
        state.discard("shape mismatch");
        assert!(state.is_placeholder());
        assert_eq!(state, Loadable::Failed("shape mismatch".into()));
    }

    #[test]
    fn discard_keeps_loaded_value() {
        let mut state = Loadable::Loading;
        state.commit(5);
        state.discard("shape mismatch");
        assert_eq!(state.loaded(), Some(&5));
    }

    #[test]
    fn commit_replaces_wholesale() {
        let mut state = Loadable::Loaded(vec![1, 2]);
        state.commit(vec![3]);
        assert_eq!(state.loaded(), Some(&vec![3]));
    }
}
