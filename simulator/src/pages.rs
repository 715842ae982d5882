//! Page navigation for the simulator window.
//!
//! The `L` key switches between the watchface and the event log.

/// Available pages in the simulator window.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The watchface itself.
    #[default]
    Watchface,

    /// Log viewer with color-coded entries from the controller and the runtime.
    Log,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Watchface => Self::Log,
            Self::Log => Self::Watchface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Watchface);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Watchface.toggle(), Page::Log);
        assert_eq!(Page::Log.toggle(), Page::Watchface);
    }
}
