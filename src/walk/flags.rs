//! Directives issued by the callback during a visit.

/// Directive to the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Directive<N> {
    /// Do not visit the subtree of the current node.
    Skip,
    /// Stop the walk.
    Break,
    /// The current node has been detached from its parent.
    Remove,
    /// The current node has been substituted by the given node.
    Replace(N),
}

impl<N> Directive<N> {
    /// Returns the name of the directive.
    #[must_use]
    fn name(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Break => "break",
            Self::Remove => "remove",
            Self::Replace(_) => "replace",
        }
    }
}

/// Directives requested during the current visit.
///
/// Reset before each callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Flags<N> {
    /// Whether the walk should stop.
    broken: bool,
    /// Whether the subtree should not be visited.
    skipped: bool,
    /// Whether the node has been removed.
    removed: bool,
    /// Node substituted for the current node.
    replacement: Option<N>,
}

impl<N> Flags<N> {
    /// Creates cleared flags.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            broken: false,
            skipped: false,
            removed: false,
            replacement: None,
        }
    }

    /// Clears all directives.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.broken = false;
        self.skipped = false;
        self.removed = false;
        self.replacement = None;
    }

    /// Records the directive.
    ///
    /// A directive set twice keeps the latest value.
    pub(crate) fn apply(&mut self, directive: Directive<N>) {
        tracing::trace!(directive = directive.name(), "directive requested");
        match directive {
            Directive::Skip => self.skipped = true,
            Directive::Break => self.broken = true,
            Directive::Remove => self.removed = true,
            Directive::Replace(node) => self.replacement = Some(node),
        }
    }

    /// Returns true if the walk should stop.
    #[inline]
    #[must_use]
    pub(crate) fn is_broken(&self) -> bool {
        self.broken
    }

    /// Returns true if the subtree should not be visited.
    #[inline]
    #[must_use]
    pub(crate) fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Returns true if the node has been removed.
    #[inline]
    #[must_use]
    pub(crate) fn is_removed(&self) -> bool {
        self.removed
    }

    /// Returns the replacement node, if any.
    #[inline]
    #[must_use]
    pub(crate) fn replacement(&self) -> Option<&N> {
        self.replacement.as_ref()
    }

    /// Takes the replacement node out of the flags.
    #[inline]
    #[must_use]
    pub(crate) fn take_replacement(&mut self) -> Option<N> {
        self.replacement.take()
    }
}
