use crate::{Logger, StdLogger};

/// Configuration for a single translation
///
/// The simplest usage is `stylecall::Options::default()`; however, a builder pattern
/// is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) logger: &'a dyn Logger,
    pub(crate) variant: ApiVariant,
    pub(crate) quiet: bool,
    pub(crate) unicode_error_messages: bool,
    pub(crate) max_nesting_depth: usize,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            logger: &StdLogger,
            variant: ApiVariant::Plain,
            quiet: false,
            unicode_error_messages: true,
            max_nesting_depth: 256,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to define how log events should be handled
    ///
    /// Be default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Select the styling API the produced calls target
    ///
    ///  - [`ApiVariant::Plain`] never suffixes call names with their arity and
    ///    renders well known keywords as symbolic tags.
    ///  - [`ApiVariant::Typed`] resolves overloads by arity and expands a larger
    ///    set of shorthands into labeled arguments.
    ///
    /// By default, the plain API is targeted.
    #[must_use]
    #[inline]
    pub const fn variant(mut self, variant: ApiVariant) -> Self {
        self.variant = variant;
        self
    }

    /// This flag stops all warnings from reaching the [`crate::Logger`].
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// This flag tells the compiler only to emit ASCII characters as
    /// part of error messages.
    ///
    /// By default non-ASCII characters are used to draw the source excerpt.
    #[must_use]
    #[inline]
    pub const fn unicode_error_messages(mut self, unicode_error_messages: bool) -> Self {
        self.unicode_error_messages = unicode_error_messages;
        self
    }

    /// The deepest level of nested function values (`a(b(c(..)))`) and nested
    /// `@keyframes` blocks that will be translated before giving up with an error.
    ///
    /// The grammar tree comes from untrusted input, so translation refuses to
    /// follow it arbitrarily deep. The default is 256.
    #[must_use]
    #[inline]
    pub const fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub(crate) fn is_typed(&self) -> bool {
        matches!(self.variant, ApiVariant::Typed)
    }
}

/// The two calling conventions a stylesheet can be translated into
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVariant {
    /// Single-arity calls, keyword constants as symbolic tags.
    ///
    /// This is the default.
    Plain,

    /// Arity-overloaded calls (`padding2`, `border3`) with plain named references.
    Typed,
}
