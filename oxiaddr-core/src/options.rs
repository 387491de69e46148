//! Format options shared by all address formatters.

use bitflags::bitflags;

bitflags! {
    /// Selects which part of an address is rendered and how the resulting
    /// text is post-processed.
    ///
    /// Structural options (`PRINT_*`) choose the bits that are rendered;
    /// text options (`UPPERCASE`, `LOWERCASE`, `MIRRORED`,
    /// `MACHINE_READABLE`) are applied to the finished string and never
    /// change its numeric meaning.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatOptions: u32 {
        /// Render only the prefix (bits before the prefix length).
        const PRINT_PREFIX = 1 << 0;
        /// Render only the suffix (bits from the prefix length on).
        const PRINT_SUFFIX = 1 << 1;
        /// Honor the explicit start bit of the address.
        const PRINT_START = 1 << 2;
        /// Honor the explicit end bit of the address.
        const PRINT_END = 1 << 3;
        /// Upper-case hex digits and letters.
        const UPPERCASE = 1 << 4;
        /// Lower-case output (the default rendering).
        const LOWERCASE = 1 << 5;
        /// Reverse the order of dot-separated labels.
        const MIRRORED = 1 << 6;
        /// Emit `KEY=value` output for scripts.
        const MACHINE_READABLE = 1 << 7;
    }
}

impl FormatOptions {
    /// Plain lower-case rendering of the whole address.
    pub const DEFAULT: Self = Self::LOWERCASE;

    /// Any explicit bit selection (prefix, suffix, start or end).
    pub const BIT_SELECTION: Self = Self::PRINT_PREFIX
        .union(Self::PRINT_SUFFIX)
        .union(Self::PRINT_START)
        .union(Self::PRINT_END);

    /// Whether the caller restricted the rendered bit range.
    pub fn selects_bits(&self) -> bool {
        self.intersects(Self::BIT_SELECTION)
    }

    /// Whether an explicit start/end bit range was requested.
    pub fn uses_start_end(&self) -> bool {
        self.intersects(Self::PRINT_START.union(Self::PRINT_END))
    }

    /// Apply the text-level options to a finished rendering.
    ///
    /// `LOWERCASE` wins over `UPPERCASE` when both are set. Mirroring is
    /// applied only when `mirror_allowed` is true, since it is meaningful
    /// for dotted labels only.
    pub fn finish(&self, rendered: String, mirror_allowed: bool) -> String {
        let mut out = if self.contains(Self::UPPERCASE) && !self.contains(Self::LOWERCASE) {
            crate::text::to_upper(&rendered)
        } else {
            rendered
        };
        if mirror_allowed && self.contains(Self::MIRRORED) {
            out = crate::text::reverse_dotted(&out);
        }
        out
    }
}
