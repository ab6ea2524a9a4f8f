//! Optional search behavior flags for lookup requests

use bitflags::bitflags;

bitflags! {
    /// Bitmask of optional search behaviors, sent as the decimal `flags`
    /// query parameter.
    ///
    /// Bits combine freely with `|`; the service owns interpretation, so any
    /// `u32` can be represented (`from_bits_retain`) and is forwarded
    /// unmodified.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LookupFlags: u32 {
        /// Family-search filter: adult and profane results are excluded
        const FAMILY = 0x0001;
        /// Search by word form instead of exact form only
        const MORPHO = 0x0004;
        /// Restrict results by part of speech
        const POS_FILTER = 0x0008;
    }
}
