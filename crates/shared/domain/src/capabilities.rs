use bitflags::bitflags;

bitflags! {
    /// Optional host modules that widen the set of supported element families.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u32 {
        const COMMERCE = 1 << 0;
    }
}
