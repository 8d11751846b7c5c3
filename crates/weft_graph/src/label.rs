//! Labels and the shared label namespace.

use serde::{Deserialize, Serialize};

/// An opaque integer tag identifying a compatibility class between the
/// netlist and the device.
///
/// A label on a netlist node means "any device node whose primary or
/// alternate label set contains this value is a legal site". Equality is the
/// only meaningful operation; labels carry no other structure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Label(u32);

impl Label {
    /// Creates a label from a raw `u32` value.
    pub fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw `u32` value.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The monotonically allocated label namespace shared by a netlist graph and
/// its device graph.
///
/// The caller creates one `LabelSpace`, allocates every label from it, and
/// uses the resulting values on both graphs. Each allocation is strictly
/// greater than all prior ones. The engine never creates labels.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LabelSpace {
    next: u32,
}

impl LabelSpace {
    /// Creates an empty label space.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocates a fresh unique label, strictly greater than all prior ones.
    pub fn alloc(&mut self) -> Label {
        let label = Label(self.next);
        self.next += 1;
        label
    }

    /// Returns the maximum allocated label, or `None` if nothing has been
    /// allocated yet.
    pub fn max_label(&self) -> Option<Label> {
        self.next.checked_sub(1).map(Label)
    }

    /// Returns how many labels have been allocated.
    pub fn len(&self) -> usize {
        self.next as usize
    }

    /// Returns `true` if no labels have been allocated.
    pub fn is_empty(&self) -> bool {
        self.next == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_is_strictly_increasing() {
        let mut space = LabelSpace::new();
        let a = space.alloc();
        let b = space.alloc();
        let c = space.alloc();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn max_label_empty() {
        let space = LabelSpace::new();
        assert_eq!(space.max_label(), None);
        assert!(space.is_empty());
    }

    #[test]
    fn max_label_tracks_last_alloc() {
        let mut space = LabelSpace::new();
        let a = space.alloc();
        assert_eq!(space.max_label(), Some(a));
        let b = space.alloc();
        assert_eq!(space.max_label(), Some(b));
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn label_equality_only() {
        let mut space = LabelSpace::new();
        let a = space.alloc();
        let b = space.alloc();
        assert_ne!(a, b);
        assert_eq!(a, Label::from_raw(a.as_raw()));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Label::from_raw(9)), "9");
    }

    #[test]
    fn serde_roundtrip() {
        let mut space = LabelSpace::new();
        space.alloc();
        space.alloc();
        let json = serde_json::to_string(&space).unwrap();
        let mut restored: LabelSpace = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.max_label(), Some(Label::from_raw(1)));
        assert_eq!(restored.alloc(), Label::from_raw(2));
    }
}
