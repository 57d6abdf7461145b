//! Unit-of-measure catalogue.
//!
//! Enforced by the form only; the access layer passes the stored string
//! through unchanged.

/// A selectable unit of measure with its display label.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnitOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The fixed set of units offered by the inventory form.
pub const UNIT_OPTIONS: &[UnitOption] = &[
    UnitOption { value: "kg", label: "Kilograms (kg)" },
    UnitOption { value: "lb", label: "Pounds (lb)" },
    UnitOption { value: "tons", label: "Tons" },
    UnitOption { value: "liters", label: "Liters" },
    UnitOption { value: "gallons", label: "Gallons" },
    UnitOption { value: "pieces", label: "Pieces" },
    UnitOption { value: "boxes", label: "Boxes" },
    UnitOption { value: "bags", label: "Bags" },
    UnitOption { value: "bottles", label: "Bottles" },
    UnitOption { value: "rolls", label: "Rolls" },
];

/// Whether `value` is one of the catalogued units.
pub fn is_known_unit(value: &str) -> bool {
    UNIT_OPTIONS.iter().any(|u| u.value == value)
}
