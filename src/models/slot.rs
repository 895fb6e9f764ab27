//! Meal slots and the static header attached to list responses.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Morning,
    PreBreakfast,
    Breakfast,
    Noon,
    Lunch,
    Evening,
    Dinner,
    PostDinner,
    Night,
}

impl Slot {
    /// Display order, which is also the column order of the `diet` table.
    pub const ALL: [Slot; 9] = [
        Slot::Morning,
        Slot::PreBreakfast,
        Slot::Breakfast,
        Slot::Noon,
        Slot::Lunch,
        Slot::Evening,
        Slot::Dinner,
        Slot::PostDinner,
        Slot::Night,
    ];

    /// Column name and JSON key
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Morning => "morning",
            Slot::PreBreakfast => "pre_breakfast",
            Slot::Breakfast => "breakfast",
            Slot::Noon => "noon",
            Slot::Lunch => "lunch",
            Slot::Evening => "evening",
            Slot::Dinner => "dinner",
            Slot::PostDinner => "post_dinner",
            Slot::Night => "night",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Morning => "Morning",
            Slot::PreBreakfast => "Pre Breakfast",
            Slot::Breakfast => "Breakfast",
            Slot::Noon => "Noon",
            Slot::Lunch => "Lunch",
            Slot::Evening => "Evening",
            Slot::Dinner => "Dinner",
            Slot::PostDinner => "PostDinner",
            Slot::Night => "Night",
        }
    }

    pub fn time(&self) -> &'static str {
        match self {
            Slot::Morning => "7:30 AM",
            Slot::PreBreakfast => "8:40 AM",
            Slot::Breakfast => "9:00 AM",
            Slot::Noon => "12:00 PM",
            Slot::Lunch => "2:00 PM",
            Slot::Evening => "5:00 PM",
            Slot::Dinner => "7:30 PM",
            Slot::PostDinner => "9:00 PM",
            Slot::Night => "10:00 PM",
        }
    }
}

#[derive(serde::Serialize)]
struct LabelTime {
    label: &'static str,
    time: &'static str,
}

/// Slot label/time mapping, serialized as `{ "<slot>": { label, time } }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header;

impl Serialize for Header {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Slot::ALL.len()))?;
        for slot in Slot::ALL {
            map.serialize_entry(
                slot.key(),
                &LabelTime {
                    label: slot.label(),
                    time: slot.time(),
                },
            )?;
        }
        map.end()
    }
}
