use super::slot::Slot;
use serde::{Deserialize, Serialize};

/// One person's meals for one day, in its external (JSON) shape.
///
/// `person` and `date` stay human-readable here; the store encodes them to
/// `user_id` / `YYYYMMDD` on the way in and decodes them on the way out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: i64, // ⇔ diet.id (0 until inserted)
    #[serde(rename = "name", alias = "person")]
    pub person: String, // ⇔ diet.user_id
    pub date: String, // ⇔ diet.date (INTEGER YYYYMMDD)
    pub morning: String,
    pub pre_breakfast: String,
    pub breakfast: String,
    pub noon: String,
    pub lunch: String,
    pub evening: String,
    pub dinner: String,
    pub post_dinner: String,
    pub night: String,
}

impl Record {
    pub fn new(person: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter used by the CLI and tests.
    pub fn with_slot(mut self, slot: Slot, value: impl Into<String>) -> Self {
        *self.slot_mut(slot) = value.into();
        self
    }

    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::Morning => &self.morning,
            Slot::PreBreakfast => &self.pre_breakfast,
            Slot::Breakfast => &self.breakfast,
            Slot::Noon => &self.noon,
            Slot::Lunch => &self.lunch,
            Slot::Evening => &self.evening,
            Slot::Dinner => &self.dinner,
            Slot::PostDinner => &self.post_dinner,
            Slot::Night => &self.night,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::Morning => &mut self.morning,
            Slot::PreBreakfast => &mut self.pre_breakfast,
            Slot::Breakfast => &mut self.breakfast,
            Slot::Noon => &mut self.noon,
            Slot::Lunch => &mut self.lunch,
            Slot::Evening => &mut self.evening,
            Slot::Dinner => &mut self.dinner,
            Slot::PostDinner => &mut self.post_dinner,
            Slot::Night => &mut self.night,
        }
    }

    /// Slot values in column order.
    pub fn slots(&self) -> [&str; 9] {
        Slot::ALL.map(|s| self.slot(s))
    }
}

/// `POST /api/v0/diet/` body and `add --file` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DietRequest {
    pub data: Vec<Record>,
}
