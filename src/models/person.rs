use crate::errors::{AppError, AppResult};

/// The closed set of people a record can belong to.
/// The discriminant is the code stored in `diet.user_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    Barathi = 0,
    Durga = 1,
    Indira = 2,
    Sakthi = 3,
}

impl Person {
    pub const ALL: [Person; 4] = [
        Person::Barathi,
        Person::Durga,
        Person::Indira,
        Person::Sakthi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Person::Barathi => "Barathi",
            Person::Durga => "Durga",
            Person::Indira => "Indira",
            Person::Sakthi => "Sakthi",
        }
    }

    /// Convert enum → DB code
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Convert name → enum (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Barathi" => Some(Person::Barathi),
            "Durga" => Some(Person::Durga),
            "Indira" => Some(Person::Indira),
            "Sakthi" => Some(Person::Sakthi),
            _ => None,
        }
    }

    /// Convert DB code → enum
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Person::Barathi),
            1 => Some(Person::Durga),
            2 => Some(Person::Indira),
            3 => Some(Person::Sakthi),
            _ => None,
        }
    }
}

pub fn name_to_code(name: &str) -> AppResult<i64> {
    Person::from_name(name)
        .map(|p| p.code())
        .ok_or_else(|| AppError::UnknownPerson(name.to_string()))
}

pub fn code_to_name(code: i64) -> AppResult<&'static str> {
    Person::from_code(code)
        .map(|p| p.name())
        .ok_or_else(|| AppError::UnknownPerson(format!("code {}", code)))
}
