use std::{any::type_name, fmt, marker::PhantomData, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// A typed Discord id. Sent over the wire as a decimal string.
#[derive(Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Snowflake<T> {
    phantom: PhantomData<fn() -> T>,
    id: u64,
}

impl<T> PartialEq for Snowflake<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id.eq(&other.id)
    }
}

impl<T> Eq for Snowflake<T> {}

impl<T> PartialOrd for Snowflake<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Snowflake<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T> std::hash::Hash for Snowflake<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl<T> Clone for Snowflake<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Snowflake<T> {}

impl<T> Snowflake<T> {
    pub const fn new(id: u64) -> Self {
        Snowflake {
            phantom: PhantomData,
            id,
        }
    }

    pub const fn get(self) -> u64 {
        self.id
    }

    /// Reinterprets the id as pointing to another kind of resource.
    pub const fn cast<U>(self) -> Snowflake<U> {
        Snowflake::new(self.id)
    }
}

impl<T> From<u64> for Snowflake<T> {
    fn from(value: u64) -> Self {
        Snowflake::new(value)
    }
}

impl<T> From<Snowflake<T>> for String {
    fn from(value: Snowflake<T>) -> Self {
        value.to_string()
    }
}

impl<T> FromStr for Snowflake<T> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Snowflake::new(s.parse()?))
    }
}

impl<T> TryFrom<String> for Snowflake<T> {
    type Error = ParseIntError;

    fn try_from(value: String) -> ::std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl<T> fmt::Debug for Snowflake<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("<{}> {}", type_name::<T>(), self))
    }
}

impl<T> fmt::Display for Snowflake<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)
    }
}
