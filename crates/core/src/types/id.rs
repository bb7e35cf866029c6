//! Newtype id for type-safe order references.

use serde::{Deserialize, Serialize};

/// Type-safe wrapper around the 64-bit order key.
///
/// Assigned by the store on insert; a record that has not been persisted
/// carries no id at all (`Option<OrderId>` in payloads and store records).
///
/// With the `postgres` feature enabled the wrapper binds and decodes as a
/// plain `BIGINT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Create a new ID from an i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for OrderId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for OrderId {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> core::result::Result<Self, sqlx::error::BoxDynError> {
        let id = <i64 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(id))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for OrderId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> std::result::Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
