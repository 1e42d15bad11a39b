macro_rules! _debug {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::debug!($($tt)+);
  };
}

macro_rules! _trace {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::trace!($($tt)+);
  };
}

/// Implements `Deserialize` and `Serialize` through the canonical ISO-8601 representation.
#[cfg(feature = "serde")]
macro_rules! _iso_8601_serde {
  ($ty:ty, $expecting:literal) => {
    const _: () = {
      use crate::calendar::iso_8601::{Iso8601, Iso8601Config};
      use core::fmt;
      use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{Error, Visitor},
      };

      impl<'de> Deserialize<'de> for $ty {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
          D: Deserializer<'de>,
        {
          struct LocalVisitor;

          impl Visitor<'_> for LocalVisitor {
            type Value = $ty;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
              formatter.write_str($expecting)
            }

            #[inline]
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
              E: Error,
            {
              <$ty>::parse_iso_8601(value.as_bytes()).map_err(E::custom)
            }
          }

          deserializer.deserialize_str(LocalVisitor)
        }
      }

      impl Serialize for $ty {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
          S: Serializer,
        {
          serializer.serialize_str(&self.to_iso_8601(Iso8601Config::default()))
        }
      }
    };
  };
}
