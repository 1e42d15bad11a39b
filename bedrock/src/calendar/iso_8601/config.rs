/// Caller-owned options that influence the generation of ISO-8601 strings.
///
/// The default instance does not abbreviate UTC, i.e., a zero offset is rendered as `+00:00`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Iso8601Config {
  use_z_abbreviation_for_utc: bool,
}

impl Iso8601Config {
  /// Creates a new instance.
  #[inline]
  pub const fn new(use_z_abbreviation_for_utc: bool) -> Self {
    Self { use_z_abbreviation_for_utc }
  }

  /// Sets whether a zero offset is rendered as `Z` instead of `+00:00`.
  #[inline]
  pub const fn set_use_z_abbreviation_for_utc(&mut self, value: bool) -> &mut Self {
    self.use_z_abbreviation_for_utc = value;
    self
  }

  /// If a zero offset is rendered as `Z` instead of `+00:00`.
  #[inline]
  pub const fn use_z_abbreviation_for_utc(&self) -> bool {
    self.use_z_abbreviation_for_utc
  }

  /// Builder version of [`Self::set_use_z_abbreviation_for_utc`].
  #[inline]
  #[must_use]
  pub const fn with_use_z_abbreviation_for_utc(mut self, value: bool) -> Self {
    self.use_z_abbreviation_for_utc = value;
    self
  }
}
