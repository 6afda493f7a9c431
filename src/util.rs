/// Numeric conversion helpers.
///
/// Safe conversions between integer widths that report failures as runtime
/// errors instead of truncating.
pub mod num;
/// Whitespace normalization of expression text.
///
/// Provides the `compact` and `spacing` transforms and the
/// [`format::Normalization`] switch that selects between them.
pub mod format;
