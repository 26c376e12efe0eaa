// Copyright 2026 Dropbox SDK for Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use time::format_description::well_known::Rfc3339;

/// A point in time, as used by the Dropbox API.
///
/// # Examples
/// ```
/// # use dropbox_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
/// # Ok::<(), TimestampError>(())
/// ```
///
/// The service uses second precision for all timestamps, in UTC. The range is
/// from 0001-01-01T00:00:00Z to 9999-12-31T23:59:59Z.
///
/// # JSON Mapping
///
/// In JSON format, the Timestamp type is encoded as a string in the
/// `%Y-%m-%dT%H:%M:%SZ` format, for example, "2017-01-15T01:30:15Z". When
/// parsing, any [RFC 3339](https://www.ietf.org/rfc/rfc3339.txt) string is
/// accepted. Offsets are converted to UTC and fractional seconds are
/// truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Timestamp {
    /// Seconds of UTC time since Unix epoch 1970-01-01T00:00:00Z.
    seconds: i64,
}

/// Represent failures in converting or creating [Timestamp] instances.
///
/// Examples
/// ```
/// # use dropbox_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::new(Timestamp::MAX_SECONDS + 2);
/// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
///
/// let ts = Timestamp::try_from("invalid");
/// assert!(matches!(ts, Err(TimestampError::Deserialize(_))));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// The seconds are out of range.
    #[error("seconds out of range")]
    OutOfRange,

    /// There was a problem deserializing a timestamp.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;

const FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

impl Timestamp {
    // Obtained via: `date +%s --date='0001-01-01T00:00:00Z'`
    /// The minimum value for the `seconds` component. Corresponds to '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    // Obtained via: `date +%s --date='9999-12-31T23:59:59Z'`
    /// The maximum value for the `seconds` component. Corresponds to '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// Creates a new [Timestamp] from the seconds since the Unix epoch.
    ///
    /// # Examples
    /// ```
    /// # use dropbox_sdk_wkt::{Timestamp, TimestampError};
    /// let ts = Timestamp::new(1747388772)?;
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds })
    }

    /// Create a [Timestamp] clamped to the valid range.
    pub fn clamp(seconds: i64) -> Self {
        Self {
            seconds: seconds.clamp(Self::MIN_SECONDS, Self::MAX_SECONDS),
        }
    }

    /// Seconds of UTC time since Unix epoch (1970-01-01T00:00:00Z).
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    fn to_offset_date_time(self) -> time::OffsetDateTime {
        // The range check in `new()` and `clamp()` guarantees this conversion
        // succeeds, the fallback is never used.
        time::OffsetDateTime::from_unix_timestamp(self.seconds)
            .unwrap_or(time::OffsetDateTime::UNIX_EPOCH)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .to_offset_date_time()
            .format(FORMAT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

/// Converts a [Timestamp] to its [String] representation.
///
/// # Example
/// ```
/// # use dropbox_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::new(1747388772)?;
/// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
/// # Ok::<(), anyhow::Error>(())
/// ```
impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_string()
    }
}

/// Converts the string representation of a timestamp to [Timestamp].
///
/// # Example
/// ```
/// # use dropbox_sdk_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// # Ok::<(), anyhow::Error>(())
/// ```
impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| TimestampError::Deserialize(e.into()))?;
        Timestamp::new(odt.unix_timestamp())
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

/// Convert from [time::OffsetDateTime] to [Timestamp].
///
/// # Examples
/// ```
/// # use dropbox_sdk_wkt::Timestamp;
/// use time::macros::datetime;
/// let ts = Timestamp::try_from(datetime!(2025-05-16 09:46:12 UTC))?;
/// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
/// # Ok::<(), anyhow::Error>(())
/// ```
impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        Self::new(value.unix_timestamp())
    }
}

/// Convert from [Timestamp] to [OffsetDateTime][time::OffsetDateTime].
impl From<Timestamp> for time::OffsetDateTime {
    fn from(value: Timestamp) -> Self {
        value.to_offset_date_time()
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn unix_epoch() -> Result {
        let ts = Timestamp::default();
        assert_eq!(String::from(ts), "1970-01-01T00:00:00Z");
        Ok(())
    }

    #[test_case(Timestamp::MIN_SECONDS, "0001-01-01T00:00:00Z")]
    #[test_case(Timestamp::MAX_SECONDS, "9999-12-31T23:59:59Z")]
    #[test_case(1747388772, "2025-05-16T09:46:12Z")]
    #[test_case(-1, "1969-12-31T23:59:59Z")]
    fn format(seconds: i64, want: &str) -> Result {
        let ts = Timestamp::new(seconds)?;
        assert_eq!(ts.to_string(), want);
        assert_eq!(Timestamp::try_from(want)?, ts);
        Ok(())
    }

    #[test_case(Timestamp::MIN_SECONDS - 1)]
    #[test_case(Timestamp::MAX_SECONDS + 1)]
    fn out_of_range(seconds: i64) {
        let ts = Timestamp::new(seconds);
        assert!(matches!(ts, Err(TimestampError::OutOfRange)), "{ts:?}");
    }

    #[test_case(i64::MIN, Timestamp::MIN_SECONDS)]
    #[test_case(i64::MAX, Timestamp::MAX_SECONDS)]
    #[test_case(0, 0)]
    fn clamp(seconds: i64, want: i64) {
        assert_eq!(Timestamp::clamp(seconds).seconds(), want);
    }

    #[test_case("2019-10-08T20:52:10.418397-07:00", "2019-10-09T03:52:10Z")]
    #[test_case("2025-05-16T09:46:12.999Z", "2025-05-16T09:46:12Z")]
    #[test_case("2025-05-16T09:46:12+00:00", "2025-05-16T09:46:12Z")]
    fn parse_normalizes(input: &str, want: &str) -> Result {
        let ts = Timestamp::try_from(input)?;
        assert_eq!(String::from(ts), want);
        Ok(())
    }

    #[test_case("")]
    #[test_case("2025-05-16")]
    #[test_case("not a timestamp")]
    fn parse_errors(input: &str) {
        let ts = Timestamp::try_from(input);
        assert!(matches!(ts, Err(TimestampError::Deserialize(_))), "{ts:?}");
    }

    #[test]
    fn serde() -> Result {
        let ts = Timestamp::new(1747388772)?;
        let got = serde_json::to_value(ts)?;
        assert_eq!(got, json!("2025-05-16T09:46:12Z"));
        let roundtrip = serde_json::from_value::<Timestamp>(got)?;
        assert_eq!(roundtrip, ts);

        let err = serde_json::from_value::<Timestamp>(json!(1747388772));
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn offset_date_time() -> Result {
        use time::macros::datetime;
        let ts = Timestamp::try_from(datetime!(2025-05-16 09:46:12 UTC))?;
        assert_eq!(ts.seconds(), 1747388772);
        let odt = time::OffsetDateTime::from(ts);
        assert_eq!(odt, datetime!(2025-05-16 09:46:12 UTC));
        Ok(())
    }
}
