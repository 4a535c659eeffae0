//! The data model shared by every decoder
//!
//! Decoders produce one record per ping. Records are folded into batches
//! column by column: every field of a record type has a matching column in
//! its batch type, generated alongside the record by [`columnar_record`].
use binrw::BinRead;
use time::{Duration, OffsetDateTime};

mod ragged;
pub mod sentinel;
mod version;

pub use ragged::RaggedArray;
pub use version::{SchemaVersion, VersionError};

/// Options that change how a subrecord is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// The GSF version of the file being read
    pub version: SchemaVersion,
    /// Follow the documented GSF field types where deployed encoders deviate from them
    ///
    /// Off by default: files in the wild were written by the deviating
    /// encoders and decode correctly only with the legacy interpretation.
    pub strict: bool,
}

impl DecodeOptions {
    /// Options for a file of the given version
    pub fn new(version: SchemaVersion) -> Self {
        DecodeOptions {
            version,
            strict: false,
        }
    }

    /// Enable or disable strict decoding
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// A growable column of per-ping values
pub trait Column: Default {
    /// The value contributed by one ping
    type Item;

    /// Add one ping's value
    fn push(&mut self, item: Self::Item);

    /// Move every ping of `other` onto the end of this column
    fn append(&mut self, other: Self);

    /// The number of pings in the column
    fn len(&self) -> usize;

    /// True if the column holds no pings
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Column for Vec<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn append(&mut self, mut other: Self) {
        Vec::append(self, &mut other)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Column for RaggedArray<T> {
    type Item = Vec<T>;

    fn push(&mut self, item: Vec<T>) {
        self.push_row(item)
    }

    fn append(&mut self, other: Self) {
        RaggedArray::append(self, other)
    }

    fn len(&self) -> usize {
        RaggedArray::len(self)
    }
}

/// A field type that knows which column accumulates it
///
/// Plain values go into a `Vec`, per-ping sequences into a [`RaggedArray`].
pub trait Columnar: Sized {
    /// The column type
    type Column: Column<Item = Self>;
}

macro_rules! plain_columnar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Columnar for $t {
                type Column = Vec<$t>;
            }
        )*
    };
}

plain_columnar!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool, String, OffsetDateTime);

impl<T> Columnar for Option<T> {
    type Column = Vec<Option<T>>;
}

impl<T, const N: usize> Columnar for [T; N] {
    type Column = Vec<[T; N]>;
}

impl<T> Columnar for Vec<T> {
    type Column = RaggedArray<T>;
}

/// A single-ping record that can be folded into a batch
pub trait Accumulate: Sized {
    /// The batch type holding one column per field
    type Batch: Batch;

    /// Append every field of this record to the batch
    fn push_into(self, batch: &mut Self::Batch);

    /// Start a new batch holding only this record
    fn into_batch(self) -> Self::Batch {
        let mut batch = Self::Batch::default();
        self.push_into(&mut batch);
        batch
    }
}

/// A multi-ping batch of one record type
pub trait Batch: Default {
    /// Concatenate another batch onto this one, field by field
    fn append(&mut self, other: Self);

    /// The number of pings in the batch
    fn pings(&self) -> usize;
}

/// Declare a record type together with its batch type
///
/// The record is emitted as written (attributes included, so binrw and serde
/// derives work as usual). The batch gets one column per field, and the
/// record gets an [`Accumulate`] implementation pushing each field into its
/// column.
macro_rules! columnar_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $batch:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Columns of [`", stringify!($name), "`] accumulated over a run of pings")]
        #[derive(Debug, Default, Clone, PartialEq, ::serde::Serialize)]
        pub struct $batch {
            /// The number of pings folded into the batch
            pub pings: usize,
            $(
                #[doc = concat!("[`", stringify!($name), "::", stringify!($field), "`] for every ping")]
                pub $field: <$ty as $crate::model::Columnar>::Column,
            )*
        }

        impl $crate::model::Accumulate for $name {
            type Batch = $batch;

            fn push_into(self, batch: &mut $batch) {
                batch.pings += 1;
                $( $crate::model::Column::push(&mut batch.$field, self.$field); )*
            }
        }

        impl $crate::model::Batch for $batch {
            fn append(&mut self, other: Self) {
                self.pings += other.pings;
                $( $crate::model::Column::append(&mut self.$field, other.$field); )*
            }

            fn pings(&self) -> usize {
                self.pings
            }
        }
    };
}

pub(crate) use columnar_record;

/// A `(seconds, nanoseconds)` pair since the Unix epoch
#[derive(BinRead, Debug, Clone, Copy, PartialEq, Eq)]
#[br(big)]
pub(crate) struct TimeSpec {
    seconds: u32,
    nanoseconds: u32,
}

impl TimeSpec {
    pub(crate) fn to_datetime(self) -> Result<OffsetDateTime, time::error::ComponentRange> {
        Ok(OffsetDateTime::from_unix_timestamp(i64::from(self.seconds))?
            + Duration::nanoseconds(i64::from(self.nanoseconds)))
    }
}

/// Decode a NUL-padded ASCII field
pub(crate) fn text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    columnar_record! {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Probe => ProbeBatch {
            pub depth: f64,
            pub beams: Vec<u16>,
            pub flag: Option<u8>,
        }
    }

    fn probe(depth: f64, beams: &[u16]) -> Probe {
        Probe {
            depth,
            beams: beams.to_vec(),
            flag: (beams.len() % 2 == 0).then_some(beams.len() as u8),
        }
    }

    #[test]
    fn push_fills_every_column() {
        let mut batch = probe(1.0, &[1, 2]).into_batch();
        probe(2.0, &[]).push_into(&mut batch);
        assert_eq!(batch.pings, 2);
        assert_eq!(batch.depth, vec![1.0, 2.0]);
        assert_eq!(batch.beams.row(0), Some(&[1, 2][..]));
        assert_eq!(batch.beams.row(1), Some(&[][..]));
        assert_eq!(batch.flag, vec![Some(2), Some(0)]);
    }

    #[test]
    fn folding_is_associative() {
        let pings = [probe(1.0, &[1]), probe(2.0, &[2, 3]), probe(3.0, &[])];

        let mut left = pings[0].clone().into_batch();
        pings[1].clone().push_into(&mut left);
        let mut left_tail = ProbeBatch::default();
        pings[2].clone().push_into(&mut left_tail);
        left.append(left_tail);

        let mut right = pings[1].clone().into_batch();
        pings[2].clone().push_into(&mut right);
        let mut grouped = pings[0].clone().into_batch();
        grouped.append(right);

        assert_eq!(left, grouped);
        assert_eq!(left.pings(), 3);
    }

    #[test]
    fn timespec_to_datetime() {
        let ts = TimeSpec {
            seconds: 1_000_000_000,
            nanoseconds: 500_000_000,
        };
        assert_eq!(
            ts.to_datetime().unwrap(),
            datetime!(2001-09-09 01:46:40.5 UTC)
        );
    }

    #[test]
    fn text_stops_at_nul() {
        assert_eq!(text(b"2024\0\0\0\0"), "2024");
        assert_eq!(text(b"EM2040 "), "EM2040");
        assert_eq!(text(&[0u8; 4]), "");
    }
}
