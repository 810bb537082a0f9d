//! Deterministic, size-bounded partitioning of batch workloads.
//!
//! Batch jobs (price recalculation, catalog sync, ...) fan out to a pool of
//! workers one chunk at a time. The helpers here cut an ordered sequence into
//! chunks of at most `limit` elements, or into exactly two halves, without
//! reordering, dropping, or duplicating anything.
//!
//! The chunk-size limit is optional at every call site and defaults to
//! [`FORK_COUNT_LIMIT`]. A limit of zero is rejected with
//! [`Error::InvalidArgument`].

use core::ops::Range;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, Result};

#[cfg(test)]
mod tests;

/// Default maximum number of elements handed to a single forked task.
pub const FORK_COUNT_LIMIT: usize = 100;

fn requested_limit(limit: Option<usize>) -> Result<usize> {
    match limit {
        Some(0) => Err(Error::invalid_argument(
            "chunk-size limit must be greater than zero",
        )),
        Some(limit) => Ok(limit),
        None => Ok(FORK_COUNT_LIMIT),
    }
}

/// Computes the index ranges that [`partition_into_chunks`] cuts a sequence of
/// `len` elements into.
///
/// A limit larger than a non-empty sequence is clamped to its length, which
/// yields a single range covering everything. An empty sequence yields no
/// ranges at all.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `limit` is `Some(0)`.
///
/// # Example
///
/// ```
/// use pricekit::chunk_ranges;
///
/// assert_eq!(chunk_ranges(5, Some(2)).unwrap(), vec![0..2, 2..4, 4..5]);
/// assert!(chunk_ranges(0, Some(2)).unwrap().is_empty());
/// ```
pub fn chunk_ranges(len: usize, limit: Option<usize>) -> Result<Vec<Range<usize>>> {
    let mut effective = requested_limit(limit)?;
    if effective > len && len > 0 {
        effective = len;
    }

    let ranges = (0..len.div_ceil(effective))
        .map(|i| {
            let start = i * effective;
            start..len.min(start.saturating_add(effective))
        })
        .collect();
    Ok(ranges)
}

/// Splits `seq` into consecutive chunks of at most `limit` elements.
///
/// Every chunk holds exactly the effective limit except possibly the last,
/// which holds the remainder. Concatenating the chunks in order reproduces
/// `seq`. An empty input produces no chunks (not one empty chunk).
///
/// `None` selects [`FORK_COUNT_LIMIT`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `limit` is `Some(0)`.
///
/// # Example
///
/// ```
/// use pricekit::partition_into_chunks;
///
/// let chunks = partition_into_chunks(&[1, 2, 3], Some(10)).unwrap();
/// assert_eq!(chunks, vec![&[1, 2, 3][..]]);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(seq), fields(len = seq.len())))]
pub fn partition_into_chunks<T>(seq: &[T], limit: Option<usize>) -> Result<Vec<&[T]>> {
    let chunks = chunk_ranges(seq.len(), limit)?
        .into_iter()
        .map(|range| &seq[range])
        .collect();
    Ok(chunks)
}

/// Owned counterpart of [`partition_into_chunks`].
///
/// Moves the elements of `seq` into owned chunks so each one can be sent to a
/// separate worker.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `limit` is `Some(0)`.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(seq), fields(len = seq.len())))]
pub fn partition_into_chunks_owned<T>(seq: Vec<T>, limit: Option<usize>) -> Result<Vec<Vec<T>>> {
    let ranges = chunk_ranges(seq.len(), limit)?;
    let mut elements = seq.into_iter();
    let chunks = ranges
        .into_iter()
        .map(|range| elements.by_ref().take(range.len()).collect())
        .collect();
    Ok(chunks)
}

/// Splits `seq` into exactly two parts: the first `limit` elements and the
/// rest.
///
/// A limit larger than the sequence is clamped to its length, so the second
/// part is empty. Either part may be empty; an empty input yields two empty
/// parts.
///
/// `None` selects [`FORK_COUNT_LIMIT`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `limit` is `Some(0)`.
///
/// # Example
///
/// ```
/// use pricekit::partition_into_two;
///
/// let empty: [u8; 0] = [];
/// let (head, tail) = partition_into_two(&empty, Some(5)).unwrap();
/// assert!(head.is_empty() && tail.is_empty());
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(seq), fields(len = seq.len())))]
pub fn partition_into_two<T>(seq: &[T], limit: Option<usize>) -> Result<(&[T], &[T])> {
    let effective = requested_limit(limit)?.min(seq.len());
    Ok(seq.split_at(effective))
}
