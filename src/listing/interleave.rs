//! Round-robin mixing of a multi-series listing.

use crate::types::{CharacterRecord, Series};

/// Records taken from each series per round.
pub const BLOCK_SIZE: usize = 3;

/// Restricts `records` to `series`, or mixes all series when `series` is
/// `None`.
///
/// Mixing partitions the records by series (keeping relative order), then
/// repeatedly takes up to [`BLOCK_SIZE`] records from Dragon Ball, One Piece
/// and Naruto in that order. An exhausted series contributes nothing to later
/// rounds but does not end them.
pub fn interleave(records: Vec<CharacterRecord>, series: Option<Series>) -> Vec<CharacterRecord> {
    if let Some(series) = series {
        return records.into_iter().filter(|r| r.series() == series).collect();
    }

    let total = records.len();
    let mut groups: [Vec<CharacterRecord>; 3] = Default::default();
    for record in records {
        let slot = Series::ALL
            .iter()
            .position(|s| *s == record.series())
            .unwrap_or_default();
        groups[slot].push(record);
    }

    let mut queues = groups.map(Vec::into_iter);
    let mut mixed = Vec::with_capacity(total);
    while mixed.len() < total {
        for queue in queues.iter_mut() {
            mixed.extend(queue.by_ref().take(BLOCK_SIZE));
        }
    }
    mixed
}
