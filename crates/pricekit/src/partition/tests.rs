use crate::{
    Error, FORK_COUNT_LIMIT, chunk_ranges, partition_into_chunks, partition_into_chunks_owned,
    partition_into_two,
};

fn assert_reconstructs<T: PartialEq + core::fmt::Debug>(seq: &[T], chunks: &[&[T]]) {
    let joined: Vec<&T> = chunks.iter().flat_map(|chunk| chunk.iter()).collect();
    let original: Vec<&T> = seq.iter().collect();
    assert_eq!(joined, original);
}

#[test]
fn splits_into_limit_sized_chunks_with_remainder_last() {
    let seq = [1, 2, 3, 4, 5];
    let chunks = partition_into_chunks(&seq, Some(2)).unwrap();
    assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
}

#[test]
fn clamps_oversized_limit_to_single_chunk() {
    let seq = [1, 2, 3];
    let chunks = partition_into_chunks(&seq, Some(10)).unwrap();
    assert_eq!(chunks, vec![&[1, 2, 3][..]]);
}

#[test]
fn empty_input_yields_no_chunks() {
    let seq: [u32; 0] = [];
    for limit in [None, Some(1), Some(7), Some(usize::MAX)] {
        assert!(partition_into_chunks(&seq, limit).unwrap().is_empty());
        assert!(partition_into_chunks_owned(Vec::<u32>::new(), limit).unwrap().is_empty());
    }
}

#[test]
fn exact_multiple_has_no_short_chunk() {
    let seq: Vec<u32> = (0..12).collect();
    let chunks = partition_into_chunks(&seq, Some(4)).unwrap();
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|chunk| chunk.len() == 4));
}

#[test]
fn default_limit_is_fork_count_limit() {
    let seq: Vec<usize> = (0..FORK_COUNT_LIMIT * 2 + 1).collect();
    let chunks = partition_into_chunks(&seq, None).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].len(), FORK_COUNT_LIMIT);
    assert_eq!(chunks[1].len(), FORK_COUNT_LIMIT);
    assert_eq!(chunks[2], &[FORK_COUNT_LIMIT * 2][..]);
}

#[test]
fn chunks_reconstruct_input_for_every_limit() {
    for len in 0..40usize {
        let seq: Vec<usize> = (0..len).collect();
        for limit in 1..45usize {
            let chunks = partition_into_chunks(&seq, Some(limit)).unwrap();
            assert_reconstructs(&seq, &chunks);

            let effective = if len > 0 { limit.min(len) } else { limit };
            assert_eq!(chunks.len(), len.div_ceil(effective));
            if let Some((last, full)) = chunks.split_last() {
                assert!(full.iter().all(|chunk| chunk.len() == effective));
                assert!(!last.is_empty() && last.len() <= effective);
            }
        }
    }
}

#[test]
fn owned_chunks_match_borrowed_chunks() {
    let seq: Vec<String> = (0..11).map(|i| format!("sku-{i}")).collect();
    let borrowed = partition_into_chunks(&seq, Some(3)).unwrap();
    let owned = partition_into_chunks_owned(seq.clone(), Some(3)).unwrap();

    assert_eq!(owned.len(), borrowed.len());
    for (owned, borrowed) in owned.iter().zip(&borrowed) {
        assert_eq!(owned.as_slice(), *borrowed);
    }
}

#[test]
fn zero_limit_is_rejected() {
    let seq = [1, 2, 3];
    assert!(matches!(
        partition_into_chunks(&seq, Some(0)),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        partition_into_chunks_owned(seq.to_vec(), Some(0)),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        partition_into_two(&seq, Some(0)),
        Err(Error::InvalidArgument { .. })
    ));
    // Rejected even when there is nothing to split.
    assert!(matches!(
        chunk_ranges(0, Some(0)),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn ranges_cover_the_sequence() {
    assert_eq!(chunk_ranges(5, Some(2)).unwrap(), vec![0..2, 2..4, 4..5]);
    assert_eq!(chunk_ranges(3, Some(10)).unwrap(), vec![0..3]);
    assert_eq!(chunk_ranges(1, Some(1)).unwrap(), vec![0..1]);
}

#[test]
fn ranges_near_usize_max_do_not_overflow() {
    let limit = usize::MAX - 1;
    assert_eq!(
        chunk_ranges(usize::MAX, Some(limit)).unwrap(),
        vec![0..limit, limit..usize::MAX]
    );
    assert_eq!(
        chunk_ranges(usize::MAX, Some(usize::MAX)).unwrap(),
        vec![0..usize::MAX]
    );
}

#[test]
fn splits_into_two_at_limit() {
    let seq = [1, 2, 3, 4, 5];
    let (head, tail) = partition_into_two(&seq, Some(2)).unwrap();
    assert_eq!(head, &[1, 2]);
    assert_eq!(tail, &[3, 4, 5]);
}

#[test]
fn split_into_two_of_empty_is_two_empty_halves() {
    let seq: [u8; 0] = [];
    let (head, tail) = partition_into_two(&seq, Some(5)).unwrap();
    assert!(head.is_empty());
    assert!(tail.is_empty());
}

#[test]
fn split_into_two_clamps_to_length() {
    let seq = [1, 2, 3];
    let (head, tail) = partition_into_two(&seq, Some(3)).unwrap();
    assert_eq!(head, &[1, 2, 3]);
    assert!(tail.is_empty());

    let (head, tail) = partition_into_two(&seq, None).unwrap();
    assert_eq!(head, &[1, 2, 3]);
    assert!(tail.is_empty());
}

#[test]
fn split_into_two_reconstructs_input() {
    let seq: Vec<u16> = (0..25).collect();
    for limit in 1..30 {
        let (head, tail) = partition_into_two(&seq, Some(limit)).unwrap();
        assert_eq!(head.len(), limit.min(seq.len()));
        assert_reconstructs(&seq, &[head, tail]);
    }
}
