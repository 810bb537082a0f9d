use super::{ObjectId, ObjectIdGenerator, RandSource, TimeSource, new_unique_id};
use crate::Error;
use std::{collections::HashSet, sync::Mutex, thread::scope};

struct MockTime {
    secs: u32,
}

impl TimeSource<u32> for MockTime {
    fn current_secs(&self) -> u32 {
        self.secs
    }
}

struct FixedRand;

impl RandSource<u64> for FixedRand {
    fn rand(&self) -> u64 {
        0x0000_00AA_BBCC_DDEE
    }
}

impl RandSource<u32> for FixedRand {
    fn rand(&self) -> u32 {
        // Only the low 24 bits seed the counter.
        0xFFFF_FFFE
    }
}

#[test]
fn lays_out_timestamp_unique_and_counter() {
    let generator = ObjectIdGenerator::new(MockTime { secs: 0x5F5E_1000 }, FixedRand);
    let id = generator.next_id();

    assert_eq!(id.timestamp(), 0x5F5E_1000);
    assert_eq!(id.process_unique(), [0xAA, 0xBB, 0xCC, 0xDD, 0xEE]);
    assert_eq!(id.counter(), 0x00FF_FFFE);
    assert_eq!(id.to_string(), "5f5e1000aabbccddeefffffe");
}

#[test]
fn counter_wraps_at_24_bits() {
    let generator = ObjectIdGenerator::new(MockTime { secs: 1 }, FixedRand);
    let counters: Vec<u32> = (0..4).map(|_| generator.next_id().counter()).collect();
    assert_eq!(counters, vec![0x00FF_FFFE, 0x00FF_FFFF, 0, 1]);
}

#[test]
fn parses_its_own_display() {
    let id: ObjectId = "5f5e1000aabbccddeefffffe".parse().unwrap();
    assert_eq!(id.timestamp(), 0x5F5E_1000);
    assert_eq!(format!("{id:?}"), "ObjectId(5f5e1000aabbccddeefffffe)");

    assert!("5f5e1000".parse::<ObjectId>().is_err());
    assert!("zz5e1000aabbccddeefffffe".parse::<ObjectId>().is_err());
}

#[test]
fn rejects_signed_byte_pairs() {
    for input in [
        "+f5e1000aabbccddeefffffe",
        "5f5e1000+abbccddeefffffe",
        "-f5e1000aabbccddeefffffe",
    ] {
        assert!(
            matches!(input.parse::<ObjectId>(), Err(Error::InvalidArgument { .. })),
            "{input}"
        );
    }
}

#[test]
fn serializes_as_hex_string() {
    let id = ObjectId::from_bytes([0x01; 12]);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"010101010101010101010101\"");
    let back: ObjectId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn unique_ids_are_distinct_across_threads() {
    const PER_THREAD: usize = 2_000;
    let threads = num_cpus::get().max(2);
    let seen = Mutex::new(HashSet::new());

    scope(|s| {
        for _ in 0..threads {
            s.spawn(|| {
                let ids: Vec<String> = (0..PER_THREAD).map(|_| new_unique_id()).collect();
                let mut seen = seen.lock().unwrap();
                for id in ids {
                    assert_eq!(id.len(), 24);
                    assert!(id.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
                    assert!(seen.insert(id), "duplicate id");
                }
            });
        }
    });

    assert_eq!(seen.into_inner().unwrap().len(), threads * PER_THREAD);
}
