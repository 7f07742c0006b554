//! Concurrent use of a shared TomlWriter
//!
//! The writer holds no mutable state; each line on the shared sink must
//! arrive whole.

use pak_bard::Logger;
use pak_fs::{Launch, Slice, TomlWriter, read_toml};
use pak_test_utils::sink::contents;
use pak_test_utils::{TestDir, shared_buffer};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_writes_to_distinct_paths() {
    let dir = Arc::new(TestDir::new());
    let buffer = shared_buffer();
    let writer = TomlWriter::with_logger(Logger::new(buffer.clone()));

    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let dir = Arc::clone(&dir);
            let barrier = Arc::clone(&barrier);
            let writer = writer.clone();

            thread::spawn(move || {
                let launch = Launch {
                    slices: vec![Slice::default(); thread_id + 1],
                    ..Launch::default()
                };
                barrier.wait();
                writer
                    .write(dir.path(&format!("launch-{thread_id}.toml")), &launch)
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread should not panic");
    }

    for thread_id in 0..num_threads {
        let loaded: Launch = read_toml(dir.path(&format!("launch-{thread_id}.toml"))).unwrap();
        assert_eq!(loaded.slices.len(), thread_id + 1);
    }

    let output = contents(&buffer);
    let mut counts: Vec<usize> = output
        .lines()
        .map(|line| {
            line.strip_prefix("  ")
                .and_then(|l| l.strip_suffix(" application slices"))
                .and_then(|n| n.parse().ok())
                .unwrap_or_else(|| panic!("malformed line: {line:?}"))
        })
        .collect();
    counts.sort_unstable();
    assert_eq!(counts, (1..=num_threads).collect::<Vec<_>>());
}
