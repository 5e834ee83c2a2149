//! Integration tests for on-disk record files.

use findlocation::record::{RecordWriter, RECORD_SIZE};
use findlocation::search::{BinarySearch, LinearSearch, Locate};
use findlocation::source::{load, BufferedSource};
use findlocation::{find_location, ContentSource, Error, Input, LookupConfig, Strategy};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

/// Synthetic sorted file with prefixes 100000, 100003, 100006, ...
fn synthetic(count: usize) -> Vec<u8> {
    let mut writer = RecordWriter::new();
    for i in 0..count {
        writer
            .add(&format!("{:06}", 100_000 + i * 3), &format!("City {} , ST", i))
            .unwrap();
    }
    writer.write()
}

#[test]
fn test_single_record_example() {
    let mut writer = RecordWriter::new();
    writer.add("123456", "New York, NY").unwrap();
    let file = write_file(&writer.write());
    let input = Input::Path(file.path().to_path_buf());
    let config = LookupConfig::default();

    let payload = find_location("1234569999", &input, &config).unwrap();
    assert_eq!(payload.trimmed(), b"New York, NY");

    let err = find_location("9999999999", &input, &config).unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[test]
fn test_round_trip_inserted_entry() {
    let mut writer = RecordWriter::new();
    for i in 0..500 {
        writer
            .add(&format!("{:06}", i * 7), &format!("Filler {}", i))
            .unwrap();
    }
    writer.add("424243", "Springfield, IL  \n").unwrap();
    let file = write_file(&writer.write());
    let input = Input::Path(file.path().to_path_buf());

    for suffix in ["0000", "1234", "9999"] {
        let key = format!("424243{}", suffix);
        let payload = find_location(&key, &input, &LookupConfig::default()).unwrap();
        assert_eq!(payload.to_string(), "Springfield, IL");
    }
}

#[test]
fn test_empty_file() {
    let file = write_file(&[]);
    let input = Input::Path(file.path().to_path_buf());
    for strategy in [Strategy::Auto, Strategy::Binary, Strategy::Linear] {
        let config = LookupConfig {
            strategy,
            ..LookupConfig::default()
        };
        let err = find_location("1234567890", &input, &config).unwrap_err();
        assert!(err.is_not_found(), "{:?}: {:?}", strategy, err);
    }
}

#[test]
fn test_boundary_records_on_disk() {
    let data = synthetic(1000);
    let file = write_file(&data);
    let input = Input::Path(file.path().to_path_buf());
    let config = LookupConfig::default();

    let first = find_location("1000000000", &input, &config).unwrap();
    assert_eq!(first.to_string(), "City 0 , ST");

    let last_prefix = 100_000 + 999 * 3;
    let last = find_location(&format!("{}0000", last_prefix), &input, &config).unwrap();
    assert_eq!(last.to_string(), "City 999 , ST");
}

#[test]
fn test_differential_over_file() {
    let data = synthetic(777);
    let file = write_file(&data);
    let source = load(file.as_file(), &LookupConfig::default()).unwrap();
    assert_eq!(source.record_count(), 777);

    for probe in 99_990..(100_000 + 777 * 3 + 10) {
        let key = findlocation::TargetKey::parse(&format!("{:06}0000", probe)).unwrap();
        let prefix = key.prefix();
        assert_eq!(
            BinarySearch.locate(source.as_bytes(), &prefix),
            LinearSearch.locate(source.as_bytes(), &prefix),
            "probe {}",
            probe
        );
    }
}

#[test]
fn test_trailing_partial_record_ignored() {
    let mut data = synthetic(4);
    data.extend_from_slice(b"100012Ghost");
    let file = write_file(&data);
    let source = load(file.as_file(), &LookupConfig::default()).unwrap();

    assert_eq!(source.len(), 4 * RECORD_SIZE + 11);
    assert_eq!(source.record_count(), 4);

    let input = Input::Path(file.path().to_path_buf());
    assert!(find_location("1000120000", &input, &LookupConfig::default()).is_err());
}

#[test]
fn test_stream_loader_spans_growth() {
    // 5000 records is 160000 bytes, several doublings past 32 KiB.
    let data = synthetic(5000);
    let source = BufferedSource::read_from(&data[..], LookupConfig::default().initial_buffer_capacity)
        .unwrap();
    assert_eq!(source.as_bytes(), &data[..]);

    let key = findlocation::TargetKey::parse("1149970000").unwrap();
    let payload = findlocation::locate(&source, &key, &LookupConfig::default()).unwrap();
    assert_eq!(payload.to_string(), "City 4999 , ST");
}

#[test]
fn test_verify_sorted_on_unsorted_file() {
    let mut writer = RecordWriter::new();
    writer.add("500000", "Middle").unwrap();
    writer.add("100000", "Low").unwrap();
    writer.add("900000", "High").unwrap();
    let file = write_file(&writer.write_unsorted());
    let input = Input::Path(file.path().to_path_buf());

    let strict = LookupConfig {
        verify_sorted: true,
        ..LookupConfig::default()
    };
    let err = find_location("9000000000", &input, &strict).unwrap_err();
    assert!(matches!(err, Error::Unsorted { index: 1 }));

    let linear = LookupConfig {
        strategy: Strategy::Linear,
        verify_sorted: true,
        ..LookupConfig::default()
    };
    let payload = find_location("1000000000", &input, &linear).unwrap();
    assert_eq!(payload.to_string(), "Low");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = Input::Path(dir.path().join("absent.dat"));
    let err = find_location("1234567890", &input, &LookupConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
}
