use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use apate_core::api::reveal;
use apate_core::batch::{find_candidates, reveal_file, Progress, SkipReason};
use apate_core::*;

mod common;
use common::*;

#[test]
fn should_reveal_valid_files_and_keep_the_corrupted_one() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_masked(root, "1.zip.mp4", b"PK\x03\x04 first archive", 4);
    write_masked(root, "doc.pdf.mp4", b"%PDF-1.4 some pages", 8);
    write_masked(root, "sub/photo.png.mp4", b"\x89PNG\r\n\x1a\n pixels", 8);
    let corrupted = with_trailer(b"not masked at all", 0x00ff_ffff);
    let corrupted_path = write_file(root, "broken.mp4", &corrupted);

    let stats = reveal::prepare().from_target(root).execute().unwrap();

    assert_eq!(
        stats,
        BatchStats {
            total: 4,
            success: 3,
            failed: 1,
            skipped: 0
        }
    );
    assert_eq!(fs::read(root.join("1.zip")).unwrap(), b"PK\x03\x04 first archive");
    assert_eq!(fs::read(root.join("doc.pdf")).unwrap(), b"%PDF-1.4 some pages");
    assert_eq!(
        fs::read(root.join("sub/photo.png")).unwrap(),
        b"\x89PNG\r\n\x1a\n pixels"
    );
    assert_eq!(fs::read(&corrupted_path).unwrap(), corrupted);
    assert!(!root.join("1.zip.mp4").exists());
}

#[test]
fn should_report_progress_for_every_file() {
    let dir = TempDir::new().unwrap();
    write_masked(dir.path(), "a.txt.mp4", b"aaaa", 2);
    write_masked(dir.path(), "b.txt.mp4", b"bbbb", 2);

    let plan = reveal::prepare().from_target(dir.path()).plan().unwrap();
    let mut seen = Vec::new();
    let stats = plan.execute_with(|progress, outcome| {
        assert!(matches!(outcome, FileOutcome::Revealed { .. }));
        seen.push((progress, outcome.path().file_name().unwrap().to_owned()));
    });

    assert_eq!(stats.success, 2);
    assert_eq!(
        seen,
        vec![
            (Progress { current: 1, total: 2 }, "a.txt.mp4".into()),
            (Progress { current: 2, total: 2 }, "b.txt.mp4".into()),
        ]
    );
}

#[test]
fn should_only_consider_files_with_the_suffix() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let wanted = write_masked(root, "a.zip.MP4", b"zip!", 2);
    write_masked(root, "b.zip.mkv", b"zip!", 2);
    write_file(root, "c.mp4x", b"whatever");
    fs::create_dir(root.join("folder.mp4")).unwrap();

    let plan = reveal::prepare().from_target(root).plan().unwrap();

    assert_eq!(plan.candidates(), &[wanted]);
}

#[test]
fn should_honor_a_custom_suffix() {
    let dir = TempDir::new().unwrap();
    let wanted = write_masked(dir.path(), "a.zip.ext", b"zip!", 2);
    write_masked(dir.path(), "b.zip.mp4", b"zip!", 2);

    let candidates = find_candidates(dir.path(), &".ext".into(), true).unwrap();

    assert_eq!(candidates, vec![wanted]);
}

#[test]
fn should_not_descend_when_not_recursive() {
    let dir = TempDir::new().unwrap();
    let top = write_masked(dir.path(), "top.bin.mp4", b"top!", 1);
    write_masked(dir.path(), "nested/deep.bin.mp4", b"deep", 1);

    let suffix = DisguiseSuffix::default();
    let flat = find_candidates(dir.path(), &suffix, false).unwrap();
    let all = find_candidates(dir.path(), &suffix, true).unwrap();

    assert_eq!(flat, vec![top.clone()]);
    assert_eq!(all, vec![dir.path().join("nested/deep.bin.mp4"), top]);
}

#[test]
fn should_accept_a_single_file_as_target() {
    let dir = TempDir::new().unwrap();
    let masked = write_masked(dir.path(), "single.txt.mp4", b"single file", 3);
    let plain = write_file(dir.path(), "plain.txt", b"plain");

    let suffix = DisguiseSuffix::default();
    assert_eq!(find_candidates(&masked, &suffix, true).unwrap(), vec![masked.clone()]);
    assert!(find_candidates(&plain, &suffix, true).unwrap().is_empty());
}

#[test]
fn should_fail_for_a_missing_target() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    assert!(matches!(
        find_candidates(&missing, &DisguiseSuffix::default(), true),
        Err(UnmaskError::TargetNotFound(p)) if p == missing
    ));
}

#[test]
fn should_skip_when_the_destination_exists() {
    let dir = TempDir::new().unwrap();
    let masked_data = mask(b"restored content", 4);
    let masked = write_file(dir.path(), "file.txt.mp4", &masked_data);
    let existing = write_file(dir.path(), "file.txt", b"keep me");

    let outcome = reveal_file(&masked, &DisguiseSuffix::default(), &RevealOptions::default());

    match outcome {
        FileOutcome::Skipped {
            path,
            reason: SkipReason::DestinationExists(destination),
        } => {
            assert_eq!(path, masked);
            assert_eq!(destination, existing);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(fs::read(&masked).unwrap(), masked_data);
    assert_eq!(fs::read(&existing).unwrap(), b"keep me");
}

#[test]
fn should_overwrite_the_destination_when_asked() {
    let dir = TempDir::new().unwrap();
    let masked = write_masked(dir.path(), "file.txt.mp4", b"restored content", 4);
    let existing = write_file(dir.path(), "file.txt", b"old");
    let options = RevealOptions {
        overwrite: true,
        ..RevealOptions::default()
    };

    let outcome = reveal_file(&masked, &DisguiseSuffix::default(), &options);

    assert!(matches!(outcome, FileOutcome::Revealed { ref to, .. } if *to == existing));
    assert_eq!(fs::read(&existing).unwrap(), b"restored content");
    assert!(!masked.exists());
}

#[test]
fn should_keep_the_file_masked_when_a_folder_has_the_restored_name() {
    let dir = TempDir::new().unwrap();
    let masked_data = mask(b"restored content", 4);
    let masked = write_file(dir.path(), "file.txt.mp4", &masked_data);
    let folder = dir.path().join("file.txt");
    fs::create_dir(&folder).unwrap();

    for overwrite in [false, true] {
        let options = RevealOptions {
            overwrite,
            ..RevealOptions::default()
        };

        let outcome = reveal_file(&masked, &DisguiseSuffix::default(), &options);

        match outcome {
            FileOutcome::Skipped {
                path,
                reason: SkipReason::DestinationIsDirectory(destination),
            } => {
                assert_eq!(path, masked);
                assert_eq!(destination, folder);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(fs::read(&masked).unwrap(), masked_data);
        assert!(folder.is_dir());
    }
}

#[test]
fn should_unmask_without_renaming_when_the_suffix_does_not_match() {
    let dir = TempDir::new().unwrap();
    let masked = write_masked(dir.path(), "no-suffix", b"original bytes", 5);

    let outcome = reveal_file(&masked, &DisguiseSuffix::default(), &RevealOptions::default());

    match outcome {
        FileOutcome::Revealed { from, to } => {
            assert_eq!(from, masked);
            assert_eq!(to, masked);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(fs::read(&masked).unwrap(), b"original bytes");
}

#[test]
fn dry_run_should_validate_without_modifying() {
    let dir = TempDir::new().unwrap();
    let good = write_masked(dir.path(), "good.bin.mp4", b"0123456789", 6);
    let bad_data = with_trailer(b"plain", 0);
    let bad = write_file(dir.path(), "bad.mp4", &bad_data);
    let good_data = fs::read(&good).unwrap();

    let plan = reveal::prepare().from_target(dir.path()).plan().unwrap();
    let results: Vec<(PathBuf, Option<u32>)> = plan
        .verify()
        .map(|(p, r)| (p.to_path_buf(), r.ok().map(|l| l.mask_length())))
        .collect();

    assert_eq!(results, vec![(bad.clone(), None), (good.clone(), Some(6))]);
    assert_eq!(fs::read(&good).unwrap(), good_data);
    assert_eq!(fs::read(&bad).unwrap(), bad_data);
}

#[test]
fn commands_should_reveal_in_one_call() {
    let dir = TempDir::new().unwrap();
    write_masked(dir.path(), "a.zip.mp4", b"PK\x03\x04", 4);

    let stats = commands::reveal(dir.path(), "mp4", RevealOptions::default()).unwrap();

    assert!(stats.is_clean());
    assert_eq!(stats.success, 1);
    assert_eq!(fs::read(dir.path().join("a.zip")).unwrap(), b"PK\x03\x04");
}
