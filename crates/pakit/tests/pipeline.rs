use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use pakit::cli::HashArgs;
use pakit::report::RecordingReporter;
use pakit::workflow::{self, Context, FILE_NOT_FOUND, Step, hash_file, verify_file};
use pakit_digest::hash_bytes;
use pakit_msix::SIGNATURE_PART;
use tempfile::tempdir;
use zip::write::SimpleFileOptions;

const STEPS: &[Step] = &[verify_file, hash_file];

fn run_pipeline(file: PathBuf, msix: bool) -> (Context, RecordingReporter) {
    let reporter = RecordingReporter::new();
    let args = HashArgs { file, msix };
    let mut ctx = Context::new(args, Box::new(reporter.clone()));
    workflow::run(&mut ctx, STEPS).unwrap();
    (ctx, reporter)
}

fn write_signed_package(path: &Path, signature: &[u8]) {
    let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
    writer
        .start_file("AppxManifest.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<Package/>").unwrap();
    writer
        .start_file(SIGNATURE_PART, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(signature).unwrap();
    writer.finish().unwrap();
}

#[test]
fn empty_file_yields_the_well_known_empty_digest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    std::fs::write(&path, b"").unwrap();

    let (ctx, reporter) = run_pipeline(path, false);

    assert_eq!(
        reporter.infos(),
        vec!["File Hash: e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"]
    );
    assert_eq!(ctx.termination(), None);
}

#[test]
fn abc_file_yields_the_published_vector() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("abc.bin");
    std::fs::write(&path, b"abc").unwrap();

    let (_, reporter) = run_pipeline(path, false);

    assert_eq!(
        reporter.infos(),
        vec!["File Hash: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"]
    );
}

#[test]
fn flag_off_skips_extraction_even_for_signed_packages() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("signed.msix");
    write_signed_package(&path, b"signature bytes");

    let (ctx, reporter) = run_pipeline(path, false);

    assert_eq!(reporter.infos().len(), 1);
    assert!(reporter.warnings().is_empty());
    assert_eq!(ctx.termination(), None);
}

#[test]
fn unsigned_plain_file_warns_twice_and_terminates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.txt");
    std::fs::write(&path, b"not a container").unwrap();

    let (ctx, reporter) = run_pipeline(path, true);

    // The file digest is still reported before the extraction attempt.
    assert_eq!(reporter.infos().len(), 1);
    assert!(reporter.infos()[0].starts_with("File Hash: "));
    assert_eq!(reporter.warnings().len(), 2);

    let code = ctx.termination().unwrap();
    assert_eq!(code, pakit_msix::Error::NotAPackage.exit_code());
    assert_ne!(code, 0);
    assert_ne!(code, 1);
}

#[test]
fn signed_package_reports_both_digests_and_succeeds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("signed.msix");
    let signature = b"pkcs7 signature payload".to_vec();
    write_signed_package(&path, &signature);

    let (ctx, reporter) = run_pipeline(path, true);

    let infos = reporter.infos();
    assert_eq!(infos.len(), 2);
    assert!(infos[0].starts_with("File Hash: "));
    assert_eq!(
        infos[1],
        format!("Signature Hash: {}", hash_bytes(&signature))
    );
    assert!(reporter.warnings().is_empty());
    assert_eq!(ctx.termination(), None);
}

#[test]
fn unsigned_container_terminates_with_the_unsigned_code() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unsigned.msix");

    let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
    writer
        .start_file("AppxManifest.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<Package/>").unwrap();
    writer.finish().unwrap();

    let (ctx, reporter) = run_pipeline(path, true);

    assert_eq!(reporter.warnings().len(), 2);
    assert_eq!(
        ctx.termination(),
        Some(pakit_msix::Error::Unsigned.exit_code())
    );
    assert_ne!(
        ctx.termination(),
        Some(pakit_msix::Error::NotAPackage.exit_code())
    );
}

#[test]
fn missing_file_stops_at_verification() {
    let dir = tempdir().unwrap();

    let (ctx, reporter) = run_pipeline(dir.path().join("missing.bin"), true);

    // The hash step never ran: no digest line, only the verify warning.
    assert!(reporter.infos().is_empty());
    assert_eq!(reporter.warnings().len(), 1);
    assert_eq!(ctx.termination(), Some(FILE_NOT_FOUND));
}
