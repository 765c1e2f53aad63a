use std::path::PathBuf;

use clap::Parser;
use tempfile::tempdir;

use crate::formats::{read_volume, write_volume};
use crate::model::{Geometry, PixelType, Volume};

use super::runner::run;
use super::types::{Cli, Commands, SourceArgs};

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("med-image-utils").chain(args.iter().copied()))
}

#[test]
fn resize_arguments_parse_json_sizes() {
    let cli = parse(&[
        "resize",
        "--imagePath",
        "scan.nii.gz",
        "--newSize",
        "[128, 128, 64]",
        "--outputPath",
        "out",
        "--outputFormat",
        "mha",
    ])
    .expect("parse");
    assert!(!cli.strict);
    match cli.command {
        Commands::Resize {
            source,
            new_size,
            output_path,
            output_format,
        } => {
            assert_eq!(source.image_path, Some(PathBuf::from("scan.nii.gz")));
            assert_eq!(source.folder_path, None);
            assert_eq!(new_size.0, vec![128, 128, 64]);
            assert_eq!(output_path, PathBuf::from("out"));
            assert_eq!(output_format.as_deref(), Some("mha"));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn extract_arguments_default_to_one_slice() {
    let cli = parse(&[
        "--strict",
        "extract2D",
        "--folderPath",
        "scans",
        "--outputPath",
        "out",
    ])
    .expect("parse");
    assert!(cli.strict);
    match cli.command {
        Commands::Extract2D {
            source: SourceArgs { folder_path, .. },
            location,
            count,
            ..
        } => {
            assert_eq!(folder_path, Some(PathBuf::from("scans")));
            assert_eq!(location, None);
            assert_eq!(count, 1);
        }
        other => panic!("unexpected command {other:?}"),
    }

    let cli = parse(&[
        "extract2D",
        "--imagePath",
        "scan.mha",
        "--location",
        "[10,20,30]",
        "--N",
        "3",
        "--outputPath",
        "out",
    ])
    .expect("parse");
    match cli.command {
        Commands::Extract2D {
            location, count, ..
        } => {
            assert_eq!(location, Some([10, 20, 30]));
            assert_eq!(count, 3);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn source_arguments_are_exclusive_and_required() {
    let both = parse(&[
        "resize",
        "--imagePath",
        "a.nii",
        "--folderPath",
        "dir",
        "--newSize",
        "[2,2,2]",
        "--outputPath",
        "out",
    ]);
    assert!(both.is_err());

    let neither = parse(&["resize", "--newSize", "[2,2,2]", "--outputPath", "out"]);
    assert!(neither.is_err());
}

#[test]
fn malformed_json_is_rejected() {
    let sizes = parse(&[
        "resize",
        "--imagePath",
        "a.nii",
        "--newSize",
        "128,128",
        "--outputPath",
        "out",
    ]);
    assert!(sizes.is_err());

    let location = parse(&[
        "extract2D",
        "--imagePath",
        "a.nii",
        "--location",
        "[1,2]",
        "--outputPath",
        "out",
    ]);
    assert!(location.is_err());
}

#[test]
fn resize_command_writes_outputs() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("scan.nii");
    let volume = Volume::new(
        ndarray::Array3::from_elem((4, 4, 4), 7.0_f64),
        Geometry::new([4, 4, 4]),
        PixelType::F32,
    )
    .expect("volume");
    write_volume(&input, &volume).expect("write");

    let out = dir.path().join("out");
    let cli = parse(&[
        "resize",
        "--imagePath",
        input.to_str().expect("utf-8 path"),
        "--newSize",
        "[2,2,2]",
        "--outputPath",
        out.to_str().expect("utf-8 path"),
        "--outputFormat",
        "mha",
    ])
    .expect("parse");
    run(cli).expect("run");

    let resized = read_volume(out.join("scan_resized.mha")).expect("read");
    assert_eq!(resized.size(), [2, 2, 2]);
    assert!(out.join("scan_resized_meta.json").exists());
}

#[test]
fn missing_input_reports_an_error() {
    let dir = tempdir().expect("tempdir");
    let cli = parse(&[
        "info",
        dir.path().join("absent.nii").to_str().expect("utf-8 path"),
    ])
    .expect("parse");
    assert!(run(cli).is_err());
}
