use crate::cli::{Cli, Commands, DriveOpArg, PartitionLayoutArg};
use clap::Parser;

#[test]
fn test_inventory_parsing() {
    let cli = Cli::try_parse_from(["rusttapes", "inventory", "/dev/IBMchanger0"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Inventory { json: false, .. }
    ));

    let cli = Cli::try_parse_from(["rusttapes", "inventory", "/dev/IBMchanger0", "--json"])
        .unwrap();
    assert!(matches!(cli.command, Commands::Inventory { json: true, .. }));
}

#[test]
fn test_load_parsing() {
    let cli = Cli::try_parse_from([
        "rusttapes",
        "load",
        "/dev/IBMchanger0",
        "ABC123",
        "--drive",
        "5",
        "--robot",
        "1",
    ])
    .unwrap();

    if let Commands::Load {
        changer,
        barcode,
        drive,
        robot,
    } = cli.command
    {
        assert_eq!(changer, "/dev/IBMchanger0");
        assert_eq!(barcode, "ABC123");
        assert_eq!(drive, 5);
        assert_eq!(robot, 1);
    } else {
        panic!("expected load command");
    }
}

#[test]
fn test_unload_parsing() {
    let cli = Cli::try_parse_from([
        "rusttapes",
        "unload",
        "/dev/IBMchanger0",
        "--drive",
        "5",
        "--robot",
        "1",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Unload {
            drive: 5,
            robot: 1,
            ..
        }
    ));
}

#[test]
fn test_partition_idp_parsing() {
    let cli = Cli::try_parse_from([
        "rusttapes",
        "partition",
        "/dev/IBMtape0",
        "idp",
        "55",
        "55",
    ])
    .unwrap();

    if let Commands::Partition { device, layout } = cli.command {
        assert_eq!(device, "/dev/IBMtape0");
        assert!(matches!(layout, PartitionLayoutArg::Idp { wraps } if wraps == vec![55, 55]));
    } else {
        panic!("expected partition command");
    }

    // IDP without any wrap counts is rejected at parse time.
    assert!(Cli::try_parse_from(["rusttapes", "partition", "/dev/IBMtape0", "idp"]).is_err());
}

#[test]
fn test_partition_sdp_and_fdp_parsing() {
    let cli = Cli::try_parse_from([
        "rusttapes",
        "partition",
        "/dev/IBMtape0",
        "sdp",
        "--count",
        "4",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Partition {
            layout: PartitionLayoutArg::Sdp { count: 4 },
            ..
        }
    ));

    let cli = Cli::try_parse_from(["rusttapes", "partition", "/dev/IBMtape0", "fdp"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Partition {
            layout: PartitionLayoutArg::Fdp,
            ..
        }
    ));

    let cli = Cli::try_parse_from(["rusttapes", "partition", "/dev/IBMtape0", "single"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Partition {
            layout: PartitionLayoutArg::Single,
            ..
        }
    ));
}

#[test]
fn test_seek_parsing_rejects_conflicting_targets() {
    let cli = Cli::try_parse_from(["rusttapes", "seek", "/dev/IBMtape0", "--block", "42"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Seek {
            block: Some(42),
            file: None,
            eod: false,
            ..
        }
    ));

    assert!(Cli::try_parse_from([
        "rusttapes",
        "seek",
        "/dev/IBMtape0",
        "--block",
        "42",
        "--eod"
    ])
    .is_err());
}

#[test]
fn test_op_parsing() {
    let cli = Cli::try_parse_from(["rusttapes", "op", "/dev/IBMtape0", "rewind"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Op {
            operation: DriveOpArg::Rewind,
            ..
        }
    ));

    assert!(Cli::try_parse_from(["rusttapes", "op", "/dev/IBMtape0", "shred"]).is_err());
}

#[test]
fn test_global_verbose_flag() {
    let cli = Cli::try_parse_from(["rusttapes", "position", "/dev/IBMtape0", "--verbose"])
        .unwrap();
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Position { .. }));
}
