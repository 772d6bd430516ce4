//! End-to-end driver runs on small lattices.

use std::fs;
use std::path::PathBuf;

use foundry::io::write_voltages_to_path;
use foundry::prelude::*;
use foundry::run::field_file_name;
use foundry::{DeviceImport, Exports};
use foundry_test_utils::rod_cube;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("foundry-run-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn small(seed: Seed) -> RunConfig {
    RunConfig {
        points_per_dim: 7,
        start: 0.0,
        end: 6.0,
        seed,
        ..RunConfig::default()
    }
}

#[test]
fn identical_runs_produce_identical_digests() {
    let config = RunConfig {
        relax: true,
        ..small(Seed::Rod {
            voltage: 1.0,
            gap: false,
        })
    };
    let a = run(&config).unwrap();
    let b = run(&config).unwrap();
    assert_eq!(a.voltage_digest, b.voltage_digest);
    assert_eq!(a.field_digests, b.field_digests);
    assert_eq!(a.steps.len(), 3);
    assert_eq!(a.final_time, a.steps[2].time);
    assert_eq!(a.relaxation.unwrap().unconverged_per_sweep.last(), Some(&0));
}

#[test]
fn gapped_rod_is_closed_before_stepping() {
    let summary = run(&small(Seed::Rod {
        voltage: 1.0,
        gap: true,
    }))
    .unwrap();
    let open = run(&RunConfig {
        steps: 0,
        initial_field: false,
        ..small(Seed::Rod {
            voltage: 1.0,
            gap: true,
        })
    })
    .unwrap();
    // Closing the gap changes conductivity at the centre cell.
    assert_ne!(summary.voltage_digest, open.voltage_digest);
}

#[test]
fn exports_one_file_per_kind_and_time() {
    let dir = scratch_dir("exports");
    let config = RunConfig {
        steps: 2,
        output_dir: Some(dir.clone()),
        exports: Exports {
            voltages: true,
            fields: vec![FieldKind::Electric, FieldKind::Current],
        },
        ..small(Seed::Rod {
            voltage: 1.0,
            gap: false,
        })
    };
    let summary = run(&config).unwrap();

    // initial-voltages plus 2 kinds × 3 times.
    assert_eq!(summary.files_written.len(), 7);
    assert!(dir.join("initial-voltages").is_file());
    for time in summary.times() {
        for kind in [FieldKind::Electric, FieldKind::Current] {
            let path = dir.join(field_file_name(kind, time));
            let text = fs::read_to_string(&path).unwrap();
            assert_eq!(text.lines().count(), 343, "{}", path.display());
        }
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn dataset_seed_and_device_import() {
    let dir = scratch_dir("dataset");
    fs::create_dir_all(&dir).unwrap();
    let dataset = dir.join("voltages");
    write_voltages_to_path(&rod_cube(7, 0.5), &dataset).unwrap();
    let device = dir.join("device");
    fs::write(&device, "1 1\n5 5\n").unwrap();

    let config = RunConfig {
        steps: 1,
        device: Some(DeviceImport {
            path: device,
            voltage: 2.0,
            k_span: 2.0..=4.0,
        }),
        ..small(Seed::Dataset(dataset))
    };
    let summary = run(&config).unwrap();
    let device = summary.device.unwrap();
    assert_eq!(device.columns_on_grid, 2);
    assert_eq!(device.cells_marked, 6);
    assert_eq!(summary.final_time, SimTime(0.00125));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_dataset_is_an_io_error() {
    let config = small(Seed::Dataset(PathBuf::from("/nonexistent/foundry/voltages")));
    assert!(matches!(run(&config), Err(RunError::Io(IoError::Io { .. }))));
}

#[test]
fn sweep_cap_surfaces_as_relax_error() {
    let config = RunConfig {
        relax: true,
        max_sweeps: Some(1),
        ..small(Seed::Rod {
            voltage: 1.0,
            gap: false,
        })
    };
    assert!(matches!(
        run(&config),
        Err(RunError::Relax(RelaxError::SweepLimitReached { sweeps: 1, .. }))
    ));
}
