// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Benchmarks. The read benchmark writes a synthetic LVC file into a temporary
directory first.
 */

use criterion::*;

use nr_waveform::lvc::{read_from_file, ReadOptions};
use nr_waveform::spline::Spline;

fn spline(c: &mut Criterion) {
    let x: Vec<f64> = (0..1024).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|x| (x / 50.0).sin()).collect();

    c.bench_function("spline_interpolating", |b| {
        b.iter(|| Spline::interpolating(&x, &y, 3).unwrap())
    });

    c.bench_function("spline_evaluate_many", |b| {
        let spline = Spline::interpolating(&x, &y, 3).unwrap();
        let t: Vec<f64> = (0..4096).map(|i| i as f64 / 4.0).collect();
        b.iter(|| spline.evaluate_many(&t))
    });
}

fn lvc(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waveform.h5");
    {
        let file = hdf5::File::create(&path).unwrap();
        let t: Vec<f64> = (0..4096).map(|i| i as f64 / 16.0).collect();
        file.new_dataset_builder()
            .with_data(t.as_slice())
            .create("nrtimes")
            .unwrap();
        let x: Vec<f64> = (0..256).map(|i| i as f64).collect();
        for ell in 2..=4_i32 {
            for m in -ell..=ell {
                for prefix in ["amp", "phase"] {
                    let group = file
                        .create_group(&format!("{prefix}_l{ell}_m{m}"))
                        .unwrap();
                    let y: Vec<f64> = x.iter().map(|x| (x / 10.0 + m as f64).cos()).collect();
                    group
                        .new_dataset_builder()
                        .with_data(x.as_slice())
                        .create("X")
                        .unwrap();
                    group
                        .new_dataset_builder()
                        .with_data(y.as_slice())
                        .create("Y")
                        .unwrap();
                    group
                        .new_dataset_builder()
                        .with_data(&ndarray::arr0(3_i64))
                        .create("deg")
                        .unwrap();
                }
            }
        }
    }

    c.bench_function("read_from_file", |b| {
        b.iter(|| read_from_file(&path, &ReadOptions::default()).unwrap())
    });
}

criterion_group!(benches, spline, lvc);
criterion_main!(benches);
