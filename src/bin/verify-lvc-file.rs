// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This program reads each LVC waveform file named on the command line and
//! reports whether it parses, along with a one-line summary of its contents.

use nr_waveform::lvc::{read_from_file, LvcReadError, ReadOptions};

fn main() {
    // Test each input file.
    for lvc_file in std::env::args().skip(1) {
        if let Err(e) = test_file(&lvc_file) {
            println!("File '{}' failed to read: {}", &lvc_file, e);
        }
    }
}

fn test_file(lvc_file: &str) -> Result<(), LvcReadError> {
    println!("Testing file '{}'", lvc_file);
    let w = read_from_file(lvc_file, &ReadOptions::default())?;
    println!(
        "File '{}' is all good! {} time samples, {} modes (ell {}..={})",
        lvc_file,
        w.num_times(),
        w.num_modes(),
        w.ell_min(),
        w.ell_max()
    );
    Ok(())
}
