// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read waveforms stored in the LVC numerical-relativity format.
//!
//! An LVC file stores each spherical-harmonic mode as two groups of spline
//! samples, `amp_l{ell}_m{m}` and `phase_l{ell}_m{m}`, plus a shared time
//! grid. Reading reconstructs `amp * exp(i * phase)` on the time grid for
//! every mode present in the file.

mod error;

pub use error::LvcReadError;

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use ndarray::prelude::*;
use num_complex::Complex64 as c64;

use crate::{
    constants::*,
    modes::{lm_index, lm_total_size, modes_in_range},
    spline::Spline,
    waveform::{DataType, FrameType, WaveformModes},
};

/// Options accepted by [`read_from_file`]. Deliberately small; new fields
/// get defaults that preserve current behaviour.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Fail with [`LvcReadError::IncompleteModes`] if any (ell, m) within
    /// the file's ell range has no mode groups, instead of leaving that
    /// column of the data matrix zero.
    pub require_complete_modes: bool,
}

/// Read a waveform from an LVC-format HDF5 file.
///
/// The returned record covers the full rectangular mode range
/// [ell_min, ell_max] spanned by the file's amplitude groups; columns for
/// (ell, m) pairs the file doesn't carry are zero.
pub fn read_from_file<P: AsRef<Path>>(
    file: P,
    opts: &ReadOptions,
) -> Result<WaveformModes, LvcReadError> {
    let path = file.as_ref();
    // so that libhdf5 doesn't print errors to stdout
    hdf5::silence_errors(true);

    // If the file doesn't exist, hdf5::File::open will handle it, but the
    // error message is horrendous.
    if !path.exists() {
        return Err(LvcReadError::FileDoesntExist(path.display().to_string()));
    }

    // First open: resolve the time key, then let the handle close again.
    let time_key = {
        let h5 = hdf5::File::open(path)?;
        find_time_key(&h5, "")?.ok_or(LvcReadError::MissingTimeKey)?
    };
    debug!("resolved time key '{time_key}'");

    // Second open: the full read.
    let h5 = hdf5::File::open(path)?;
    let t: Array1<f64> = h5.dataset(&time_key)?.read_1d()?;

    let mode_groups = scan_mode_groups(&h5.member_names()?)?;
    let ell_min = mode_groups
        .keys()
        .map(|&(ell, _)| ell)
        .min()
        .expect("the mode table is never empty");
    let ell_max = mode_groups
        .keys()
        .map(|&(ell, _)| ell)
        .max()
        .expect("the mode table is never empty");
    debug!(
        "found {} modes, ell range {ell_min}..={ell_max}",
        mode_groups.len()
    );

    if opts.require_complete_modes {
        for (ell, m) in modes_in_range(ell_min, ell_max) {
            if !mode_groups.contains_key(&(ell, m)) {
                return Err(LvcReadError::IncompleteModes {
                    ell,
                    m,
                    ell_min,
                    ell_max,
                });
            }
        }
    }

    // Columns for (ell, m) pairs absent from the file stay zero.
    let mut data = Array2::<c64>::zeros((t.len(), lm_total_size(ell_min, ell_max)));
    for (&(ell, m), groups) in &mode_groups {
        let amp = evaluate_group(&h5, &groups.amp, &t)?;
        let phase = evaluate_group(&h5, &groups.phase, &t)?;
        let mut column = data.column_mut(lm_index(ell, m, ell_min));
        for ((out, a), p) in column.iter_mut().zip(amp).zip(phase) {
            *out = a * c64::cis(p);
        }
    }

    let history = read_history(&h5)?;
    let constructor_statement = format!("nr_waveform::lvc::read_from_file(\"{}\")", path.display());
    let w = WaveformModes::new(
        t,
        data,
        ell_min,
        ell_max,
        FrameType::Inertial,
        DataType::Strain,
        history,
        constructor_statement,
        true,
        true,
    )?;
    Ok(w)
}

/// Read a waveform from the file named by the `LVC_WAVEFORM_FILE`
/// environment variable.
pub fn read_from_env(opts: &ReadOptions) -> Result<WaveformModes, LvcReadError> {
    match std::env::var(LVC_WAVEFORM_FILE_VAR) {
        Ok(f) => read_from_file(f, opts),
        Err(e) => Err(LvcReadError::WaveformFileVarError(e)),
    }
}

/// Recursively search for a member whose name matches the time key,
/// ignoring case. Returns the full path of the first match; traversal stops
/// as soon as one is found. Traversal order is whatever the storage layer
/// reports, so files carrying several candidate keys resolve to an
/// unspecified one of them.
fn find_time_key(group: &hdf5::Group, prefix: &str) -> Result<Option<String>, LvcReadError> {
    for name in group.member_names()? {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };
        if name.eq_ignore_ascii_case(NR_TIME_KEY) {
            return Ok(Some(path));
        }
        // Only groups can be descended into; other members are skipped.
        if let Ok(subgroup) = group.group(&name) {
            if let Some(found) = find_time_key(&subgroup, &path)? {
                return Ok(Some(found));
            }
        }
    }
    Ok(None)
}

/// The amplitude and phase group names backing one (ell, m) mode.
struct ModeGroups {
    amp: String,
    phase: String,
}

/// Scan the file root's member names for mode groups. The amplitude groups
/// define the mode set; each must have a phase partner.
fn scan_mode_groups(names: &[String]) -> Result<BTreeMap<(i32, i32), ModeGroups>, LvcReadError> {
    let mut amps = BTreeMap::new();
    let mut phases = BTreeMap::new();
    for name in names {
        if let Some((ell, m)) = parse_mode_name(name, AMP_GROUP_PREFIX)? {
            amps.insert((ell, m), name.clone());
        } else if let Some((ell, m)) = parse_mode_name(name, PHASE_GROUP_PREFIX)? {
            phases.insert((ell, m), name.clone());
        }
    }

    if amps.is_empty() {
        return Err(LvcReadError::NoModes);
    }

    let mut mode_groups = BTreeMap::new();
    for ((ell, m), amp) in amps {
        if ell < 0 || m.abs() > ell {
            return Err(LvcReadError::ModeOutOfRange { ell, m });
        }
        let phase = phases
            .remove(&(ell, m))
            .ok_or(LvcReadError::MissingPhaseGroup { ell, m })?;
        mode_groups.insert((ell, m), ModeGroups { amp, phase });
    }
    Ok(mode_groups)
}

/// Parse names like "amp_l2_m-2" into (2, -2). Names without the pattern's
/// shape are `None`; names with the shape but non-integer fields are an
/// error.
fn parse_mode_name(name: &str, prefix: &str) -> Result<Option<(i32, i32)>, LvcReadError> {
    let Some(rest) = name.strip_prefix(prefix) else {
        return Ok(None);
    };
    let Some((ell_str, m_str)) = rest.split_once(MODE_M_SEPARATOR) else {
        return Ok(None);
    };
    let ell = ell_str
        .parse()
        .map_err(|_| LvcReadError::Parse(ell_str.to_string()))?;
    let m = m_str
        .parse()
        .map_err(|_| LvcReadError::Parse(m_str.to_string()))?;
    Ok(Some((ell, m)))
}

/// Read one mode group's (X, Y, deg) triple and evaluate its interpolating
/// spline on the time grid.
fn evaluate_group(
    h5: &hdf5::File,
    group_name: &str,
    t: &Array1<f64>,
) -> Result<Vec<f64>, LvcReadError> {
    let group = h5.group(group_name)?;
    let x: Vec<f64> = group.dataset("X")?.read_raw()?;
    let y: Vec<f64> = group.dataset("Y")?.read_raw()?;
    let degree = group.dataset("deg")?.read_scalar::<i64>()?;
    // A negative stored degree is as unusable as degree 0.
    let degree = usize::try_from(degree).unwrap_or(0);

    let spline = Spline::interpolating(&x, &y, degree).map_err(|source| LvcReadError::Spline {
        group: group_name.to_string(),
        source,
    })?;
    Ok(spline.evaluate_many(t.as_slice().expect("the time grid is contiguous")))
}

/// Decode the optional "auxiliary-info/history.txt" record into marked
/// lines. A missing record is a single empty line, never an error.
fn read_history(h5: &hdf5::File) -> Result<Vec<String>, LvcReadError> {
    let has_history = h5.link_exists(AUX_INFO_GROUP)
        && h5.group(AUX_INFO_GROUP)?.link_exists(HISTORY_DATASET);
    if !has_history {
        return Ok(vec![String::new()]);
    }

    let dataset_path = format!("{AUX_INFO_GROUP}/{HISTORY_DATASET}");
    let dataset = h5.dataset(&dataset_path)?;
    let text =
        read_string_scalar(&dataset).ok_or(LvcReadError::HistoryDecode(dataset_path))?;
    Ok(text
        .split('\n')
        .map(|line| format!("{HISTORY_MARKER}{line}"))
        .collect())
}

/// HDF5 strings come in several flavours; try the variable-length ones in
/// turn and let libhdf5 convert fixed-length storage.
fn read_string_scalar(dataset: &hdf5::Dataset) -> Option<String> {
    if let Ok(s) = dataset.read_scalar::<hdf5::types::VarLenUnicode>() {
        return Some(s.to_string());
    }
    if let Ok(s) = dataset.read_scalar::<hdf5::types::VarLenAscii>() {
        return Some(s.to_string());
    }
    None
}
