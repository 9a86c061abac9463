// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with reading LVC files.

use thiserror::Error;

use crate::spline::SplineError;
use crate::waveform::WaveformError;

#[derive(Error, Debug)]
pub enum LvcReadError {
    #[error("Specified LVC file '{0}' doesn't exist")]
    FileDoesntExist(String),

    #[error(
        "No dataset named 'nrtimes' (in any case) anywhere in the file; is this really an LVC file?"
    )]
    MissingTimeKey,

    #[error("No groups named like 'amp_l2_m2' at the file root; is there any mode data in the file?")]
    NoModes,

    #[error("Group 'amp_l{ell}_m{m}' has no matching 'phase_l{ell}_m{m}'")]
    MissingPhaseGroup { ell: i32, m: i32 },

    #[error("Mode (ell, m) = ({ell}, {m}) violates ell >= 0, |m| <= ell")]
    ModeOutOfRange { ell: i32, m: i32 },

    #[error(
        "Mode (ell, m) = ({ell}, {m}) has no data, but the file spans ell {ell_min}..={ell_max}"
    )]
    IncompleteModes {
        ell: i32,
        m: i32,
        ell_min: i32,
        ell_max: i32,
    },

    /// An error associated with parsing a string into another type.
    #[error("Couldn't parse '{0}' to a number")]
    Parse(String),

    #[error("Mode group '{group}': {source}")]
    Spline { group: String, source: SplineError },

    #[error("History record '{0}' exists but isn't decodable text")]
    HistoryDecode(String),

    #[error(transparent)]
    Waveform(#[from] WaveformError),

    /// An error associated with the LVC_WAVEFORM_FILE environment variable.
    #[error("Problem with the LVC_WAVEFORM_FILE variable: {0}")]
    WaveformFileVarError(#[from] std::env::VarError),

    /// An error associated with the hdf5 crate.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),
}
